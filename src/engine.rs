// The rejection-sampling driver. For each subproblem the source is reseeded
// from the seed key and the kind's generate is retried until it yields data
// that is both valid (not rejected) and distinct from every mapping already
// accepted in this call, so subproblems listed together are visibly
// different. The retry budget turns a pathological parameter choice into an
// error instead of a hang.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::data::{DataSource, Rejected, SeedKey};
use crate::problem::Problem;
use crate::value::Data;

/// Retry budget for one subproblem. The default is far above what any
/// healthy kind needs (most accept within a handful of attempts) while still
/// bounding a parameter space smaller than `number_of_subproblems`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLimits {
    pub max_attempts: u32,
}

impl Default for GenerationLimits {
    fn default() -> GenerationLimits {
        GenerationLimits { max_attempts: 5_000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The kind kept rejecting (or kept producing duplicates) for an entire
    /// retry budget: a configuration error in the problem's parameters, not
    /// a transient condition.
    #[error(
        "kind `{tag}` produced no valid distinct data for subproblem {subproblem} \
         within {attempts} attempts; the parameters likely admit too few outcomes"
    )]
    RetriesExhausted {
        tag: &'static str,
        subproblem: u32,
        attempts: u32,
    },
}

/// Generates `problem.number_of_subproblems()` pairwise distinct data
/// mappings, deterministically in `key`.
pub fn generate_subproblems(problem: &Problem, key: &SeedKey) -> Result<Vec<Data>, GenerateError> {
    generate_subproblems_with(problem, key, &GenerationLimits::default())
}

pub fn generate_subproblems_with(
    problem: &Problem,
    key: &SeedKey,
    limits: &GenerationLimits,
) -> Result<Vec<Data>, GenerateError> {
    let kind = problem.kind();
    let tag = kind.tag().as_str();
    let mut accepted: Vec<Data> = Vec::with_capacity(problem.number_of_subproblems() as usize);
    for subproblem in 0..problem.number_of_subproblems() {
        let mut source = DataSource::for_subproblem(key, subproblem);
        let mut attempts = 0;
        let data = loop {
            if attempts == limits.max_attempts {
                return Err(GenerateError::RetriesExhausted {
                    tag,
                    subproblem,
                    attempts,
                });
            }
            attempts += 1;
            if attempts == limits.max_attempts / 2 {
                warn!(tag, subproblem, attempts, "retry budget half spent");
            }
            match kind.generate(&mut source) {
                Ok(data) => {
                    if accepted.contains(&data) {
                        trace!(tag, subproblem, attempts, "duplicate of an accepted subproblem");
                        continue;
                    }
                    break data;
                }
                Err(Rejected) => {
                    trace!(tag, subproblem, attempts, "draw rejected");
                }
            }
        };
        debug!(tag, subproblem, attempts, "subproblem data accepted");
        accepted.push(data);
    }
    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::misc::FractionReduction;
    use crate::kinds::ProblemKind;
    use crate::problem::{DocumentId, ProblemId};

    fn fraction_problem(subproblems: u32) -> Problem {
        let mut problem = Problem::new(
            ProblemId(1),
            DocumentId(1),
            ProblemKind::FractionReduction(FractionReduction::default()),
        );
        problem.set_number_of_subproblems(subproblems).unwrap();
        problem
    }

    #[test]
    fn regeneration_is_identical() {
        let problem = fraction_problem(3);
        let key = SeedKey::preview(ProblemId(1));
        let first = generate_subproblems(&problem, &key).unwrap();
        let second = generate_subproblems(&problem, &key).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn subproblems_are_pairwise_distinct() {
        let problem = fraction_problem(4);
        let key = SeedKey::preview(ProblemId(1));
        let data = generate_subproblems(&problem, &key).unwrap();
        assert_eq!(data.len(), 4);
        for i in 0..data.len() {
            for j in i + 1..data.len() {
                assert_ne!(data[i], data[j]);
            }
        }
    }

    #[test]
    fn impossible_configuration_exhausts_retries() {
        // All parameters 1 admit exactly one outcome, so a second distinct
        // subproblem can never be produced.
        let mut problem = Problem::new(
            ProblemId(1),
            DocumentId(1),
            ProblemKind::FractionReduction(FractionReduction {
                najvecji_stevec: 1,
                najvecji_imenovalec: 1,
                najvecji_faktor: 1,
            }),
        );
        problem.set_number_of_subproblems(2).unwrap();
        let key = SeedKey::preview(ProblemId(1));
        let limits = GenerationLimits { max_attempts: 50 };
        let err = generate_subproblems_with(&problem, &key, &limits).unwrap_err();
        assert_eq!(
            err,
            GenerateError::RetriesExhausted {
                tag: "fraction_reduction",
                subproblem: 1,
                attempts: 50,
            }
        );
    }
}
