// Deterministic random source for generation attempts. Every attempt owns its
// own ChaCha8 stream, seeded by hashing the canonical seed-key string, so the
// same (problem, student, subproblem) key always replays the same draws and
// concurrent generations share nothing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

use crate::problem::{ProblemId, StudentId};

/// A generator kind's signal that the current draw is unusable and the
/// attempt should be retried with further randomness. This is control flow,
/// not a fault: only the retry driver consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected;

pub type Draw<T> = Result<T, Rejected>;

/// Rejects the current attempt unless `condition` holds.
pub fn require(condition: bool) -> Draw<()> {
    if condition {
        Ok(())
    } else {
        Err(Rejected)
    }
}

/// Identity of one generation: which problem, and for which student. The
/// preview flavor (no student) seeds differently from every student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedKey {
    pub problem: ProblemId,
    pub student: Option<StudentId>,
}

impl SeedKey {
    pub fn preview(problem: ProblemId) -> SeedKey {
        SeedKey { problem, student: None }
    }

    pub fn for_student(problem: ProblemId, student: StudentId) -> SeedKey {
        SeedKey {
            problem,
            student: Some(student),
        }
    }

    /// Canonical string for one subproblem: `"{index}-{problem}-{student}"`
    /// with `none` standing in for a missing student.
    pub fn subproblem_string(&self, index: u32) -> String {
        match self.student {
            Some(student) => format!("{}-{}-{}", index, self.problem, student),
            None => format!("{}-{}-none", index, self.problem),
        }
    }
}

/// The random stream one generation attempt draws from.
#[derive(Debug, Clone)]
pub struct DataSource {
    rng: ChaCha8Rng,
}

impl DataSource {
    /// Seeds the stream for the given subproblem of the given key.
    pub fn for_subproblem(key: &SeedKey, index: u32) -> DataSource {
        DataSource::from_seed_string(&key.subproblem_string(index))
    }

    fn from_seed_string(seed: &str) -> DataSource {
        let digest = Sha256::digest(seed.as_bytes());
        let mut seed_bytes = [0u8; 32];
        seed_bytes.copy_from_slice(&digest);
        DataSource {
            rng: ChaCha8Rng::from_seed(seed_bytes),
        }
    }

    /// Uniform integer in the inclusive range `[lo, hi]`.
    pub fn int_in(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "empty integer range");
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform choice from a non-empty slice.
    pub fn choice<'a, T>(&mut self, options: &'a [T]) -> &'a T {
        assert!(!options.is_empty(), "choice from an empty slice");
        &options[self.rng.gen_range(0..options.len())]
    }

    /// `count` independent uniform choices, with repetition.
    pub fn choices<T: Clone>(&mut self, options: &[T], count: usize) -> Vec<T> {
        (0..count).map(|_| self.choice(options).clone()).collect()
    }

    /// Weighted choice. Weights are relative integer frequencies; at least
    /// one must be positive.
    pub fn weighted_choice<'a, T>(&mut self, options: &'a [T], weights: &[u32]) -> &'a T {
        assert_eq!(
            options.len(),
            weights.len(),
            "weights must match options one to one"
        );
        let total: u64 = weights.iter().map(|&w| w as u64).sum();
        assert!(total > 0, "weighted choice needs a positive total weight");
        let mut probe = self.rng.gen_range(0..total);
        for (option, &weight) in options.iter().zip(weights) {
            let weight = weight as u64;
            if probe < weight {
                return option;
            }
            probe -= weight;
        }
        unreachable!("probe exceeded total weight")
    }

    /// `count` weighted choices, with repetition.
    pub fn weighted_choices<T: Clone>(
        &mut self,
        options: &[T],
        weights: &[u32],
        count: usize,
    ) -> Vec<T> {
        (0..count)
            .map(|_| self.weighted_choice(options, weights).clone())
            .collect()
    }

    /// `count` elements sampled without replacement, in draw order.
    pub fn sample<T: Clone>(&mut self, options: &[T], count: usize) -> Vec<T> {
        assert!(
            count <= options.len(),
            "cannot sample {} from {} options",
            count,
            options.len()
        );
        let mut indices: Vec<usize> = (0..options.len()).collect();
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let at = self.rng.gen_range(0..indices.len());
            drawn.push(options[indices.swap_remove(at)].clone());
        }
        drawn
    }
}

/// The integers `lo..=hi` without zero, a pool most kinds draw coefficients
/// from.
pub fn nonzero_range(lo: i64, hi: i64) -> Vec<i64> {
    (lo..=hi).filter(|&n| n != 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{ProblemId, StudentId};

    fn key() -> SeedKey {
        SeedKey::for_student(ProblemId(7), StudentId(3))
    }

    #[test]
    fn canonical_seed_strings() {
        assert_eq!(key().subproblem_string(0), "0-7-3");
        assert_eq!(SeedKey::preview(ProblemId(7)).subproblem_string(2), "2-7-none");
    }

    #[test]
    fn same_key_same_stream() {
        let mut a = DataSource::for_subproblem(&key(), 0);
        let mut b = DataSource::for_subproblem(&key(), 0);
        for _ in 0..100 {
            assert_eq!(a.int_in(-1000, 1000), b.int_in(-1000, 1000));
        }
    }

    #[test]
    fn different_subproblems_diverge() {
        let mut a = DataSource::for_subproblem(&key(), 0);
        let mut b = DataSource::for_subproblem(&key(), 1);
        let draws_a: Vec<i64> = (0..20).map(|_| a.int_in(0, 1_000_000)).collect();
        let draws_b: Vec<i64> = (0..20).map(|_| b.int_in(0, 1_000_000)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn student_and_preview_diverge() {
        let mut preview = DataSource::for_subproblem(&SeedKey::preview(ProblemId(7)), 0);
        let mut student = DataSource::for_subproblem(&key(), 0);
        let a: Vec<i64> = (0..20).map(|_| preview.int_in(0, 1_000_000)).collect();
        let b: Vec<i64> = (0..20).map(|_| student.int_in(0, 1_000_000)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn draws_respect_bounds() {
        let mut source = DataSource::for_subproblem(&key(), 0);
        for _ in 0..1000 {
            let n = source.int_in(-3, 5);
            assert!((-3..=5).contains(&n));
        }
        let pool = [1, 2, 3];
        for _ in 0..100 {
            assert!(pool.contains(source.choice(&pool)));
        }
    }

    #[test]
    fn sample_is_without_replacement() {
        let mut source = DataSource::for_subproblem(&key(), 0);
        let pool: Vec<i64> = (0..10).collect();
        for _ in 0..100 {
            let mut drawn = source.sample(&pool, 4);
            drawn.sort_unstable();
            drawn.dedup();
            assert_eq!(drawn.len(), 4);
        }
    }

    #[test]
    fn weighted_choice_honors_zero_weights() {
        let mut source = DataSource::for_subproblem(&key(), 0);
        for _ in 0..200 {
            let picked = *source.weighted_choice(&[1, 2, 3], &[0, 5, 0]);
            assert_eq!(picked, 2);
        }
    }

    #[test]
    fn require_signals_rejection() {
        assert_eq!(require(true), Ok(()));
        assert_eq!(require(false), Err(Rejected));
    }

    #[test]
    fn nonzero_pool_skips_zero() {
        assert_eq!(nonzero_range(-2, 2), vec![-2, -1, 1, 2]);
    }
}
