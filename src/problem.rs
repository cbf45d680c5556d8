// The problem entity: one configured generator kind inside a document, plus
// the operations the assembly layer calls. The kind (and with it the type
// tag) is fixed when the problem is created; edits only replace parameter
// values or the custom text pair.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::SeedKey;
use crate::engine;
use crate::kinds::ProblemKind;
use crate::template::{self, RenderedText, TemplateError};
use crate::value::Data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub i64);

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    #[error("instruction and solution must be overridden together or not at all")]
    PartialCustomText,
    #[error("problem kind is fixed at creation: expected `{expected}`, got `{got}`")]
    KindMismatch {
        expected: &'static str,
        got: &'static str,
    },
    #[error("a problem lists at least one subproblem")]
    NoSubproblems,
    #[error(transparent)]
    Generate(#[from] engine::GenerateError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

fn default_subproblems() -> u32 {
    1
}

/// A persisted problem configuration. Custom text is all-or-nothing: either
/// both fields are empty (kind defaults apply) or both are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub document: DocumentId,
    kind: ProblemKind,
    #[serde(default = "default_subproblems")]
    number_of_subproblems: u32,
    #[serde(default)]
    instruction: String,
    #[serde(default)]
    solution: String,
}

impl Problem {
    pub fn new(id: ProblemId, document: DocumentId, kind: ProblemKind) -> Problem {
        Problem {
            id,
            document,
            kind,
            number_of_subproblems: 1,
            instruction: String::new(),
            solution: String::new(),
        }
    }

    pub fn kind(&self) -> &ProblemKind {
        &self.kind
    }

    /// Replaces the parameter values. The kind itself cannot change.
    pub fn set_parameters(&mut self, kind: ProblemKind) -> Result<(), ProblemError> {
        if kind.tag() != self.kind.tag() {
            return Err(ProblemError::KindMismatch {
                expected: self.kind.tag().as_str(),
                got: kind.tag().as_str(),
            });
        }
        self.kind = kind;
        Ok(())
    }

    pub fn number_of_subproblems(&self) -> u32 {
        self.number_of_subproblems
    }

    pub fn set_number_of_subproblems(&mut self, count: u32) -> Result<(), ProblemError> {
        if count == 0 {
            return Err(ProblemError::NoSubproblems);
        }
        self.number_of_subproblems = count;
        Ok(())
    }

    pub fn uses_custom_text(&self) -> bool {
        !self.instruction.is_empty() || !self.solution.is_empty()
    }

    /// Sets or clears the custom text pair. A partial pair (exactly one side
    /// empty) is the invalid state the editing boundary must refuse.
    pub fn set_custom_text(
        &mut self,
        instruction: &str,
        solution: &str,
    ) -> Result<(), ProblemError> {
        if instruction.is_empty() != solution.is_empty() {
            return Err(ProblemError::PartialCustomText);
        }
        self.instruction = instruction.to_string();
        self.solution = solution.to_string();
        Ok(())
    }

    pub fn clear_custom_text(&mut self) {
        self.instruction.clear();
        self.solution.clear();
    }

    /// The template pair in effect: the custom pair when present, otherwise
    /// the kind defaults. Never a mixture.
    pub fn templates(&self) -> (&str, &str) {
        if self.uses_custom_text() {
            (&self.instruction, &self.solution)
        } else {
            (self.kind.default_instruction(), self.kind.default_solution())
        }
    }

    pub fn seed_key(&self, student: Option<StudentId>) -> SeedKey {
        SeedKey {
            problem: self.id,
            student,
        }
    }

    /// Data for a preview, not tied to any student.
    pub fn example_data(&self) -> Result<Vec<Data>, ProblemError> {
        let data = engine::generate_subproblems(self, &self.seed_key(None))?;
        Ok(data)
    }

    /// Rendered preview text.
    pub fn example_text(&self) -> Result<Vec<RenderedText>, ProblemError> {
        let data = self.example_data()?;
        self.render(&data)
    }

    /// The personalized rendering for one student.
    pub fn student_text(&self, student: StudentId) -> Result<Vec<RenderedText>, ProblemError> {
        let data = engine::generate_subproblems(self, &self.seed_key(Some(student)))?;
        self.render(&data)
    }

    /// Renders already-generated data with whichever template pair is in
    /// effect.
    pub fn render(&self, data: &[Data]) -> Result<Vec<RenderedText>, ProblemError> {
        let (instruction, solution) = self.templates();
        let rendered = template::render(instruction, solution, data)?;
        Ok(rendered)
    }

    /// Copies this problem into another document under a fresh identity,
    /// keeping parameters and the text-customization state.
    pub fn copy_into(&self, id: ProblemId, document: DocumentId) -> Problem {
        Problem {
            id,
            document,
            kind: self.kind.clone(),
            number_of_subproblems: self.number_of_subproblems,
            instruction: self.instruction.clone(),
            solution: self.solution.clone(),
        }
    }
}
