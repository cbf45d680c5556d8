//! # Nadloga
//!
//! Deterministic generation and rendering engine for parametrized
//! mathematical problems.
//!
//! A [`Problem`](problem::Problem) ties a generator kind and its parameter
//! values to a document. Generating for a `(problem, student)` pair seeds an
//! isolated random stream per subproblem, retries the kind's `generate`
//! until it stops rejecting, suppresses duplicates across subproblems and
//! substitutes the resulting data into `@`-delimited instruction/solution
//! templates. The same seed key always reproduces the same rendered text;
//! different students get different variants of the same parametric family.
//!
//! ```
//! use nadloga::kinds::misc::FractionReduction;
//! use nadloga::kinds::ProblemKind;
//! use nadloga::problem::{DocumentId, Problem, ProblemId, StudentId};
//!
//! let problem = Problem::new(
//!     ProblemId(1),
//!     DocumentId(1),
//!     ProblemKind::FractionReduction(FractionReduction::default()),
//! );
//! let for_ana = problem.student_text(StudentId(7)).unwrap();
//! let again = problem.student_text(StudentId(7)).unwrap();
//! assert_eq!(for_ana, again);
//! ```

#[macro_use]
pub mod value;

pub mod data;
pub mod engine;
pub mod kinds;
pub mod math;
pub mod problem;
pub mod registry;
pub mod template;

pub use data::{require, DataSource, Draw, Rejected, SeedKey};
pub use engine::{generate_subproblems, generate_subproblems_with, GenerateError, GenerationLimits};
pub use kinds::{Generator, KindTag, ParamKind, ParamSpec, ProblemKind};
pub use problem::{DocumentId, Problem, ProblemError, ProblemId, StudentId};
pub use registry::{lookup, registry, KindInfo, UnknownKindTag};
pub use template::{render, substitute, RenderedText, TemplateError};
pub use value::{Data, Value};
