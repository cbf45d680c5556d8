// The read-only kind registry: one row per registered kind with its grouping
// label, description, parameter schema and default templates. Populated once
// on first use and never mutated, so unsynchronized concurrent reads are
// fine.

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

use crate::kinds::{KindTag, ParamSpec, ProblemKind};
use crate::problem::{DocumentId, Problem, ProblemError, ProblemId};
use crate::template::RenderedText;

/// A problem referenced a kind tag nobody registered: a data-integrity
/// error, reported to the caller and never recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown problem kind tag `{0}`")]
pub struct UnknownKindTag(pub String);

/// One registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    pub tag: KindTag,
    pub group: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    pub default_instruction: &'static str,
    pub default_solution: &'static str,
}

impl KindInfo {
    /// The default parameter values as JSON, tagged with the kind; what a
    /// parameter form starts from.
    pub fn default_parameters(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(ProblemKind::with_defaults(self.tag))
    }

    /// One example rendering from defaults alone, for the kind picker. Uses
    /// a throwaway problem identity, so every call previews the same text.
    pub fn example(&self) -> Result<Vec<RenderedText>, ProblemError> {
        let problem = Problem::new(
            ProblemId(0),
            DocumentId(0),
            ProblemKind::with_defaults(self.tag),
        );
        problem.example_text()
    }
}

/// All registered kinds, in declaration order.
pub fn registry() -> &'static [KindInfo] {
    static REGISTRY: Lazy<Vec<KindInfo>> = Lazy::new(|| {
        let rows: Vec<KindInfo> = KindTag::ALL.iter().map(|&tag| tag.info()).collect();
        debug!(kinds = rows.len(), "problem kind registry initialized");
        rows
    });
    &REGISTRY
}

/// Resolves a persisted tag string to its registry row.
pub fn lookup(tag: &str) -> Result<&'static KindInfo, UnknownKindTag> {
    let tag: KindTag = tag.parse()?;
    registry()
        .iter()
        .find(|info| info.tag == tag)
        .ok_or_else(|| UnknownKindTag(tag.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_tag() {
        assert_eq!(registry().len(), KindTag::ALL.len());
        for (&tag, info) in KindTag::ALL.iter().zip(registry()) {
            assert_eq!(tag, info.tag);
            assert!(!info.group.is_empty());
            assert!(!info.name.is_empty());
            assert!(!info.default_instruction.is_empty());
            assert!(!info.default_solution.is_empty());
        }
    }

    #[test]
    fn lookup_by_tag_string() {
        let info = lookup("fraction_reduction").unwrap();
        assert_eq!(info.tag, KindTag::FractionReduction);
        assert_eq!(
            lookup("not_a_kind"),
            Err(UnknownKindTag("not_a_kind".to_string()))
        );
    }

    #[test]
    fn default_parameters_carry_the_tag() {
        for info in registry() {
            let json = info.default_parameters().unwrap();
            assert_eq!(json["kind"], info.tag.as_str());
            for param in info.params {
                assert!(
                    json.get(param.name).is_some(),
                    "kind `{}` declares `{}` but its defaults do not serialize it",
                    info.tag,
                    param.name
                );
            }
        }
    }

    #[test]
    fn every_kind_has_a_working_example() {
        for info in registry() {
            let rendered = info
                .example()
                .unwrap_or_else(|e| panic!("kind `{}` failed to preview: {}", info.tag, e));
            assert_eq!(rendered.len(), 1);
            assert!(!rendered[0].instruction.is_empty());
            assert!(!rendered[0].solution.is_empty());
        }
    }
}
