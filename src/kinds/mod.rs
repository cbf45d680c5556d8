// Generator kinds: one parametrized family of exercises per type. A kind is
// a pure function of its parameters and the random stream; everything else
// (retries, duplicate suppression, templating) lives in the driver and the
// renderer. The closed `ProblemKind` union replaces the original's
// table-per-subtype inheritance: the serde tag is the type tag, re-derived
// from the concrete variant and never trusted from input.

use serde::{Deserialize, Serialize};

use crate::data::{DataSource, Draw};
use crate::value::Data;

pub mod complex_numbers;
pub mod conics;
pub mod derivatives;
pub mod exponential;
pub mod factoring;
pub mod linear;
pub mod misc;
pub mod naturals;
pub mod powers;
pub mod quadratic;
pub mod sequences;
pub mod sets;

/// Semantic type of one declared parameter, for the form collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Int,
    Bool,
    Text,
}

/// One declared parameter: name as it appears in the serialized kind,
/// Slovenian form label and help text. Defaults come from the kind's
/// `Default` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub kind: ParamKind,
}

/// A parametrized family of mathematical exercises.
///
/// `generate` draws from the stream and either returns a complete data
/// mapping (whose field names exactly match the default templates) or
/// signals rejection for the driver to retry. The `Default` parameter set
/// must generate successfully, because the registry builds example previews
/// from it.
pub trait Generator: Default {
    /// Grouping label for the kind picker.
    const GROUP: &'static str;
    /// Short human-readable name.
    const NAME: &'static str;
    /// One-line description.
    const DESCRIPTION: &'static str;
    /// Declared parameter schema.
    const PARAMS: &'static [ParamSpec];
    /// Default instruction template. Mandatory for every kind.
    const INSTRUCTION: &'static str;
    /// Default solution template. Mandatory for every kind.
    const SOLUTION: &'static str;

    fn generate(&self, source: &mut DataSource) -> Draw<Data>;
}

macro_rules! problem_kinds {
    ($($variant:ident, $tag:literal, $module:ident :: $ty:ident;)+) => {
        /// A concrete problem kind with its parameter values. The serde
        /// representation is internally tagged: `{"kind": "<tag>", ...params}`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "kind")]
        pub enum ProblemKind {
            $(
                #[serde(rename = $tag)]
                $variant($module::$ty),
            )+
        }

        /// The stable type tag of a kind, without parameter values.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum KindTag {
            $($variant,)+
        }

        impl KindTag {
            /// Every registered tag, in registry order.
            pub const ALL: &'static [KindTag] = &[$(KindTag::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(KindTag::$variant => $tag,)+
                }
            }

            pub(crate) fn info(self) -> crate::registry::KindInfo {
                match self {
                    $(
                        KindTag::$variant => crate::registry::KindInfo {
                            tag: self,
                            group: <$module::$ty as Generator>::GROUP,
                            name: <$module::$ty as Generator>::NAME,
                            description: <$module::$ty as Generator>::DESCRIPTION,
                            params: <$module::$ty as Generator>::PARAMS,
                            default_instruction: <$module::$ty as Generator>::INSTRUCTION,
                            default_solution: <$module::$ty as Generator>::SOLUTION,
                        },
                    )+
                }
            }
        }

        impl std::fmt::Display for KindTag {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for KindTag {
            type Err = crate::registry::UnknownKindTag;

            fn from_str(s: &str) -> Result<KindTag, Self::Err> {
                match s {
                    $($tag => Ok(KindTag::$variant),)+
                    _ => Err(crate::registry::UnknownKindTag(s.to_string())),
                }
            }
        }

        impl ProblemKind {
            /// The type tag, derived from the concrete variant.
            pub fn tag(&self) -> KindTag {
                match self {
                    $(ProblemKind::$variant(_) => KindTag::$variant,)+
                }
            }

            /// Instantiates a kind with its default parameters.
            pub fn with_defaults(tag: KindTag) -> ProblemKind {
                match tag {
                    $(KindTag::$variant => ProblemKind::$variant(<$module::$ty>::default()),)+
                }
            }

            pub fn generate(&self, source: &mut DataSource) -> Draw<Data> {
                match self {
                    $(ProblemKind::$variant(kind) => kind.generate(source),)+
                }
            }

            pub fn default_instruction(&self) -> &'static str {
                match self {
                    $(ProblemKind::$variant(_) => <$module::$ty as Generator>::INSTRUCTION,)+
                }
            }

            pub fn default_solution(&self) -> &'static str {
                match self {
                    $(ProblemKind::$variant(_) => <$module::$ty as Generator>::SOLUTION,)+
                }
            }
        }
    };
}

problem_kinds! {
    FreeText, "free_text", misc::FreeText;
    FractionReduction, "fraction_reduction", misc::FractionReduction;
    PolynomialZeros, "polynomial_zeros", misc::PolynomialZeros;
    GcdLcm, "gcd_lcm", naturals::GcdLcm;
    EuclideanAlgorithm, "euclidean_algorithm", naturals::EuclideanAlgorithm;
    SetElements, "set_elements", sets::SetElements;
    PowerSet, "power_set", sets::PowerSet;
    SetOperations, "set_operations", sets::SetOperations;
    DerivedSets, "derived_sets", sets::DerivedSets;
    ComplexSum, "complex_sum", complex_numbers::ComplexSum;
    ComplexProduct, "complex_product", complex_numbers::ComplexProduct;
    ComplexQuotient, "complex_quotient", complex_numbers::ComplexQuotient;
    ComplexEquation, "complex_equation", complex_numbers::ComplexEquation;
    SequenceRule, "sequence_rule", sequences::SequenceRule;
    ArithmeticSequence, "arithmetic_sequence", sequences::ArithmeticSequence;
    FactorVieta, "factor_vieta", factoring::FactorVieta;
    FactorDifference, "factor_difference", factoring::FactorDifference;
    BinomialPower, "binomial_power", powers::BinomialPower;
    TrinomialPower, "trinomial_power", powers::TrinomialPower;
    LineThroughPoints, "line_through_points", linear::LineThroughPoints;
    PointDistance, "point_distance", linear::PointDistance;
    LinearSystem, "linear_system", linear::LinearSystem;
    QuadraticZeros, "quadratic_zeros", quadratic::QuadraticZeros;
    CircleIntersection, "circle_intersection", conics::CircleIntersection;
    EllipseEquation, "ellipse_equation", conics::EllipseEquation;
    LineAngle, "line_angle", derivatives::LineAngle;
    TangentLine, "tangent_line", derivatives::TangentLine;
    ChainRuleDerivative, "chain_rule_derivative", derivatives::ChainRuleDerivative;
    ExponentialEquation, "exponential_equation", exponential::ExponentialEquation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_unique() {
        let mut tags: Vec<&str> = KindTag::ALL.iter().map(|t| t.as_str()).collect();
        tags.sort_unstable();
        let before = tags.len();
        tags.dedup();
        assert_eq!(tags.len(), before);
    }

    #[test]
    fn tag_round_trips_through_strings() {
        for &tag in KindTag::ALL {
            assert_eq!(tag.as_str().parse::<KindTag>(), Ok(tag));
        }
        assert!("no_such_kind".parse::<KindTag>().is_err());
    }

    #[test]
    fn serde_tag_matches_kind_tag() {
        for &tag in KindTag::ALL {
            let kind = ProblemKind::with_defaults(tag);
            let json = serde_json::to_value(&kind).unwrap();
            assert_eq!(json["kind"], tag.as_str(), "serde tag mismatch for {}", tag);
            let back: ProblemKind = serde_json::from_value(json).unwrap();
            assert_eq!(back.tag(), tag);
        }
    }

    #[test]
    fn every_kind_declares_templates() {
        for &tag in KindTag::ALL {
            let kind = ProblemKind::with_defaults(tag);
            assert!(!kind.default_instruction().is_empty(), "{}", tag);
            assert!(!kind.default_solution().is_empty(), "{}", tag);
        }
    }
}
