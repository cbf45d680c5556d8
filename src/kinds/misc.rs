// Miscellaneous kinds: manually authored text, fraction reduction and the
// basic polynomial zero-finding exercise.

use serde::{Deserialize, Serialize};

use crate::data::{require, DataSource, Draw};
use crate::kinds::{Generator, ParamKind, ParamSpec};
use crate::value::Data;

/// A pass-through kind for manually composed problems: whatever text the
/// teacher enters is the generated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeText {
    pub navodilo: String,
    pub resitev: String,
}

impl Default for FreeText {
    fn default() -> FreeText {
        FreeText {
            navodilo: "Poljubno besedilo…".to_string(),
            resitev: "Poljubno besedilo…".to_string(),
        }
    }
}

impl Generator for FreeText {
    const GROUP: &'static str = "Razno";
    const NAME: &'static str = "prosto besedilo";
    const DESCRIPTION: &'static str =
        "Problem s poljubnim fiksnim besedilom navodila in rešitve, namenjen ročno sestavljenim nalogam.";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec {
            name: "navodilo",
            label: "navodilo",
            help: "Poljubno besedilo navodila.",
            kind: ParamKind::Text,
        },
        ParamSpec {
            name: "resitev",
            label: "rešitev",
            help: "Poljubno besedilo rešitve.",
            kind: ParamKind::Text,
        },
    ];
    const INSTRUCTION: &'static str = "@navodilo";
    const SOLUTION: &'static str = "@resitev";

    fn generate(&self, _source: &mut DataSource) -> Draw<Data> {
        Ok(data! {
            "navodilo" => self.navodilo.clone(),
            "resitev" => self.resitev.clone(),
        })
    }
}

/// Reduce a given fraction. The unreduced fraction is the reduced pair times
/// a random factor, so the reduced form is correct by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionReduction {
    pub najvecji_stevec: u32,
    pub najvecji_imenovalec: u32,
    pub najvecji_faktor: u32,
}

impl Default for FractionReduction {
    fn default() -> FractionReduction {
        FractionReduction {
            najvecji_stevec: 20,
            najvecji_imenovalec: 20,
            najvecji_faktor: 20,
        }
    }
}

impl Generator for FractionReduction {
    const GROUP: &'static str = "Razno";
    const NAME: &'static str = "krajšanje ulomkov";
    const DESCRIPTION: &'static str = "Problem, v katerem je treba okrajšati dani ulomek.";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec {
            name: "najvecji_stevec",
            label: "največji števec",
            help: "Največji števec, ki se bo pojavljal v okrajšanem ulomku.",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "najvecji_imenovalec",
            label: "največji imenovalec",
            help: "Največji imenovalec, ki se bo pojavljal v okrajšanem ulomku.",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "najvecji_faktor",
            label: "največji faktor",
            help: "Največji faktor med neokrajšanim in okrajšanim ulomkom.",
            kind: ParamKind::Int,
        },
    ];
    const INSTRUCTION: &'static str =
        r"Okrajšaj ulomek $\frac{@neokrajsan_stevec}{@neokrajsan_imenovalec}$.";
    const SOLUTION: &'static str =
        r"$\frac{@neokrajsan_stevec}{@neokrajsan_imenovalec} = \frac{@okrajsan_stevec}{@okrajsan_imenovalec}$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        require(self.najvecji_stevec >= 1)?;
        require(self.najvecji_imenovalec >= 1)?;
        require(self.najvecji_faktor >= 1)?;
        let stevec = source.int_in(1, self.najvecji_stevec as i64);
        let imenovalec = source.int_in(1, self.najvecji_imenovalec as i64);
        let faktor = source.int_in(1, self.najvecji_faktor as i64);
        Ok(data! {
            "okrajsan_stevec" => stevec,
            "okrajsan_imenovalec" => imenovalec,
            "neokrajsan_stevec" => faktor * stevec,
            "neokrajsan_imenovalec" => faktor * imenovalec,
        })
    }
}

/// Find the zeros of `x^n - a^n`. The zero set has one element for odd `n`
/// and a value with its negation for even `n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialZeros {
    pub stevilo_nicel: u32,
    pub velikost_nicle: u32,
}

impl Default for PolynomialZeros {
    fn default() -> PolynomialZeros {
        PolynomialZeros {
            stevilo_nicel: 3,
            velikost_nicle: 9,
        }
    }
}

impl Generator for PolynomialZeros {
    const GROUP: &'static str = "Razno";
    const NAME: &'static str = "iskanje ničel polinoma";
    const DESCRIPTION: &'static str = "Problem, v katerem je treba poiskati ničle danega polinoma.";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec {
            name: "stevilo_nicel",
            label: "število ničel",
            help: "Stopnja polinoma (ničli sta dve pri sodi in ena pri lihi stopnji).",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "velikost_nicle",
            label: "velikost ničle",
            help: "Največja velikost ničle glede na absolutno vrednost.",
            kind: ParamKind::Int,
        },
    ];
    const INSTRUCTION: &'static str = r"Poišči vse realne ničle polinoma $p(x) = @polinom$.";
    const SOLUTION: &'static str = r"$x \in @nicle$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        require(self.stevilo_nicel >= 1)?;
        require(self.velikost_nicle >= 1)?;
        let nicla = source.int_in(1, self.velikost_nicle as i64);
        let potenca = nicla.checked_pow(self.stevilo_nicel);
        // Huge exponents would overflow the constant term; such parameters
        // surface as retry exhaustion rather than a panic.
        let potenca = match potenca {
            Some(p) => p,
            None => return Err(crate::data::Rejected),
        };
        let nicle: Vec<String> = if self.stevilo_nicel % 2 == 0 {
            vec![(-nicla).to_string(), nicla.to_string()]
        } else {
            vec![nicla.to_string()]
        };
        let polinom = format!("x^{{{}}} - {}", self.stevilo_nicel, potenca);
        Ok(data! {
            "nicle" => nicle,
            "polinom" => polinom,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SeedKey;
    use crate::problem::ProblemId;
    use crate::value::Value;

    fn source(seed: i64) -> DataSource {
        DataSource::for_subproblem(&SeedKey::preview(ProblemId(seed)), 0)
    }

    #[test]
    fn free_text_passes_through() {
        let kind = FreeText {
            navodilo: "Izračunaj.".to_string(),
            resitev: "42".to_string(),
        };
        let data = kind.generate(&mut source(1)).unwrap();
        assert_eq!(data.get("navodilo"), Some(&Value::Text("Izračunaj.".into())));
        assert_eq!(data.get("resitev"), Some(&Value::Text("42".into())));
    }

    #[test]
    fn fraction_reduction_cross_multiplication() {
        let kind = FractionReduction::default();
        for seed in 0..50 {
            let data = kind.generate(&mut source(seed)).unwrap();
            let field = |name: &str| match data.get(name) {
                Some(&Value::Int(n)) => n,
                other => panic!("expected integer {}, got {:?}", name, other),
            };
            assert_eq!(
                field("okrajsan_stevec") * field("neokrajsan_imenovalec"),
                field("okrajsan_imenovalec") * field("neokrajsan_stevec"),
            );
        }
    }

    #[test]
    fn fraction_reduction_degenerate_parameters() {
        let kind = FractionReduction {
            najvecji_stevec: 1,
            najvecji_imenovalec: 1,
            najvecji_faktor: 1,
        };
        let data = kind.generate(&mut source(5)).unwrap();
        for name in [
            "okrajsan_stevec",
            "okrajsan_imenovalec",
            "neokrajsan_stevec",
            "neokrajsan_imenovalec",
        ] {
            assert_eq!(data.get(name), Some(&Value::Int(1)));
        }
    }

    #[test]
    fn polynomial_zeros_parity() {
        let odd = PolynomialZeros {
            stevilo_nicel: 3,
            velikost_nicle: 9,
        };
        let even = PolynomialZeros {
            stevilo_nicel: 4,
            velikost_nicle: 9,
        };
        for seed in 0..50 {
            let data = odd.generate(&mut source(seed)).unwrap();
            match data.get("nicle") {
                Some(Value::Set(elements)) => assert_eq!(elements.len(), 1),
                other => panic!("expected set, got {:?}", other),
            }
            let data = even.generate(&mut source(seed)).unwrap();
            match data.get("nicle") {
                Some(Value::Set(elements)) => {
                    assert_eq!(elements.len(), 2);
                    let negated: i64 = -elements[1].parse::<i64>().unwrap();
                    assert_eq!(elements[0].parse::<i64>().unwrap(), negated);
                }
                other => panic!("expected set, got {:?}", other),
            }
        }
    }

    #[test]
    fn polynomial_display() {
        let kind = PolynomialZeros {
            stevilo_nicel: 3,
            velikost_nicle: 2,
        };
        let data = kind.generate(&mut source(3)).unwrap();
        let polinom = data.get("polinom").unwrap().to_string();
        assert!(polinom == "x^{3} - 1" || polinom == "x^{3} - 8", "{}", polinom);
    }
}
