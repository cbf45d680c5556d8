// Sequence kinds: recovering a closed-form rule from initial terms, and
// arithmetic sequences given by their first term and difference.

use serde::{Deserialize, Serialize};

use crate::data::{nonzero_range, DataSource, Draw};
use crate::kinds::{Generator, ParamKind, ParamSpec};
use crate::math::{pow_rational, Rational, UniPoly};
use crate::value::Data;

/// The candidate rules a sequence exercise can draw.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Arithmetic { a: i64, b: i64 },
    Geometric { a: i64, b: i64 },
    Fraction { a: i64, b: i64, c: i64, d: i64 },
    Square,
    Cube,
    SquareShift { a: i64 },
    CubeShift { a: i64 },
    Alternating { a: i64, b: i64 },
}

fn geometric_latex(a: i64, b: i64) -> String {
    let base = if b < 0 {
        format!("\\left({}\\right)^{{n - 1}}", b)
    } else {
        format!("{}^{{n - 1}}", b)
    };
    let magnitude = a.abs();
    let body = if magnitude == 1 {
        base
    } else if b < 0 {
        format!("{} {}", magnitude, base)
    } else {
        format!("{} \\cdot {}", magnitude, base)
    };
    if a < 0 {
        format!("- {}", body)
    } else {
        body
    }
}

impl Rule {
    fn term(&self, n: i64) -> Rational {
        match *self {
            Rule::Arithmetic { a, b } => Rational::from(a + (n - 1) * b),
            Rule::Geometric { a, b } => Rational::from(a) * pow_rational(b, n - 1),
            Rule::Fraction { a, b, c, d } => {
                Rational::new(a + b * (n - 1), c + d * (n - 1))
            }
            Rule::Square => Rational::from(n * n),
            Rule::Cube => Rational::from(n * n * n),
            Rule::SquareShift { a } => Rational::from(n * n - a),
            Rule::CubeShift { a } => Rational::from(n * n * n - a),
            Rule::Alternating { a, b } => {
                let sign = if n % 2 == 0 { 1 } else { -1 };
                Rational::from(sign * a) * pow_rational(b, n - 1)
            }
        }
    }

    fn latex(&self) -> String {
        let linear = |k: i64, n0: i64| {
            UniPoly::linear('n', Rational::from(k), Rational::from(n0)).latex()
        };
        match *self {
            Rule::Arithmetic { a, b } => linear(b, a - b),
            Rule::Geometric { a, b } => geometric_latex(a, b),
            Rule::Fraction { a, b, c, d } => {
                format!("\\frac{{{}}}{{{}}}", linear(b, a - b), linear(d, c - d))
            }
            Rule::Square => "n^{2}".to_string(),
            Rule::Cube => "n^{3}".to_string(),
            Rule::SquareShift { a } => {
                UniPoly::new(
                    'n',
                    vec![Rational::from(-a), Rational::zero(), Rational::one()],
                )
                .latex()
            }
            Rule::CubeShift { a } => {
                UniPoly::new(
                    'n',
                    vec![
                        Rational::from(-a),
                        Rational::zero(),
                        Rational::zero(),
                        Rational::one(),
                    ],
                )
                .latex()
            }
            Rule::Alternating { a, b } => {
                let body = geometric_latex(a.abs(), b);
                let signed = format!("\\left(-1\\right)^{{n}} \\cdot {}", body);
                if a < 0 {
                    format!("- {}", signed)
                } else {
                    signed
                }
            }
        }
    }
}

/// Find the general term matching the first five terms of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceRule {
    pub zamik_alternirajoce: bool,
}

impl Default for SequenceRule {
    fn default() -> SequenceRule {
        SequenceRule {
            zamik_alternirajoce: false,
        }
    }
}

impl Generator for SequenceRule {
    const GROUP: &'static str = "Zaporedja";
    const NAME: &'static str = "splošni člen zaporedja";
    const DESCRIPTION: &'static str = "Naloga za iskanje splošnega člena poljubnega zaporedja.";
    const PARAMS: &'static [ParamSpec] = &[ParamSpec {
        name: "zamik_alternirajoce",
        label: "zamaknjeno in alternirajoče zaporedje",
        help: "Določa, če so v izbor predpisa vključena zamaknjena zaporedja iz kvadratov in kubov ter alternirajoča zaporedja.",
        kind: ParamKind::Bool,
    }];
    const INSTRUCTION: &'static str =
        r"Poišči predpis za splošni člen, ki mu zadoščajo začetni členi zaporedja $@cleni$";
    const SOLUTION: &'static str = r"$a_n = @resitev$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let a = *source.choice(&nonzero_range(-5, 4));
        let b = *source.choice(&nonzero_range(-3, 2));
        let c = source.int_in(1, 2);
        let d = source.int_in(1, 2);
        let mut predpisi = vec![
            Rule::Arithmetic { a, b },
            Rule::Geometric { a, b },
            Rule::Fraction { a, b, c, d },
            Rule::Square,
            Rule::Cube,
        ];
        if self.zamik_alternirajoce {
            predpisi.push(Rule::SquareShift { a });
            predpisi.push(Rule::CubeShift { a });
            predpisi.push(Rule::Alternating { a, b });
        }
        let predpis = *source.choice(&predpisi);
        let cleni: Vec<String> = (1..=5).map(|n| predpis.term(n).latex()).collect();
        Ok(data! {
            "cleni" => format!("{}, \\ \\ldots", cleni.join(", ")),
            "resitev" => predpis.latex(),
        })
    }
}

/// Write the general term of an arithmetic sequence and evaluate one term
/// further out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticSequence {
    pub najvecji_prvi_clen: u32,
    pub najvecja_diferenca: u32,
}

impl Default for ArithmeticSequence {
    fn default() -> ArithmeticSequence {
        ArithmeticSequence {
            najvecji_prvi_clen: 10,
            najvecja_diferenca: 5,
        }
    }
}

impl Generator for ArithmeticSequence {
    const GROUP: &'static str = "Zaporedja";
    const NAME: &'static str = "aritmetično zaporedje";
    const DESCRIPTION: &'static str =
        "Naloga za zapis splošnega člena aritmetičnega zaporedja in izračun oddaljenega člena.";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec {
            name: "najvecji_prvi_clen",
            label: "največji prvi člen",
            help: "Največja absolutna vrednost prvega člena.",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "najvecja_diferenca",
            label: "največja diferenca",
            help: "Največja absolutna vrednost diference.",
            kind: ParamKind::Int,
        },
    ];
    const INSTRUCTION: &'static str = r"Aritmetično zaporedje ima prvi člen $a_1 = @prvi_clen$ in diferenco $d = @diferenca$. Zapiši splošni člen zaporedja in izračunaj člen $a_{@n}$.";
    const SOLUTION: &'static str = r"$a_n = @splosni_clen$, $a_{@n} = @n_ti_clen$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        crate::data::require(self.najvecji_prvi_clen >= 1 && self.najvecja_diferenca >= 1)?;
        let meja = self.najvecji_prvi_clen as i64;
        let prvi_clen = source.int_in(-meja, meja);
        let diferenca = *source.choice(&nonzero_range(
            -(self.najvecja_diferenca as i64),
            self.najvecja_diferenca as i64,
        ));
        let n = source.int_in(8, 15);
        let splosni_clen = UniPoly::linear(
            'n',
            Rational::from(diferenca),
            Rational::from(prvi_clen - diferenca),
        );
        Ok(data! {
            "prvi_clen" => prvi_clen,
            "diferenca" => diferenca,
            "n" => n,
            "splosni_clen" => splosni_clen.latex(),
            "n_ti_clen" => prvi_clen + (n - 1) * diferenca,
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
    fn rule_terms_match_their_latex_families() {
        assert_eq!(Rule::Arithmetic { a: 3, b: 2 }.latex(), "2 n + 1");
        assert_eq!(Rule::Arithmetic { a: 3, b: 2 }.term(1), Rational::from(3));
        assert_eq!(Rule::Arithmetic { a: 3, b: 2 }.term(4), Rational::from(9));
        assert_eq!(Rule::Geometric { a: 3, b: 2 }.latex(), "3 \\cdot 2^{n - 1}");
        assert_eq!(Rule::Geometric { a: 3, b: -2 }.latex(), "3 \\left(-2\\right)^{n - 1}");
        assert_eq!(Rule::Geometric { a: 3, b: -2 }.term(3), Rational::from(12));
        assert_eq!(Rule::Square.term(5), Rational::from(25));
        assert_eq!(Rule::SquareShift { a: -2 }.latex(), "n^{2} + 2");
        assert_eq!(
            Rule::Fraction { a: 1, b: 2, c: 1, d: 1 }.latex(),
            "\\frac{2 n - 1}{n}"
        );
        assert_eq!(
            Rule::Fraction { a: 1, b: 2, c: 1, d: 1 }.term(2),
            Rational::new(3, 2)
        );
        assert_eq!(Rule::Alternating { a: 1, b: 2 }.term(1), Rational::from(-1));
        assert_eq!(Rule::Alternating { a: 1, b: 2 }.term(2), Rational::from(2));
    }

    #[test]
    fn five_terms_and_ellipsis() {
        let kind = SequenceRule::default();
        for seed in 0..20 {
            let data = kind.generate(&mut source(seed)).unwrap();
            let cleni = data.get("cleni").unwrap().to_string();
            assert_eq!(cleni.matches(", ").count(), 5, "{}", cleni);
            assert!(cleni.ends_with("\\ \\ldots"), "{}", cleni);
        }
    }

    #[test]
    fn arithmetic_sequence_is_consistent() {
        let kind = ArithmeticSequence::default();
        for seed in 0..20 {
            let data = kind.generate(&mut source(seed)).unwrap();
            let field = |name: &str| match data.get(name) {
                Some(&Value::Int(v)) => v,
                other => panic!("expected integer {}, got {:?}", name, other),
            };
            let (a1, d, n) = (field("prvi_clen"), field("diferenca"), field("n"));
            assert_eq!(field("n_ti_clen"), a1 + (n - 1) * d);
            assert!(d != 0);
            assert!((8..=15).contains(&n));
        }
    }
}
