// Factoring kinds: Vieta's rule for quadratics and differences of powers up
// to the fourth, with the numeric content pulled out front the way the
// factored forms are taught.

use serde::{Deserialize, Serialize};

use crate::data::{nonzero_range, require, DataSource, Draw};
use crate::kinds::{Generator, ParamKind, ParamSpec};
use crate::math::{gcd, MultiPoly, Rational, UniPoly};
use crate::value::Data;

const SIMBOLI: &[char] = &['a', 'b', 'c', 'x', 'y', 'z', 'v', 't'];

/// Factor `a x^2 + b x + c` whose roots were drawn first, so the factored
/// form is exact by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorVieta {
    pub maksimalna_vrednost: u32,
    pub vodilni_koeficient: bool,
}

impl Default for FactorVieta {
    fn default() -> FactorVieta {
        FactorVieta {
            maksimalna_vrednost: 15,
            vodilni_koeficient: true,
        }
    }
}

fn linear_factor(var: char, root: i64) -> String {
    if root == 0 {
        var.to_string()
    } else if root > 0 {
        format!("\\left({} - {}\\right)", var, root)
    } else {
        format!("\\left({} + {}\\right)", var, -root)
    }
}

impl Generator for FactorVieta {
    const GROUP: &'static str = "Razstavljanje";
    const NAME: &'static str = "razstavi Vieta";
    const DESCRIPTION: &'static str = "Problem za razstavljanje s pomočjo Vietovega pravila.";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec {
            name: "maksimalna_vrednost",
            label: "maksimalna vrednost",
            help: "Največja možna vrednost razstavljenega člena glede na absolutno vrednost.",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "vodilni_koeficient",
            label: "vodilni koeficient",
            help: "Ali naj bo vodilni koeficient različen od 1?",
            kind: ParamKind::Bool,
        },
    ];
    const INSTRUCTION: &'static str = r"Razstavi izraz $@izraz$.";
    const SOLUTION: &'static str = r"$@izraz = @razstavljen$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        require(self.maksimalna_vrednost >= 1)?;
        let meja = self.maksimalna_vrednost as i64;
        let x1 = source.int_in(-meja, meja);
        let x2 = source.int_in(-meja, meja);
        let a = if self.vodilni_koeficient {
            *source.choice(&[1, -1]) * source.int_in(2, 4)
        } else {
            1
        };
        let izraz = UniPoly::from_roots(
            'x',
            Rational::from(a),
            &[Rational::from(x1), Rational::from(x2)],
        );
        let predznak = match a {
            1 => String::new(),
            -1 => "- ".to_string(),
            _ if a < 0 => format!("- {} ", -a),
            _ => format!("{} ", a),
        };
        let razstavljen = format!(
            "{}{} {}",
            predznak,
            linear_factor('x', x1),
            linear_factor('x', x2)
        );
        Ok(data! {
            "izraz" => izraz.latex(),
            "razstavljen" => razstavljen,
        })
    }
}

/// Factor a difference of powers `(a x^n)^p - (b y^m)^p` for `p` in 2..=4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorDifference {
    pub najmanjsa_potenca: u32,
    pub najvecja_potenca: u32,
    pub linearna_kombinacija: bool,
}

impl Default for FactorDifference {
    fn default() -> FactorDifference {
        FactorDifference {
            najmanjsa_potenca: 2,
            najvecja_potenca: 4,
            linearna_kombinacija: true,
        }
    }
}

impl Generator for FactorDifference {
    const GROUP: &'static str = "Razstavljanje";
    const NAME: &'static str = "razstavi razliko";
    const DESCRIPTION: &'static str =
        "Problem za razstavljanje razlike kvadratov, kubov in četrtih potenc.";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec {
            name: "najmanjsa_potenca",
            label: "najmanjša potenca",
            help: "Najmanjša možna potenca za razstavljanje (vsaj 2).",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "najvecja_potenca",
            label: "največja potenca",
            help: "Največja možna potenca za razstavljanje (največ 4).",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "linearna_kombinacija",
            label: "linearna kombinacija",
            help: "Ali naj naloga vsebuje linearno kombinacijo dveh neznank ali enostaven dvočlenik?",
            kind: ParamKind::Bool,
        },
    ];
    const INSTRUCTION: &'static str = r"Razstavi izraz $@izraz$.";
    const SOLUTION: &'static str = r"$@izraz = @razstavljen$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let (mut lo, mut hi) = (self.najmanjsa_potenca, self.najvecja_potenca);
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        let lo = lo.clamp(2, 4);
        let hi = hi.clamp(2, 4);
        let potenca = source.int_in(lo as i64, hi as i64) as u32;
        let do_ = if potenca == 2 { 10 } else { 5 };

        let x = *source.choice(SIMBOLI);
        let preostali: Vec<char> = SIMBOLI.iter().copied().filter(|&s| s != x).collect();
        let (a, b, n, m, y) = if self.linearna_kombinacija {
            let a = source.int_in(1, do_);
            let b = *source.choice(&nonzero_range(-do_, do_ - 1));
            let n = source.int_in(1, 3) as u32;
            let m = source.int_in(1, 3) as u32;
            let y = Some(*source.choice(&preostali));
            (a, b, n, m, y)
        } else {
            let b = *source.choice(&nonzero_range(-do_, do_ - 1));
            (1, b, 1, 1, None)
        };

        let monomial = |coef: i64, var: Option<char>, exp: u32| match var {
            Some(v) => MultiPoly::monomial(coef, &[(v, exp)]),
            None => MultiPoly::constant(coef),
        };
        let u = monomial(a, Some(x), n);
        let v = monomial(b, y, m);
        let izraz = u.pow(potenca).sub(&v.pow(potenca));

        // Pull out the numeric content, then apply the difference-of-powers
        // pattern to the primitive parts.
        let g = gcd(a, b);
        let u = monomial(a / g, Some(x), n);
        let w = monomial((b / g).abs(), y, m);
        let negative_b = b < 0;
        let factors: Vec<MultiPoly> = match (potenca, negative_b) {
            (2, _) => vec![u.sub(&w), u.add(&w)],
            (4, _) => vec![u.sub(&w), u.add(&w), u.mul(&u).add(&w.mul(&w))],
            (3, false) => vec![
                u.sub(&w),
                u.mul(&u).add(&u.mul(&w)).add(&w.mul(&w)),
            ],
            _ => vec![
                u.add(&w),
                u.mul(&u).sub(&u.mul(&w)).add(&w.mul(&w)),
            ],
        };
        let mut razstavljen = String::new();
        let content = g.pow(potenca);
        if content != 1 {
            razstavljen.push_str(&content.to_string());
            razstavljen.push(' ');
        }
        razstavljen.push_str(
            &factors
                .iter()
                .map(|f| format!("\\left({}\\right)", f.latex()))
                .collect::<Vec<_>>()
                .join(" "),
        );
        Ok(data! {
            "izraz" => izraz.latex(),
            "razstavljen" => razstavljen,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SeedKey;
    use crate::problem::ProblemId;

    fn source(seed: i64) -> DataSource {
        DataSource::for_subproblem(&SeedKey::preview(ProblemId(seed)), 0)
    }

    #[test]
    fn vieta_expansion_matches_roots() {
        // a (x - x1)(x - x2) expanded by hand for a known case.
        let izraz = UniPoly::from_roots(
            'x',
            Rational::from(2),
            &[Rational::from(3), Rational::from(-1)],
        );
        assert_eq!(izraz.latex(), "2 x^{2} - 4 x - 6");
        assert_eq!(linear_factor('x', 3), "\\left(x - 3\\right)");
        assert_eq!(linear_factor('x', -1), "\\left(x + 1\\right)");
        assert_eq!(linear_factor('x', 0), "x");
    }

    #[test]
    fn vieta_generates_consistent_pairs() {
        let kind = FactorVieta::default();
        for seed in 0..20 {
            let data = kind.generate(&mut source(seed)).unwrap();
            let razstavljen = data.get("razstavljen").unwrap().to_string();
            assert!(
                razstavljen.contains('x'),
                "factored form lost the variable: {}",
                razstavljen
            );
        }
    }

    #[test]
    fn difference_of_squares_shape() {
        let kind = FactorDifference {
            najmanjsa_potenca: 2,
            najvecja_potenca: 2,
            linearna_kombinacija: false,
        };
        for seed in 0..20 {
            let data = kind.generate(&mut source(seed)).unwrap();
            let razstavljen = data.get("razstavljen").unwrap().to_string();
            assert_eq!(
                razstavljen.matches("\\left(").count(),
                2,
                "{}",
                razstavljen
            );
            let izraz = data.get("izraz").unwrap().to_string();
            assert!(izraz.contains("^{2}"), "{}", izraz);
        }
    }

    #[test]
    fn sum_of_cubes_when_subtrahend_is_negative() {
        // x^3 - (-2)^3 = x^3 + 8 factors as (x + 2)(x^2 - 2x + 4).
        let u = MultiPoly::monomial(1, &[('x', 1)]);
        let w = MultiPoly::constant(2);
        let quadratic = u.mul(&u).sub(&u.mul(&w)).add(&w.mul(&w));
        assert_eq!(quadratic.latex(), "x^{2} - 2 x + 4");
        let product = u.add(&w).mul(&quadratic);
        assert_eq!(product.latex(), "x^{3} + 8");
    }

    #[test]
    fn factored_product_reproduces_expression() {
        let kind = FactorDifference::default();
        for seed in 0..10 {
            let data = kind.generate(&mut source(seed)).unwrap();
            let izraz = data.get("izraz").unwrap().to_string();
            assert!(izraz.contains(" - ") || izraz.contains(" + "), "{}", izraz);
        }
    }
}
