// Quadratic kinds: computing the zeros of a general quadratic, real or
// complex by choice. The discriminant window is only known after the
// coefficients are drawn, so unsuitable draws are rejected and retried.

use serde::{Deserialize, Serialize};

use crate::data::{nonzero_range, require, DataSource, Draw};
use crate::kinds::{Generator, ParamKind, ParamSpec};
use crate::math::{gcd, sqrt_decompose, Rational, UniPoly};
use crate::value::Data;

/// One zero `(-b ± sqrt(d)) / (2a)` rendered exactly, with the common
/// content reduced and the denominator kept positive. Negative `d` produces
/// the complex form with `sqrt(-d) i`.
fn quadratic_root_latex(a: i64, b: i64, d: i64, plus: bool) -> String {
    let imaginary = d < 0;
    let (k, m) = sqrt_decompose(d.abs());
    if !imaginary && m == 1 {
        let num = if plus { -b + k } else { -b - k };
        return Rational::new(num, 2 * a).latex();
    }
    let mut n0 = -b;
    let mut kk = if plus { k } else { -k };
    let mut den = 2 * a;
    let g = gcd(gcd(n0, kk), den);
    if g > 1 {
        n0 /= g;
        kk /= g;
        den /= g;
    }
    if den < 0 {
        n0 = -n0;
        kk = -kk;
        den = -den;
    }
    let mag = kk.abs();
    let surd = match (imaginary, m, mag) {
        (false, _, 1) => format!("\\sqrt{{{}}}", m),
        (false, _, _) => format!("{} \\sqrt{{{}}}", mag, m),
        (true, 1, 1) => "i".to_string(),
        (true, 1, _) => format!("{} i", mag),
        (true, _, 1) => format!("\\sqrt{{{}}} i", m),
        (true, _, _) => format!("{} \\sqrt{{{}}} i", mag, m),
    };
    let numerator = if n0 == 0 {
        if kk < 0 {
            format!("- {}", surd)
        } else {
            surd
        }
    } else {
        let sign = if kk < 0 { "-" } else { "+" };
        format!("{} {} {}", n0, sign, surd)
    };
    if den == 1 {
        numerator
    } else {
        format!("\\frac{{{}}}{{{}}}", numerator, den)
    }
}

/// Compute both zeros of `a x^2 + b x + c`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadraticZeros {
    pub kompleksni_nicli: bool,
}

impl Generator for QuadraticZeros {
    const GROUP: &'static str = "Kvadratna funkcija";
    const NAME: &'static str = "ničle kvadratne funkcije";
    const DESCRIPTION: &'static str = "Naloga za računanje ničel kvadratne funkcije.";
    const PARAMS: &'static [ParamSpec] = &[ParamSpec {
        name: "kompleksni_nicli",
        label: "kompleksni ničli",
        help: "Ali sta ničli lahko kompleksni?",
        kind: ParamKind::Bool,
    }];
    const INSTRUCTION: &'static str = r"Izračunaj ničli kvadratne funkcije $f(x) = @splosna$.";
    const SOLUTION: &'static str = r"$x_1 = (@x1)$, $x_2 = (@x2)$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let a = *source.choice(&nonzero_range(-4, 4));
        let b = source.int_in(-6, 6);
        let c = source.int_in(-6, 6);
        let diskriminanta = b * b - 4 * a * c;
        if self.kompleksni_nicli {
            require(diskriminanta < 0 && diskriminanta.abs() <= 200)?;
        } else {
            require(diskriminanta >= 0 && diskriminanta <= 200)?;
        }
        let splosna = UniPoly::from_ints_desc('x', &[a, b, c]);
        Ok(data! {
            "splosna" => splosna.latex(),
            "x1" => quadratic_root_latex(a, b, diskriminanta, true),
            "x2" => quadratic_root_latex(a, b, diskriminanta, false),
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
    fn rational_roots() {
        // x^2 - 3x + 2 has zeros 2 and 1.
        assert_eq!(quadratic_root_latex(1, -3, 1, true), "2");
        assert_eq!(quadratic_root_latex(1, -3, 1, false), "1");
        // 2x^2 + x - 1: d = 9, zeros 1/2 and -1.
        assert_eq!(quadratic_root_latex(2, 1, 9, true), "\\frac{1}{2}");
        assert_eq!(quadratic_root_latex(2, 1, 9, false), "-1");
    }

    #[test]
    fn irrational_roots() {
        // x^2 - 2x - 1: d = 8, zeros 1 ± sqrt(2).
        assert_eq!(quadratic_root_latex(1, -2, 8, true), "1 + \\sqrt{2}");
        assert_eq!(quadratic_root_latex(1, -2, 8, false), "1 - \\sqrt{2}");
        // x^2 - x - 1: d = 5.
        assert_eq!(
            quadratic_root_latex(1, -1, 5, true),
            "\\frac{1 + \\sqrt{5}}{2}"
        );
        // -x^2 + 2x + 1: d = 8, the denominator sign folds away.
        assert_eq!(quadratic_root_latex(-1, 2, 8, true), "1 - \\sqrt{2}");
    }

    #[test]
    fn complex_roots() {
        // x^2 + 1: d = -4, zeros ± i.
        assert_eq!(quadratic_root_latex(1, 0, -4, true), "i");
        assert_eq!(quadratic_root_latex(1, 0, -4, false), "- i");
        // x^2 + x + 1: d = -3.
        assert_eq!(
            quadratic_root_latex(1, 1, -3, true),
            "\\frac{-1 + \\sqrt{3} i}{2}"
        );
    }

    #[test]
    fn real_mode_keeps_discriminant_in_window() {
        let kind = QuadraticZeros {
            kompleksni_nicli: false,
        };
        let mut source = source(1);
        for _ in 0..20 {
            let data = loop {
                if let Ok(data) = kind.generate(&mut source) {
                    break data;
                }
            };
            let x1 = data.get("x1").unwrap().to_string();
            assert!(!x1.contains('i'), "real mode produced {}", x1);
        }
    }

    #[test]
    fn complex_mode_produces_imaginary_roots() {
        let kind = QuadraticZeros {
            kompleksni_nicli: true,
        };
        let mut source = source(2);
        for _ in 0..20 {
            let data = loop {
                if let Ok(data) = kind.generate(&mut source) {
                    break data;
                }
            };
            let x1 = data.get("x1").unwrap().to_string();
            assert!(x1.contains('i'), "complex mode produced {}", x1);
        }
    }
}
