// Conic kinds: mutual position of two circles through a common point, and
// the ellipse equation from center, vertex and focus. Both circles are built
// around a chosen common point, so the intersection is exact: the second
// point is the reflection of the first across the line of centers.

use serde::{Deserialize, Serialize};

use crate::data::{require, DataSource, Draw};
use crate::kinds::{Generator, ParamKind, ParamSpec};
use crate::math::{latex_point, Rational, Surd};
use crate::value::Data;

/// `\left(v - o\right)^{2}`, collapsing to `v^{2}` for a zero offset.
fn shifted_square(var: char, offset: i64) -> String {
    if offset == 0 {
        format!("{}^{{2}}", var)
    } else if offset > 0 {
        format!("\\left({} - {}\\right)^{{2}}", var, offset)
    } else {
        format!("\\left({} + {}\\right)^{{2}}", var, -offset)
    }
}

fn circle_equation(p: i64, q: i64, r_squared: i64) -> String {
    format!(
        "{} + {} = {}",
        shifted_square('x', p),
        shifted_square('y', q),
        r_squared
    )
}

/// `base ± surd` as LaTeX, used for focus coordinates.
fn offset_latex(base: i64, surd: Surd, negative: bool) -> String {
    if surd.is_integer() {
        let c = surd.coef();
        return (if negative { base - c } else { base + c }).to_string();
    }
    let magnitude = surd.latex();
    if base == 0 {
        if negative {
            format!("- {}", magnitude)
        } else {
            magnitude
        }
    } else if negative {
        format!("{} - {}", base, magnitude)
    } else {
        format!("{} + {}", base, magnitude)
    }
}

/// Determine the mutual position and intersection points of two circles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircleIntersection {}

impl Generator for CircleIntersection {
    const GROUP: &'static str = "Stožnice";
    const NAME: &'static str = "presečišča krožnic";
    const DESCRIPTION: &'static str = "Naloga za iskanje presečišč dveh krožnic.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str = r"Določi medsebojno lego krožnic $\mathcal{K}_1: @kroznica1$ in $\mathcal{K}_2: @kroznica2$ ter določi presečišča, če obstajajo.";
    const SOLUTION: &'static str = r"Krožnici se sekata v točkah iz množice $@presek$.";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let p1 = source.int_in(-5, 5);
        let q1 = source.int_in(-5, 5);
        let p2 = source.int_in(-5, 5);
        let q2 = source.int_in(-5, 5);
        let x0 = source.int_in(-5, 5);
        let y0 = source.int_in(-5, 5);
        require((p1, q1) != (p2, q2))?;
        let r1_squared = (x0 - p1).pow(2) + (y0 - q1).pow(2);
        let r2_squared = (x0 - p2).pow(2) + (y0 - q2).pow(2);
        require(r1_squared > 0 && r2_squared > 0)?;

        // Reflect the common point across the line of centers to find the
        // other intersection; a point on the line itself means the circles
        // touch.
        let dx = Rational::from(p2 - p1);
        let dy = Rational::from(q2 - q1);
        let t = (Rational::from(x0 - p1) * dx + Rational::from(y0 - q1) * dy)
            / (dx * dx + dy * dy);
        let fx = Rational::from(p1) + t * dx;
        let fy = Rational::from(q1) + t * dy;
        let zrcalna = (
            fx * Rational::from(2) - Rational::from(x0),
            fy * Rational::from(2) - Rational::from(y0),
        );
        let tocka = (Rational::from(x0), Rational::from(y0));
        let mut presek = vec![tocka];
        if zrcalna != tocka {
            presek.push(zrcalna);
        }
        presek.sort();
        let presek: Vec<String> = presek
            .iter()
            .map(|(x, y)| latex_point(&x.latex(), &y.latex()))
            .collect();
        Ok(data! {
            "kroznica1" => circle_equation(p1, q1, r1_squared),
            "kroznica2" => circle_equation(p2, q2, r2_squared),
            "presek" => presek,
        })
    }
}

/// Write the ellipse equation given its center, one vertex and one focus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EllipseEquation {
    pub premaknjena: bool,
}

impl Generator for EllipseEquation {
    const GROUP: &'static str = "Stožnice";
    const NAME: &'static str = "enačba elipse";
    const DESCRIPTION: &'static str =
        "Naloga za zapis predpisa elipse, če poznamo središče, teme in gorišče.";
    const PARAMS: &'static [ParamSpec] = &[ParamSpec {
        name: "premaknjena",
        label: "premaknjena",
        help: "Ali je središče elipse lahko izven izhodišča?",
        kind: ParamKind::Bool,
    }];
    const INSTRUCTION: &'static str = r"Zapiši enačbo elipse s središčem $S = @sredisce$, temenom $T_1 = @teme$ in goriščem $F_1 = @gorisce$.";
    const SOLUTION: &'static str = r"$@elipsa$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let (p, q) = if self.premaknjena {
            (source.int_in(-5, 5), source.int_in(-5, 5))
        } else {
            (0, 0)
        };
        let a = source.int_in(1, 5);
        let b = source.int_in(1, 5);
        require(a != b)?;
        let temena = [(p + a, q), (p - a, q), (p, q + b), (p, q - b)];
        let teme = *source.choice(&temena);
        let gorisce_c = Surd::sqrt_of((a * a - b * b).abs());
        let negativno = *source.choice(&[false, true]);
        let gorisce = if a > b {
            latex_point(&offset_latex(p, gorisce_c, negativno), &q.to_string())
        } else {
            latex_point(&p.to_string(), &offset_latex(q, gorisce_c, negativno))
        };
        let elipsa = format!(
            "\\frac{{{}}}{{{}}} + \\frac{{{}}}{{{}}} = 1",
            shifted_square('x', p),
            a * a,
            shifted_square('y', q),
            b * b
        );
        Ok(data! {
            "sredisce" => latex_point(&p.to_string(), &q.to_string()),
            "teme" => latex_point(&teme.0.to_string(), &teme.1.to_string()),
            "gorisce" => gorisce,
            "elipsa" => elipsa,
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

    fn generate_ok<G: Generator>(kind: &G, seed: i64) -> Data {
        let mut source = source(seed);
        loop {
            if let Ok(data) = kind.generate(&mut source) {
                return data;
            }
        }
    }

    #[test]
    fn squares_shift_correctly() {
        assert_eq!(shifted_square('x', 0), "x^{2}");
        assert_eq!(shifted_square('x', 3), "\\left(x - 3\\right)^{2}");
        assert_eq!(shifted_square('y', -2), "\\left(y + 2\\right)^{2}");
    }

    #[test]
    fn focus_offsets() {
        assert_eq!(offset_latex(1, Surd::sqrt_of(16), false), "5");
        assert_eq!(offset_latex(1, Surd::sqrt_of(16), true), "-3");
        assert_eq!(offset_latex(0, Surd::sqrt_of(7), false), "\\sqrt{7}");
        assert_eq!(offset_latex(0, Surd::sqrt_of(7), true), "- \\sqrt{7}");
        assert_eq!(offset_latex(2, Surd::sqrt_of(8), true), "2 - 2 \\sqrt{2}");
    }

    #[test]
    fn circles_share_at_least_one_point() {
        let kind = CircleIntersection::default();
        for seed in 0..20 {
            let data = generate_ok(&kind, seed);
            match data.get("presek").unwrap() {
                Value::Set(points) => {
                    assert!(!points.is_empty());
                    assert!(points.len() <= 2);
                }
                other => panic!("expected a point set, got {:?}", other),
            }
        }
    }

    #[test]
    fn ellipse_equation_shape() {
        let kind = EllipseEquation { premaknjena: false };
        for seed in 0..20 {
            let data = generate_ok(&kind, seed);
            let elipsa = data.get("elipsa").unwrap().to_string();
            assert!(elipsa.starts_with("\\frac{x^{2}}{"), "{}", elipsa);
            assert!(elipsa.ends_with("= 1"), "{}", elipsa);
            let sredisce = data.get("sredisce").unwrap().to_string();
            assert_eq!(sredisce, "(0, 0)");
        }
    }
}
