// Derivative kinds: the angle between two lines, tangent lines to polynomial
// graphs and chain-rule differentiation of an elementary function composed
// with a polynomial.

use serde::{Deserialize, Serialize};

use crate::data::{nonzero_range, DataSource, Draw};
use crate::kinds::{Generator, ParamSpec};
use crate::math::{Rational, UniPoly};
use crate::value::Data;

/// A random polynomial with small coefficients and a nonzero leading one.
fn random_polynomial(source: &mut DataSource, min_stopnja: i64, max_stopnja: i64) -> UniPoly {
    let stopnja = source.int_in(min_stopnja, max_stopnja);
    let mut koeficienti = vec![*source.choice(&[-2, -1, 1, 2])];
    for _ in 0..stopnja {
        koeficienti.push(source.int_in(-3, 3));
    }
    UniPoly::from_ints_desc('x', &koeficienti)
}

/// Angle between two lines with integer slopes, split into degrees and
/// minutes of arc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineAngle {}

impl Generator for LineAngle {
    const GROUP: &'static str = "Odvodi";
    const NAME: &'static str = "računanje kota med premicama";
    const DESCRIPTION: &'static str = "Naloga za izračun kota med dvema premicama.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str =
        r"Izračunaj kot, ki ga oklepata $y = @premica1$ in $@premica2$.";
    const SOLUTION: &'static str = r"$\varphi = @stopinje^{\circ} @minute'$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let smerna = source.sample(&nonzero_range(-6, 6), 2);
        let (k1, k2) = (smerna[0], smerna[1]);
        let zacetni = source.sample(&nonzero_range(-10, 10), 2);
        let (n1, n2) = (zacetni[0], zacetni[1]);
        let premica1 = UniPoly::linear('x', Rational::from(k1), Rational::from(n1));
        let premica2 = UniPoly::linear('x', Rational::from(k2), Rational::from(n2));
        let (stopinje, minute) = if k1 * k2 == -1 {
            (90, 0)
        } else {
            let tangens = ((k2 - k1) as f64 / (1 + k1 * k2) as f64).abs();
            let kot = tangens.atan().to_degrees();
            let mut stopinje = kot.floor() as i64;
            let mut minute = ((kot - kot.floor()) * 60.0).round() as i64;
            if minute == 60 {
                stopinje += 1;
                minute = 0;
            }
            (stopinje, minute)
        };
        Ok(data! {
            "premica1" => premica1.latex(),
            "premica2" => format!("y = {}", premica2.latex()),
            "stopinje" => stopinje,
            "minute" => minute,
        })
    }
}

/// Equation of the tangent line to a polynomial graph at a chosen abscissa.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TangentLine {}

impl Generator for TangentLine {
    const GROUP: &'static str = "Odvodi";
    const NAME: &'static str = "enačba tangente na graf v določeni točki";
    const DESCRIPTION: &'static str = "Naloga za izračun tangente na graf v določeni točki.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str = r"Zapiši enačbo tangente na graf funkcije $f(x) = @funkcija$ v točki z absciso $x_0 = @abscisa$.";
    const SOLUTION: &'static str = r"$y = @tangenta$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let funkcija = random_polynomial(source, 2, 3);
        let x0 = source.int_in(-2, 2);
        let k = funkcija.derivative().eval(Rational::from(x0));
        let y0 = funkcija.eval(Rational::from(x0));
        let n = y0 - k * Rational::from(x0);
        let tangenta = UniPoly::linear('x', k, n);
        Ok(data! {
            "funkcija" => funkcija.latex(),
            "abscisa" => x0,
            "tangenta" => tangenta.latex(),
        })
    }
}

/// The elementary outer functions a composite can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zunanja {
    Sinus,
    Kosinus,
    Tangens,
    Eksponentna,
    Logaritem,
    Polinom,
}

fn wrap_if_sum(poly: &UniPoly) -> String {
    if poly.term_count() > 1 {
        format!("\\left({}\\right)", poly.latex())
    } else {
        poly.latex()
    }
}

/// Differentiate `f(g(x))` for an elementary `f` and polynomial `g`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainRuleDerivative {}

impl Generator for ChainRuleDerivative {
    const GROUP: &'static str = "Odvodi";
    const NAME: &'static str = "odvajanje kompozituma funkcij";
    const DESCRIPTION: &'static str =
        "Naloga za odvajanje kompozituma elementarne funkcije in polinoma.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str = r"Določi odvod funkcije $f(x) = @kompozitum_funkcij$.";
    const SOLUTION: &'static str = r"$f'(x) = @odvod_kompozituma$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let zunanja = *source.choice(&[
            Zunanja::Sinus,
            Zunanja::Kosinus,
            Zunanja::Tangens,
            Zunanja::Eksponentna,
            Zunanja::Logaritem,
            Zunanja::Polinom,
        ]);
        let notranja = random_polynomial(source, 2, 3);
        let g = notranja.latex();
        let gp = notranja.derivative();
        let (kompozitum, odvod) = match zunanja {
            Zunanja::Sinus => (
                format!("\\sin{{\\left({} \\right)}}", g),
                format!("{} \\cos{{\\left({} \\right)}}", wrap_if_sum(&gp), g),
            ),
            Zunanja::Kosinus => (
                format!("\\cos{{\\left({} \\right)}}", g),
                format!(
                    "{} \\sin{{\\left({} \\right)}}",
                    wrap_if_sum(&gp.scale(Rational::from(-1))),
                    g
                ),
            ),
            Zunanja::Tangens => (
                format!("\\tan{{\\left({} \\right)}}", g),
                format!(
                    "{} \\left(\\tan^{{2}}{{\\left({} \\right)}} + 1\\right)",
                    wrap_if_sum(&gp),
                    g
                ),
            ),
            Zunanja::Eksponentna => (
                format!("e^{{{}}}", g),
                format!("{} e^{{{}}}", wrap_if_sum(&gp), g),
            ),
            Zunanja::Logaritem => (
                format!("\\ln{{\\left({} \\right)}}", g),
                format!("\\frac{{{}}}{{{}}}", gp.latex(), g),
            ),
            Zunanja::Polinom => {
                let zunanji_polinom = random_polynomial(source, 2, 2);
                let kompozitum = zunanji_polinom.compose(&notranja);
                (kompozitum.latex(), kompozitum.derivative().latex())
            }
        };
        Ok(data! {
            "kompozitum_funkcij" => kompozitum,
            "odvod_kompozituma" => odvod,
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

    fn int_field(data: &Data, name: &str) -> i64 {
        match data.get(name) {
            Some(&Value::Int(n)) => n,
            other => panic!("expected integer {}, got {:?}", name, other),
        }
    }

    #[test]
    fn angle_is_within_a_quarter_turn() {
        let kind = LineAngle::default();
        for seed in 0..50 {
            let data = kind.generate(&mut source(seed)).unwrap();
            let stopinje = int_field(&data, "stopinje");
            let minute = int_field(&data, "minute");
            assert!((0..=90).contains(&stopinje), "{}", stopinje);
            assert!((0..60).contains(&minute), "{}", minute);
        }
    }

    #[test]
    fn perpendicular_slopes_give_ninety_degrees() {
        // k1 * k2 == -1 short-circuits the arctangent.
        let kind = LineAngle::default();
        let mut seen_perpendicular = false;
        for seed in 0..500 {
            let data = kind.generate(&mut source(seed)).unwrap();
            if int_field(&data, "stopinje") == 90 {
                assert_eq!(int_field(&data, "minute"), 0);
                seen_perpendicular = true;
            }
        }
        assert!(seen_perpendicular);
    }

    #[test]
    fn tangent_touches_the_graph() {
        let kind = TangentLine::default();
        for seed in 0..20 {
            let data = kind.generate(&mut source(seed)).unwrap();
            let tangenta = data.get("tangenta").unwrap().to_string();
            assert!(!tangenta.is_empty());
            let abscisa = int_field(&data, "abscisa");
            assert!((-2..=2).contains(&abscisa));
        }
    }

    #[test]
    fn chain_rule_families_render() {
        let kind = ChainRuleDerivative::default();
        let mut families = 0;
        for seed in 0..100 {
            let data = kind.generate(&mut source(seed)).unwrap();
            let kompozitum = data.get("kompozitum_funkcij").unwrap().to_string();
            let odvod = data.get("odvod_kompozituma").unwrap().to_string();
            assert!(!odvod.is_empty());
            if kompozitum.starts_with("\\sin") {
                assert!(odvod.contains("\\cos"), "{} -> {}", kompozitum, odvod);
                families |= 1;
            } else if kompozitum.starts_with("\\cos") {
                assert!(odvod.contains("\\sin"), "{} -> {}", kompozitum, odvod);
                families |= 2;
            } else if kompozitum.starts_with("\\ln") {
                assert!(odvod.starts_with("\\frac"), "{} -> {}", kompozitum, odvod);
                families |= 4;
            } else if kompozitum.starts_with("e^") {
                assert!(odvod.contains("e^"), "{} -> {}", kompozitum, odvod);
                families |= 8;
            }
        }
        assert_eq!(families, 15, "not every family was drawn in 100 seeds");
    }
}
