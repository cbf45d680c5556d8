// Complex-number kinds: sums with rational coefficients, products,
// rationalized quotients and simple equations in z and its conjugate. All
// drawn numbers have nonzero integer components and every draw of several
// numbers rejects duplicates.

use serde::{Deserialize, Serialize};

use crate::data::{nonzero_range, require, DataSource, Draw};
use crate::kinds::{Generator, ParamKind, ParamSpec};
use crate::math::{Complex, Rational, Surd};
use crate::value::Data;

/// Draws `kolicina` pairwise distinct complex numbers with nonzero integer
/// real and imaginary parts in `[-5, 5]`.
fn draw_complex(source: &mut DataSource, kolicina: usize) -> Draw<Vec<Complex>> {
    let pool = nonzero_range(-5, 5);
    let realni = source.choices(&pool, kolicina);
    let imaginarni = source.choices(&pool, kolicina);
    let stevila: Vec<Complex> = realni
        .into_iter()
        .zip(imaginarni)
        .map(|(re, im)| Complex::from_ints(re, im))
        .collect();
    for i in 0..stevila.len() {
        for j in i + 1..stevila.len() {
            require(stevila[i] != stevila[j])?;
        }
    }
    Ok(stevila)
}

fn parenthesized(z: Complex) -> String {
    format!("\\left({}\\right)", z.latex())
}

/// Add and subtract complex numbers scaled by small fractions. The weights
/// prefer coefficient 1 and a positive sign, like the hand-written exercises
/// this imitates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexSum {}

impl Generator for ComplexSum {
    const GROUP: &'static str = "Kompleksna števila";
    const NAME: &'static str = "vsota in razlika kompleksnih števil";
    const DESCRIPTION: &'static str = "Problem za seštevanje in odštevanje kompleksnih števil.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str = r"Izračunaj vsoto $@izraz$.";
    const SOLUTION: &'static str = r"$@resitev$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let kolicina = 3;
        let stevci = source.weighted_choices(&[1, 2, 3, 4], &[3, 1, 1, 1], kolicina);
        let imenovalci = source.weighted_choices(&[1, 2, 3, 4], &[7, 1, 1, 1], kolicina);
        let predznaki = source.weighted_choices(&[-1, 1], &[1, 2], kolicina);
        let koeficienti: Vec<Rational> = predznaki
            .iter()
            .zip(stevci.iter().zip(&imenovalci))
            .map(|(&p, (&s, &i))| Rational::new(p * s, i))
            .collect();
        let stevila = draw_complex(source, kolicina)?;

        let cleni: Vec<String> = koeficienti
            .iter()
            .zip(&stevila)
            .map(|(&k, &z)| {
                let telo = if k.abs().is_one() {
                    parenthesized(z)
                } else {
                    format!("{} {}", k.latex_abs(), parenthesized(z))
                };
                if k.is_negative() {
                    format!("- {}", telo)
                } else {
                    telo
                }
            })
            .collect();
        let resitev = koeficienti
            .iter()
            .zip(&stevila)
            .fold(Complex::from_ints(0, 0), |acc, (&k, &z)| acc + z.scale(k));
        Ok(data! {
            "izraz" => crate::math::join_signed(&cleni),
            "resitev" => resitev.latex(),
        })
    }
}

/// Multiply two complex numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexProduct {}

impl Generator for ComplexProduct {
    const GROUP: &'static str = "Kompleksna števila";
    const NAME: &'static str = "množenje kompleksnih števil";
    const DESCRIPTION: &'static str = "Problem za množenje kompleksnih števil.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str = r"Izračunaj produkt $@izraz$.";
    const SOLUTION: &'static str = r"$@resitev$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let stevila = draw_complex(source, 2)?;
        let izraz = format!("{} {}", parenthesized(stevila[0]), parenthesized(stevila[1]));
        let resitev = stevila[0] * stevila[1];
        Ok(data! {
            "izraz" => izraz,
            "resitev" => resitev.latex(),
        })
    }
}

/// Add two complex fractions and rationalize the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexQuotient {}

impl Generator for ComplexQuotient {
    const GROUP: &'static str = "Kompleksna števila";
    const NAME: &'static str = "seštevanje in racionalizacija kompleksnih ulomkov";
    const DESCRIPTION: &'static str =
        "Problem za seštevanje in racionalizacijo kompleksnih ulomkov.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str = r"Izračunaj in racionaliziraj $@izraz$.";
    const SOLUTION: &'static str = r"$@resitev$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let stevila = draw_complex(source, 4)?;
        let izraz = format!(
            "\\frac{{{}}}{{{}}} + \\frac{{{}}}{{{}}}",
            stevila[0].latex(),
            stevila[1].latex(),
            stevila[2].latex(),
            stevila[3].latex(),
        );
        let resitev = stevila[0] / stevila[1] + stevila[2] / stevila[3];
        Ok(data! {
            "izraz" => izraz,
            "resitev" => resitev.latex(),
        })
    }
}

/// Solve `a z = w` or `a z + b conj(z) = w` for z, and report its modulus
/// and components. The solution is drawn first, so the equation is solvable
/// by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexEquation {
    pub konjugirana_vrednost: bool,
}

impl Default for ComplexEquation {
    fn default() -> ComplexEquation {
        ComplexEquation {
            konjugirana_vrednost: true,
        }
    }
}

impl Generator for ComplexEquation {
    const GROUP: &'static str = "Kompleksna števila";
    const NAME: &'static str = "enačbe s kompleksnimi števili";
    const DESCRIPTION: &'static str =
        "Problem za množenje, konjugiranje, absolutno vrednost in komponente kompleksnih števil.";
    const PARAMS: &'static [ParamSpec] = &[ParamSpec {
        name: "konjugirana_vrednost",
        label: "konjugirana vrednost",
        help: "Ali naj naloga vsebuje konjugirano vrednost?",
        kind: ParamKind::Bool,
    }];
    const INSTRUCTION: &'static str = r"Katero kompleksno število $z$ reši enačbo $@enacba$? Zapiši tudi $|z|$, $\mathrm{Re}(z)$ in $\mathrm{Im}(z)$.";
    const SOLUTION: &'static str = r"$z = @resitev$, $|z| = @absolutna$, $\mathrm{Re}(z) = @realna$, $\mathrm{Im}(z) = @imaginarna$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let par = draw_complex(source, 2)?;
        let (resitev, z1) = (par[0], par[1]);
        let (leva, vrednost) = if self.konjugirana_vrednost {
            let z2 = draw_complex(source, 1)?[0];
            let leva = format!("{} z + {} \\overline{{z}}", parenthesized(z1), parenthesized(z2));
            (leva, z1 * resitev + z2 * resitev.conjugate())
        } else {
            (format!("{} z", parenthesized(z1)), z1 * resitev)
        };
        let enacba = format!("{} = {}", leva, vrednost.latex());
        let absolutna = Surd::sqrt_of(resitev.abs_squared().numerator());
        Ok(data! {
            "enacba" => enacba,
            "resitev" => resitev.latex(),
            "realna" => resitev.re.numerator(),
            "imaginarna" => resitev.im.numerator(),
            "absolutna" => absolutna.latex(),
        })
    }
}
