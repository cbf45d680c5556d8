// Exponential kinds: equations with two same-base power terms whose solution
// is drawn first, so the right-hand side is exact even when a shifted
// exponent dips below zero.

use serde::{Deserialize, Serialize};

use crate::data::{require, DataSource, Draw};
use crate::kinds::{Generator, ParamSpec};
use crate::math::{join_signed, pow_rational, Rational, UniPoly};
use crate::value::Data;

fn power_term(osnova: i64, zamik: i64) -> String {
    let eksponent = UniPoly::linear('x', Rational::one(), Rational::from(zamik)).latex();
    format!("{}^{{{}}}", osnova, eksponent)
}

/// Solve `b^(x+s) + k b^(x+t) = v` for an integer x.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExponentialEquation {}

impl Generator for ExponentialEquation {
    const GROUP: &'static str = "Eksponentna funkcija";
    const NAME: &'static str = "reševanje eksponentne enačbe z eno osnovo";
    const DESCRIPTION: &'static str = "Naloga za reševanje eksponentne enačbe z eno osnovo.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str = r"Reši eksponentno enačbo $@enacba$.";
    const SOLUTION: &'static str = r"$x = @resitev$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let osnova = *source.choice(&[2, 3, 4, 5, 10]);
        let zamik1 = *source.choice(&[-3, -2, -1, 1, 2, 3]);
        let zamik2 = *source.choice(&[-3, -2, -1, 1, 2, 3]);
        let koeficient = *source.choice(&[1, 2, 3, -1, -2, -3]);
        let resitev = *source.choice(&[-1, 0, 1, 2, 3]);
        require(-2 < resitev + zamik1 && -2 < resitev + zamik2)?;
        let vrednost = pow_rational(osnova, resitev + zamik1)
            + Rational::from(koeficient) * pow_rational(osnova, resitev + zamik2);
        let prvi = power_term(osnova, zamik1);
        let drugi = match koeficient {
            1 => power_term(osnova, zamik2),
            -1 => format!("- {}", power_term(osnova, zamik2)),
            k if k < 0 => format!("- {} \\cdot {}", -k, power_term(osnova, zamik2)),
            k => format!("{} \\cdot {}", k, power_term(osnova, zamik2)),
        };
        let enacba = format!("{} = {}", join_signed(&[prvi, drugi]), vrednost.latex());
        Ok(data! {
            "enacba" => enacba,
            "resitev" => resitev,
        })
    }
}
