// Linear-function kinds: the line through two points, exact distances in the
// plane and systems of two linear equations. Coordinate pools mix integers
// with halves and thirds so the printed values stay readable.

use serde::{Deserialize, Serialize};

use crate::data::{nonzero_range, require, DataSource, Draw};
use crate::kinds::{Generator, ParamKind, ParamSpec};
use crate::math::{join_signed, Rational, Surd, UniPoly};
use crate::value::Data;

/// All halves `x/2` for `x` in `[2*od, 2*(do+1))`, zero excluded.
fn seznam_polovic(od: i64, do_: i64) -> Vec<Rational> {
    (2 * od..2 * (do_ + 1))
        .filter(|&x| x != 0)
        .map(|x| Rational::new(x, 2))
        .collect()
}

/// All thirds `x/3` for `x` in `[3*od, 3*(do+1))`, zero excluded.
fn seznam_tretjin(od: i64, do_: i64) -> Vec<Rational> {
    (3 * od..3 * (do_ + 1))
        .filter(|&x| x != 0)
        .map(|x| Rational::new(x, 3))
        .collect()
}

fn linear_two(a: i64, b: i64) -> String {
    let term = |k: i64, v: char| -> String {
        match k {
            1 => v.to_string(),
            -1 => format!("-{}", v),
            _ => format!("{} {}", k, v),
        }
    };
    join_signed(&[term(a, 'x'), term(b, 'y')])
}

/// Find the equation of the line through two points. Slopes that would not
/// reduce to a small positive fraction are rejected, so the expected answer
/// stays friendly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineThroughPoints {}

impl Generator for LineThroughPoints {
    const GROUP: &'static str = "Linearna funkcija";
    const NAME: &'static str = "enačba premice skozi dve točki";
    const DESCRIPTION: &'static str = "Naloga za določanje enačbe premice skozi dve točki.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str =
        r"Zapiši enačbo premice skozi točki $A(@x1, @y1)$ in $B(@x2, @y2)$.";
    const SOLUTION: &'static str = r"$y = @premica$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let mut pool = seznam_polovic(-5, 5);
        pool.extend(seznam_tretjin(-5, 5));
        let x1 = *source.choice(&pool);
        let y1 = *source.choice(&pool);
        let x2 = Rational::from(source.int_in(-10, 10));
        let y2 = Rational::from(source.int_in(-10, 10));
        require(x1 != x2 && y1 != y2)?;
        let k = (y2 - y1) / (x2 - x1);
        require(!k.is_negative() && !k.is_zero())?;
        require(k.numerator() <= 5 && k.denominator() <= 19)?;
        let n = y1 - k * x1;
        let premica = UniPoly::linear('x', k, n);
        Ok(data! {
            "x1" => x1.latex(),
            "y1" => y1.latex(),
            "x2" => x2.latex(),
            "y2" => y2.latex(),
            "premica" => premica.latex(),
        })
    }
}

/// Compute the exact distance between two lattice points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointDistance {}

impl Generator for PointDistance {
    const GROUP: &'static str = "Linearna funkcija";
    const NAME: &'static str = "računanje razdalje med dvema točkama";
    const DESCRIPTION: &'static str =
        "Naloga za računanje razdalje med dvema točkama v koordinatnem sistemu.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str =
        r"Natančno izračunaj razdaljo med točkama $A(@x1, @y1)$ in $B(@x2, @y2)$.";
    const SOLUTION: &'static str = r"$d(A, B) = @razdalja$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let x1 = source.int_in(-10, 10);
        let y1 = source.int_in(-10, 10);
        let x2 = source.int_in(-10, 10);
        let y2 = source.int_in(-10, 10);
        require(x1 != x2 && y1 != y2)?;
        let razdalja = Surd::sqrt_of((x2 - x1).pow(2) + (y2 - y1).pow(2));
        Ok(data! {
            "x1" => x1,
            "y1" => y1,
            "x2" => x2,
            "y2" => y2,
            "razdalja" => razdalja.latex(),
        })
    }
}

/// Solve a system of two linear equations. The solution is drawn first and
/// the right-hand sides are computed from it; singular coefficient matrices
/// are rejected so the solution is unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearSystem {
    pub racionalno: bool,
}

impl Generator for LinearSystem {
    const GROUP: &'static str = "Linearna funkcija";
    const NAME: &'static str = "sistem dveh linearnih enačb";
    const DESCRIPTION: &'static str = "Naloga za reševanje sistema dveh enačb z dvema neznankama.";
    const PARAMS: &'static [ParamSpec] = &[ParamSpec {
        name: "racionalno",
        label: "racionalne rešitve",
        help: "Ali smejo biti rešitve racionalne (sicer samo cela števila)?",
        kind: ParamKind::Bool,
    }];
    const INSTRUCTION: &'static str = r"Reši sistem enačb $@enacba1$ in $@enacba2$.";
    const SOLUTION: &'static str = r"$x = @x$, $y = @y$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let cela = nonzero_range(-5, 5);
        let mut izbor: Vec<Rational> = cela.iter().map(|&n| Rational::from(n)).collect();
        if self.racionalno {
            for den in [2, 4] {
                izbor.extend([-3, -1, 1, 3].map(|num| Rational::new(num, den)));
            }
            izbor.extend([-2, -1, 1, 2].map(|num| Rational::new(num, 3)));
        }
        izbor.push(Rational::zero());
        let x1 = *source.choice(&izbor);
        let y1 = *source.choice(&izbor);
        let a = *source.choice(&cela);
        let b = *source.choice(&cela);
        let d = *source.choice(&cela);
        let e = *source.choice(&cela);
        require((a, b) != (d, e) && !(x1.is_zero() && y1.is_zero()))?;
        require(a * e - b * d != 0)?;
        let c = Rational::from(a) * x1 + Rational::from(b) * y1;
        let f = Rational::from(d) * x1 + Rational::from(e) * y1;
        Ok(data! {
            "enacba1" => format!("{} = {}", linear_two(a, b), c.latex()),
            "enacba2" => format!("{} = {}", linear_two(d, e), f.latex()),
            "x" => x1.latex(),
            "y" => y1.latex(),
        })
    }
}
