// Expansion kinds: powers of binomials and trinomials built from monomial
// terms, expanded by plain polynomial multiplication.

use serde::{Deserialize, Serialize};

use crate::data::{nonzero_range, require, DataSource, Draw};
use crate::kinds::{Generator, ParamKind, ParamSpec};
use crate::math::MultiPoly;
use crate::value::Data;

const SIMBOLI: &[char] = &['a', 'b', 'c', 'x', 'y', 'z', 'v', 't'];

/// Expand `(a x^n + b y^m)^p`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinomialPower {
    pub najmanjsa_potenca: u32,
    pub najvecja_potenca: u32,
    pub linearna_kombinacija: bool,
}

impl Default for BinomialPower {
    fn default() -> BinomialPower {
        BinomialPower {
            najmanjsa_potenca: 2,
            najvecja_potenca: 4,
            linearna_kombinacija: true,
        }
    }
}

impl Generator for BinomialPower {
    const GROUP: &'static str = "Veččleniki";
    const NAME: &'static str = "potenciranje dvočlenika";
    const DESCRIPTION: &'static str = "Problem za potenciranje dvočlenika.";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec {
            name: "najmanjsa_potenca",
            label: "najmanjša potenca",
            help: "Najmanjša možna potenca dvočlenika.",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "najvecja_potenca",
            label: "največja potenca",
            help: "Največja možna potenca dvočlenika.",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "linearna_kombinacija",
            label: "linearna kombinacija",
            help: "Ali naj naloga vsebuje linearno kombinacijo dveh neznank ali enostaven dvočlenik?",
            kind: ParamKind::Bool,
        },
    ];
    const INSTRUCTION: &'static str = r"Potenciraj izraz $@izraz$.";
    const SOLUTION: &'static str = r"$@izraz = @resitev$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        require(self.najmanjsa_potenca >= 1)?;
        require(self.najmanjsa_potenca <= self.najvecja_potenca)?;
        let potenca = source.int_in(
            self.najmanjsa_potenca.min(6) as i64,
            self.najvecja_potenca.min(6) as i64,
        ) as u32;
        let x = *source.choice(SIMBOLI);
        let preostali: Vec<char> = SIMBOLI.iter().copied().filter(|&s| s != x).collect();
        let (a, b, n, m, y) = if self.linearna_kombinacija {
            let a = source.int_in(1, 5);
            let b = *source.choice(&nonzero_range(-5, 4));
            let n = source.int_in(2, 5) as u32;
            let m = source.int_in(1, 5) as u32;
            (a, b, n, m, Some(*source.choice(&preostali)))
        } else {
            let b = *source.choice(&nonzero_range(-5, 4));
            (1, b, 1, 1, None)
        };
        let drugi = match y {
            Some(y) => MultiPoly::monomial(b, &[(y, m)]),
            None => MultiPoly::constant(b),
        };
        let dvoclenik = MultiPoly::monomial(a, &[(x, n)]).add(&drugi);
        Ok(data! {
            "izraz" => format!("\\left({}\\right)^{{{}}}", dvoclenik.latex(), potenca),
            "resitev" => dvoclenik.pow(potenca).latex(),
        })
    }
}

/// Expand `(a x + b y + c z)^p`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrinomialPower {
    pub najmanjsa_potenca: u32,
    pub najvecja_potenca: u32,
    pub linearna_kombinacija: bool,
}

impl Default for TrinomialPower {
    fn default() -> TrinomialPower {
        TrinomialPower {
            najmanjsa_potenca: 2,
            najvecja_potenca: 4,
            linearna_kombinacija: true,
        }
    }
}

impl Generator for TrinomialPower {
    const GROUP: &'static str = "Veččleniki";
    const NAME: &'static str = "potenciranje tročlenika";
    const DESCRIPTION: &'static str = "Problem za potenciranje tročlenika.";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec {
            name: "najmanjsa_potenca",
            label: "najmanjša potenca",
            help: "Najmanjša možna potenca tročlenika.",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "najvecja_potenca",
            label: "največja potenca",
            help: "Največja možna potenca tročlenika.",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "linearna_kombinacija",
            label: "linearna kombinacija",
            help: "Ali naj naloga vsebuje linearno kombinacijo treh neznank ali enostaven tročlenik?",
            kind: ParamKind::Bool,
        },
    ];
    const INSTRUCTION: &'static str = r"Potenciraj izraz $@izraz$.";
    const SOLUTION: &'static str = r"$@izraz = @resitev$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        require(self.najmanjsa_potenca >= 1)?;
        require(self.najmanjsa_potenca <= self.najvecja_potenca)?;
        let potenca = source.int_in(
            self.najmanjsa_potenca.min(6) as i64,
            self.najvecja_potenca.min(6) as i64,
        ) as u32;
        let izbrani = source.sample(SIMBOLI, 3);
        let (x, y, z) = (izbrani[0], izbrani[1], izbrani[2]);
        let a = source.int_in(1, 4);
        let b = *source.choice(&nonzero_range(-4, 3));
        let c = *source.choice(&nonzero_range(-4, 3));
        let trinomial = if self.linearna_kombinacija {
            MultiPoly::monomial(a, &[(x, 1)])
                .add(&MultiPoly::monomial(b, &[(y, 1)]))
                .add(&MultiPoly::monomial(c, &[(z, 1)]))
        } else {
            MultiPoly::monomial(1, &[(x, 1)])
                .add(&MultiPoly::monomial(1, &[(y, 1)]))
                .add(&MultiPoly::constant(c))
        };
        Ok(data! {
            "izraz" => format!("\\left({}\\right)^{{{}}}", trinomial.latex(), potenca),
            "resitev" => trinomial.pow(potenca).latex(),
        })
    }
}
