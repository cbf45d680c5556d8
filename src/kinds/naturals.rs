// Natural-number kinds: greatest common divisor / least common multiple and
// the Euclidean algorithm.

use serde::{Deserialize, Serialize};

use crate::data::{require, DataSource, Draw};
use crate::kinds::{Generator, ParamKind, ParamSpec};
use crate::math::{gcd, lcm, max_prime_factor};
use crate::value::Data;

/// Compute the GCD and LCM of two numbers whose prime factors stay small
/// enough for hand computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcdLcm {
    pub minimalna_vrednost: u32,
    pub maksimalna_vrednost: u32,
    pub maksimalni_prafaktor: u32,
}

impl Default for GcdLcm {
    fn default() -> GcdLcm {
        GcdLcm {
            minimalna_vrednost: 10,
            maksimalna_vrednost: 100,
            maksimalni_prafaktor: 11,
        }
    }
}

impl Generator for GcdLcm {
    const GROUP: &'static str = "Naravna števila";
    const NAME: &'static str = "največji skupni delitelj in najmanjši skupni večkratnik";
    const DESCRIPTION: &'static str =
        "Problem za izračun največjega skupnega delitelja in najmanjšega skupnega večkratnika danih števil.";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec {
            name: "minimalna_vrednost",
            label: "minimalna vrednost",
            help: "Najmanjša možna vrednost katerega izmed števil.",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "maksimalna_vrednost",
            label: "maksimalna vrednost",
            help: "Največja možna vrednost katerega izmed števil.",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "maksimalni_prafaktor",
            label: "maksimalni prafaktor",
            help: "Zgornja meja za prafaktorje števil.",
            kind: ParamKind::Int,
        },
    ];
    const INSTRUCTION: &'static str =
        r"Izračunaj največji skupni delitelj in najmanjši skupni večkratnik števil $@stevilo1$ in $@stevilo2$.";
    const SOLUTION: &'static str =
        r"$D(@stevilo1, @stevilo2) = @najvecji_delitelj$, $v(@stevilo1, @stevilo2) = @najmanjsi_veckratnik$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        require(self.minimalna_vrednost >= 1)?;
        require(self.minimalna_vrednost <= self.maksimalna_vrednost)?;
        let stevilo1 = source.int_in(self.minimalna_vrednost as i64, self.maksimalna_vrednost as i64);
        let stevilo2 = source.int_in(self.minimalna_vrednost as i64, self.maksimalna_vrednost as i64);
        require(stevilo1 != stevilo2)?;
        let najvecji_prafaktor = max_prime_factor(stevilo1).max(max_prime_factor(stevilo2));
        require(najvecji_prafaktor <= self.maksimalni_prafaktor as i64)?;
        Ok(data! {
            "stevilo1" => stevilo1,
            "stevilo2" => stevilo2,
            "najvecji_delitelj" => gcd(stevilo1, stevilo2),
            "najmanjsi_veckratnik" => lcm(stevilo1, stevilo2),
        })
    }
}

/// Run the Euclidean algorithm on a pair constructed so the division chain
/// has a known number of steps and ends in the chosen divisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EuclideanAlgorithm {
    pub najvecji_delitelj: u32,
    pub stevilo_korakov: u32,
}

impl Default for EuclideanAlgorithm {
    fn default() -> EuclideanAlgorithm {
        EuclideanAlgorithm {
            najvecji_delitelj: 12,
            stevilo_korakov: 3,
        }
    }
}

impl Generator for EuclideanAlgorithm {
    const GROUP: &'static str = "Naravna števila";
    const NAME: &'static str = "Evklidov algoritem";
    const DESCRIPTION: &'static str =
        "Problem za iskanje največjega skupnega delitelja z zaporednim deljenjem.";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec {
            name: "najvecji_delitelj",
            label: "največji delitelj",
            help: "Največja možna vrednost iskanega največjega skupnega delitelja.",
            kind: ParamKind::Int,
        },
        ParamSpec {
            name: "stevilo_korakov",
            label: "število korakov",
            help: "Število deljenj v postopku.",
            kind: ParamKind::Int,
        },
    ];
    const INSTRUCTION: &'static str =
        r"Z Evklidovim algoritmom poišči največji skupni delitelj števil $@stevilo1$ in $@stevilo2$.";
    const SOLUTION: &'static str =
        r"$@postopek$, torej $D(@stevilo1, @stevilo2) = @najvecji_delitelj$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        require(self.najvecji_delitelj >= 2)?;
        require(self.stevilo_korakov >= 1)?;
        let delitelj = source.int_in(2, self.najvecji_delitelj as i64);
        // Build the remainder chain backwards so it terminates in `delitelj`
        // after exactly the requested number of divisions.
        let mut b = delitelj;
        let mut a = delitelj * source.int_in(2, 4);
        for _ in 1..self.stevilo_korakov {
            let kolicnik = source.int_in(1, 3);
            let naslednji = kolicnik * a + b;
            b = a;
            a = naslednji;
        }
        require(a <= 10_000)?;
        let postopek = division_chain(a, b);
        Ok(data! {
            "stevilo1" => a,
            "stevilo2" => b,
            "najvecji_delitelj" => delitelj,
            "postopek" => postopek,
        })
    }
}

/// Renders the full division chain `a = q \cdot b + r` down to remainder 0.
fn division_chain(mut a: i64, mut b: i64) -> String {
    let mut lines = Vec::new();
    loop {
        let kolicnik = a / b;
        let ostanek = a % b;
        lines.push(format!("{} = {} \\cdot {} + {}", a, kolicnik, b, ostanek));
        if ostanek == 0 {
            break;
        }
        a = b;
        b = ostanek;
    }
    lines.join(",\\ ")
}
