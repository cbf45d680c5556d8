// Set kinds: listing elements from a membership predicate, power sets, the
// binary set operations and sets derived inside a universal set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::{require, DataSource, Draw};
use crate::kinds::{Generator, ParamKind, ParamSpec};
use crate::math::{divisors, latex_int_set, latex_point, latex_set, Rational, UniPoly};
use crate::value::Data;

fn linear_in(var: char, a: i64, b: i64) -> String {
    UniPoly::linear(var, Rational::from(a), Rational::from(b)).latex()
}

fn int_set(elements: impl IntoIterator<Item = i64>) -> String {
    let collected: Vec<i64> = elements.into_iter().collect();
    latex_int_set(&collected)
}

/// List the elements of a set given by a membership predicate over the
/// naturals: divisors of a number, or numbers below a bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetElements {
    pub linearna_kombinacija: bool,
}

impl Default for SetElements {
    fn default() -> SetElements {
        SetElements {
            linearna_kombinacija: true,
        }
    }
}

impl Generator for SetElements {
    const GROUP: &'static str = "Množice";
    const NAME: &'static str = "elementi množice";
    const DESCRIPTION: &'static str = "Problem za izpis elementov množice iz podanega predpisa.";
    const PARAMS: &'static [ParamSpec] = &[ParamSpec {
        name: "linearna_kombinacija",
        label: "linearna kombinacija",
        help: "Ali naj naloga vsebuje linearno kombinacijo?",
        kind: ParamKind::Bool,
    }];
    const INSTRUCTION: &'static str =
        r"Zapiši elemente množice $A = \left\{ @n ;\ n \in \mathbb{N} \text{ in } n @pogoj @stevilo \right\}$.";
    const SOLUTION: &'static str = r"$A = @mnozica$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let pogoj = *source.choice(&["|", "<", "<="]);
        let (a, b) = if self.linearna_kombinacija {
            (source.int_in(1, 3), source.int_in(-2, 2))
        } else {
            (1, 0)
        };
        let (stevilo, ustrezni): (i64, Vec<i64>) = match pogoj {
            "|" => {
                let stevilo = source.int_in(15, 45);
                (stevilo, divisors(stevilo))
            }
            "<" => {
                let stevilo = source.int_in(5, 12);
                (stevilo, (1..stevilo).collect())
            }
            _ => {
                let stevilo = source.int_in(5, 8);
                (stevilo, (1..=stevilo).collect())
            }
        };
        let pogoj_latex = match pogoj {
            "|" => r"\mid",
            "<" => r"\lt",
            _ => r"\le",
        };
        let mnozica = int_set(ustrezni.iter().map(|&x| a * x + b).filter(|&e| e > 0));
        Ok(data! {
            "n" => linear_in('n', a, b),
            "pogoj" => pogoj_latex,
            "stevilo" => stevilo,
            "mnozica" => mnozica,
        })
    }
}

/// Write out the power set of a small set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerSet {}

const POWER_SET_POOLS: &[[&str; 3]] = &[
    ["a", "b", "c"],
    ["1", "2", "3"],
    ["x", "y", "z"],
    [r"\alpha", r"\beta", r"\gamma"],
    [r"\Pi", r"\Phi", r"\Xi"],
    ["3", "6", "9"],
    ["3", "7", "42"],
];

impl Generator for PowerSet {
    const GROUP: &'static str = "Množice";
    const NAME: &'static str = "potenčna množica";
    const DESCRIPTION: &'static str = "Problem za izpis potenčne množice od dane množice.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str = r"Zapiši potenčno množico množice $A = @mnozica$.";
    const SOLUTION: &'static str = r"$\mathcal{P}(A) = @potencna$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let velikost = source.int_in(2, 3) as usize;
        let pool = source.choice(POWER_SET_POOLS);
        let elementi = &pool[..velikost];
        // Subsets ordered by size, then by the positions of their elements.
        let mut podmnozice: Vec<u32> = (0..1u32 << velikost).collect();
        podmnozice.sort_by_key(|&mask| (mask.count_ones(), mask));
        let rendered: Vec<String> = podmnozice
            .iter()
            .map(|&mask| {
                let subset: Vec<&str> = elementi
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| mask & (1 << i) != 0)
                    .map(|(_, &e)| e)
                    .collect();
                latex_set(&subset)
            })
            .collect();
        Ok(data! {
            "mnozica" => latex_set(elementi),
            "potencna" => latex_set(&rendered),
        })
    }
}

/// Union, intersection, difference and Cartesian product of two small sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetOperations {}

impl Generator for SetOperations {
    const GROUP: &'static str = "Množice";
    const NAME: &'static str = "operacije z množicami";
    const DESCRIPTION: &'static str =
        "Naloga za zapis unije, preseka, razlike in kartezičnega produkta množic.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str = r"Dani sta množici $A = @A$ in $B = @B$. Določi $A \cup B$, $A \cap B$, $A \setminus B$ in $A \times B$.";
    const SOLUTION: &'static str = r"$A \cup B = @unija$, $A \cap B = @presek$, $A \setminus B = @brez$, $A \times B = @kartezicno$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let izbor: Vec<i64> = (1..=6).collect();
        let velikost_a = source.int_in(3, 4) as usize;
        let a: BTreeSet<i64> = source.sample(&izbor, velikost_a).into_iter().collect();
        let velikost_b = source.int_in(3, 4) as usize;
        let b: BTreeSet<i64> = source.sample(&izbor, velikost_b).into_iter().collect();
        let kartezicno: Vec<String> = a
            .iter()
            .flat_map(|&x| b.iter().map(move |&y| latex_point(&x.to_string(), &y.to_string())))
            .collect();
        Ok(data! {
            "A" => int_set(a.iter().copied()),
            "B" => int_set(b.iter().copied()),
            "unija" => int_set(a.union(&b).copied()),
            "presek" => int_set(a.intersection(&b).copied()),
            "brez" => int_set(a.difference(&b).copied()),
            "kartezicno" => latex_set(&kartezicno),
        })
    }
}

/// Complement, union and difference of sets given by linear rules inside a
/// universal set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedSets {}

impl Generator for DerivedSets {
    const GROUP: &'static str = "Množice";
    const NAME: &'static str = "izpeljane množice";
    const DESCRIPTION: &'static str =
        "Problem za zapis komplementa, unije in razlike množic pri podani univerzalni množici.";
    const PARAMS: &'static [ParamSpec] = &[];
    const INSTRUCTION: &'static str = r"V univerzalni množici $U = \left\{1, 2, \ldots, @velikost_univerzalne\right\}$ sta dani množici $A = \left\{ @navodilo_A ;\ k \in \mathbb{N} \right\}$ in $B = \left\{ @navodilo_B ;\ k \in \mathbb{N} \right\}$ ter množica $C = @C$. Zapiši elemente množic $A$, $B$, $A \cup B$, $C^{\mathsf{c}}$ in $B \setminus A$.";
    const SOLUTION: &'static str = r"$A = @A$, $B = @B$, $A \cup B = @A_unija_B$, $C^{\mathsf{c}} = @C_komplement$, $B \setminus A = @B_brez_A$";

    fn generate(&self, source: &mut DataSource) -> Draw<Data> {
        let a = source.int_in(2, 5);
        let b = source.int_in(-4, 4);
        let c = source.int_in(2, 5);
        let d = source.int_in(-4, 4);
        require(b.abs() != a && d.abs() != c)?;
        let velikost = source.int_in(12, 20);
        let univerzalna: Vec<i64> = (1..=velikost).collect();
        let mnozica_a: BTreeSet<i64> = (1..=velikost)
            .map(|k| a * k + b)
            .filter(|&e| 0 < e && e <= velikost)
            .collect();
        let mnozica_b: BTreeSet<i64> = (1..=velikost)
            .map(|k| c * k + d)
            .filter(|&e| 0 < e && e <= velikost)
            .collect();
        let mnozica_c: BTreeSet<i64> = source.sample(&univerzalna, 8).into_iter().collect();
        let unija: BTreeSet<i64> = mnozica_a.union(&mnozica_b).copied().collect();
        let komplement: BTreeSet<i64> = univerzalna
            .iter()
            .filter(|e| !mnozica_c.contains(e))
            .copied()
            .collect();
        let brez: BTreeSet<i64> = mnozica_b.difference(&mnozica_a).copied().collect();
        Ok(data! {
            "navodilo_A" => linear_in('k', a, b),
            "navodilo_B" => linear_in('k', c, d),
            "A" => int_set(mnozica_a.iter().copied()),
            "B" => int_set(mnozica_b.iter().copied()),
            "C" => int_set(mnozica_c.iter().copied()),
            "A_unija_B" => int_set(unija.iter().copied()),
            "C_komplement" => int_set(komplement.iter().copied()),
            "B_brez_A" => int_set(brez.iter().copied()),
            "velikost_univerzalne" => velikost,
        })
    }
}
