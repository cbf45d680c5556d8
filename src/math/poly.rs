// Polynomials with exact coefficients. `UniPoly` (rational coefficients, one
// variable) carries the function-flavored kinds: evaluation, derivatives,
// composition, building from roots. `MultiPoly` (integer coefficients, many
// variables) carries the expansion kinds, where only multiplication and
// like-term collection matter.

use std::collections::BTreeMap;

use super::Rational;

/// Univariate polynomial, coefficients stored ascending by power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniPoly {
    var: char,
    coeffs: Vec<Rational>,
}

impl UniPoly {
    pub fn new(var: char, mut coeffs: Vec<Rational>) -> UniPoly {
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        UniPoly { var, coeffs }
    }

    /// Builds from coefficients listed leading-first, the way the problems
    /// state them.
    pub fn from_ints_desc(var: char, coeffs: &[i64]) -> UniPoly {
        UniPoly::new(
            var,
            coeffs.iter().rev().map(|&c| Rational::from(c)).collect(),
        )
    }

    pub fn constant(var: char, c: Rational) -> UniPoly {
        UniPoly::new(var, vec![c])
    }

    /// `k * var + n`.
    pub fn linear(var: char, k: Rational, n: Rational) -> UniPoly {
        UniPoly::new(var, vec![n, k])
    }

    /// `leading * (var - r1) * (var - r2) * ...`.
    pub fn from_roots(var: char, leading: Rational, roots: &[Rational]) -> UniPoly {
        let mut poly = UniPoly::constant(var, leading);
        for &root in roots {
            poly = poly.mul(&UniPoly::linear(var, Rational::one(), -root));
        }
        poly
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn coeff(&self, power: usize) -> Rational {
        self.coeffs.get(power).copied().unwrap_or_else(Rational::zero)
    }

    pub fn term_count(&self) -> usize {
        self.coeffs.iter().filter(|c| !c.is_zero()).count()
    }

    pub fn eval(&self, x: Rational) -> Rational {
        let mut acc = Rational::zero();
        for &c in self.coeffs.iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    pub fn derivative(&self) -> UniPoly {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(p, &c)| c * Rational::from(p as i64))
            .collect();
        UniPoly::new(self.var, coeffs)
    }

    pub fn add(&self, other: &UniPoly) -> UniPoly {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len).map(|p| self.coeff(p) + other.coeff(p)).collect();
        UniPoly::new(self.var, coeffs)
    }

    pub fn scale(&self, k: Rational) -> UniPoly {
        UniPoly::new(self.var, self.coeffs.iter().map(|&c| c * k).collect())
    }

    pub fn mul(&self, other: &UniPoly) -> UniPoly {
        if self.is_zero() || other.is_zero() {
            return UniPoly::new(self.var, Vec::new());
        }
        let mut coeffs = vec![Rational::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        UniPoly::new(self.var, coeffs)
    }

    /// Substitutes `inner` for the variable.
    pub fn compose(&self, inner: &UniPoly) -> UniPoly {
        let mut acc = UniPoly::new(inner.var, Vec::new());
        for &c in self.coeffs.iter().rev() {
            acc = acc.mul(inner).add(&UniPoly::constant(inner.var, c));
        }
        acc
    }

    pub fn latex(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut out = String::new();
        let mut first = true;
        for power in (0..self.coeffs.len()).rev() {
            let c = self.coeff(power);
            if c.is_zero() {
                continue;
            }
            if first {
                if c.is_negative() {
                    out.push_str("- ");
                }
                first = false;
            } else if c.is_negative() {
                out.push_str(" - ");
            } else {
                out.push_str(" + ");
            }
            let magnitude = c.latex_abs();
            let var_part = match power {
                0 => String::new(),
                1 => self.var.to_string(),
                _ => format!("{}^{{{}}}", self.var, power),
            };
            if var_part.is_empty() {
                out.push_str(&magnitude);
            } else if magnitude == "1" {
                out.push_str(&var_part);
            } else {
                out.push_str(&magnitude);
                out.push(' ');
                out.push_str(&var_part);
            }
        }
        out
    }
}

/// A monomial key: variables with their positive exponents, sorted by name.
type Monomial = Vec<(char, u32)>;

/// Multivariate polynomial with integer coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiPoly {
    terms: BTreeMap<Monomial, i64>,
}

impl MultiPoly {
    pub fn zero() -> MultiPoly {
        MultiPoly::default()
    }

    pub fn constant(c: i64) -> MultiPoly {
        MultiPoly::monomial(c, &[])
    }

    /// A single term `coef * v1^e1 * v2^e2 * ...`; zero exponents are dropped.
    pub fn monomial(coef: i64, vars: &[(char, u32)]) -> MultiPoly {
        let mut poly = MultiPoly::default();
        if coef != 0 {
            let mut key: Monomial = vars.iter().copied().filter(|&(_, e)| e > 0).collect();
            key.sort_unstable();
            poly.terms.insert(key, coef);
        }
        poly
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn add(&self, other: &MultiPoly) -> MultiPoly {
        let mut terms = self.terms.clone();
        for (key, &coef) in &other.terms {
            let entry = terms.entry(key.clone()).or_insert(0);
            *entry += coef;
            if *entry == 0 {
                terms.remove(key);
            }
        }
        MultiPoly { terms }
    }

    pub fn neg(&self) -> MultiPoly {
        let terms = self
            .terms
            .iter()
            .map(|(key, &coef)| (key.clone(), -coef))
            .collect();
        MultiPoly { terms }
    }

    pub fn sub(&self, other: &MultiPoly) -> MultiPoly {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &MultiPoly) -> MultiPoly {
        let mut terms: BTreeMap<Monomial, i64> = BTreeMap::new();
        for (ka, &ca) in &self.terms {
            for (kb, &cb) in &other.terms {
                let mut key: BTreeMap<char, u32> = ka.iter().copied().collect();
                for &(var, exp) in kb {
                    *key.entry(var).or_insert(0) += exp;
                }
                let key: Monomial = key.into_iter().collect();
                *terms.entry(key).or_insert(0) += ca * cb;
            }
        }
        terms.retain(|_, c| *c != 0);
        MultiPoly { terms }
    }

    pub fn pow(&self, exp: u32) -> MultiPoly {
        let mut result = MultiPoly::constant(1);
        for _ in 0..exp {
            result = result.mul(self);
        }
        result
    }

    /// Terms ordered by total degree, then reverse-lexicographically on the
    /// exponent vector over the sorted variable list, highest first.
    fn ordered_terms(&self) -> Vec<(&Monomial, i64)> {
        let mut vars: Vec<char> = Vec::new();
        for key in self.terms.keys() {
            for &(v, _) in key {
                if !vars.contains(&v) {
                    vars.push(v);
                }
            }
        }
        vars.sort_unstable();
        let exp_vector = |key: &Monomial| -> Vec<u32> {
            vars.iter()
                .map(|&v| key.iter().find(|&&(kv, _)| kv == v).map_or(0, |&(_, e)| e))
                .collect()
        };
        let mut terms: Vec<(&Monomial, i64)> = self.terms.iter().map(|(k, &c)| (k, c)).collect();
        terms.sort_by(|(ka, _), (kb, _)| {
            let (ea, eb) = (exp_vector(ka), exp_vector(kb));
            let (da, db) = (ea.iter().sum::<u32>(), eb.iter().sum::<u32>());
            db.cmp(&da).then(eb.cmp(&ea))
        });
        terms
    }

    pub fn latex(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut out = String::new();
        for (i, (key, coef)) in self.ordered_terms().into_iter().enumerate() {
            if i == 0 {
                if coef < 0 {
                    out.push_str("- ");
                }
            } else if coef < 0 {
                out.push_str(" - ");
            } else {
                out.push_str(" + ");
            }
            let magnitude = coef.abs();
            let var_part = key
                .iter()
                .map(|&(v, e)| {
                    if e == 1 {
                        v.to_string()
                    } else {
                        format!("{}^{{{}}}", v, e)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            if var_part.is_empty() {
                out.push_str(&magnitude.to_string());
            } else if magnitude == 1 {
                out.push_str(&var_part);
            } else {
                out.push_str(&format!("{} {}", magnitude, var_part));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64) -> Rational {
        Rational::from(n)
    }

    #[test]
    fn unipoly_latex() {
        let p = UniPoly::from_ints_desc('x', &[-2, 1, 0, 2, 3]);
        assert_eq!(p.latex(), "- 2 x^{4} + x^{3} + 2 x + 3");
        assert_eq!(UniPoly::from_ints_desc('x', &[1, 0]).latex(), "x");
        assert_eq!(UniPoly::from_ints_desc('x', &[0]).latex(), "0");
        let q = UniPoly::linear('n', Rational::new(1, 2), r(-3));
        assert_eq!(q.latex(), "\\frac{1}{2} n - 3");
    }

    #[test]
    fn unipoly_algebra() {
        let p = UniPoly::from_roots('x', r(2), &[r(3), r(-1)]);
        assert_eq!(p, UniPoly::from_ints_desc('x', &[2, -4, -6]));
        assert_eq!(p.eval(r(3)), r(0));
        assert_eq!(p.eval(r(0)), r(-6));
        assert_eq!(p.derivative(), UniPoly::from_ints_desc('x', &[4, -4]));
    }

    #[test]
    fn unipoly_compose() {
        // (x^2 + 1) composed with (x - 1) = x^2 - 2x + 2
        let outer = UniPoly::from_ints_desc('x', &[1, 0, 1]);
        let inner = UniPoly::from_ints_desc('x', &[1, -1]);
        assert_eq!(outer.compose(&inner), UniPoly::from_ints_desc('x', &[1, -2, 2]));
    }

    #[test]
    fn multipoly_expansion() {
        // (x + y)^2 = x^2 + 2xy + y^2
        let sum = MultiPoly::monomial(1, &[('x', 1)]).add(&MultiPoly::monomial(1, &[('y', 1)]));
        assert_eq!(sum.pow(2).latex(), "x^{2} + 2 x y + y^{2}");
        // (2x - 3)^3
        let binom = MultiPoly::monomial(2, &[('x', 1)]).add(&MultiPoly::constant(-3));
        assert_eq!(
            binom.pow(3).latex(),
            "8 x^{3} - 36 x^{2} + 54 x - 27"
        );
    }

    #[test]
    fn multipoly_cancellation() {
        let p = MultiPoly::monomial(2, &[('x', 1)]);
        assert!(p.sub(&p).is_zero());
        assert_eq!(p.sub(&p).latex(), "0");
    }
}
