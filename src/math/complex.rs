// Complex numbers over the rationals, enough for the complex-number problem
// kinds: field arithmetic, conjugation and the squared modulus.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Rational;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Complex {
    pub re: Rational,
    pub im: Rational,
}

impl Complex {
    pub fn new(re: Rational, im: Rational) -> Complex {
        Complex { re, im }
    }

    pub fn from_ints(re: i64, im: i64) -> Complex {
        Complex {
            re: Rational::from(re),
            im: Rational::from(im),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    pub fn conjugate(&self) -> Complex {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }

    /// `re^2 + im^2`; the modulus itself is usually a surd, so callers take
    /// the square root at print time.
    pub fn abs_squared(&self) -> Rational {
        self.re * self.re + self.im * self.im
    }

    pub fn scale(&self, k: Rational) -> Complex {
        Complex {
            re: self.re * k,
            im: self.im * k,
        }
    }

    pub fn latex(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let imaginary = |im: Rational| -> String {
            if im.abs().is_one() {
                "i".to_string()
            } else {
                format!("{} i", im.latex_abs())
            }
        };
        if self.im.is_zero() {
            self.re.latex()
        } else if self.re.is_zero() {
            if self.im.is_negative() {
                format!("- {}", imaginary(self.im))
            } else {
                imaginary(self.im)
            }
        } else {
            let sign = if self.im.is_negative() { "-" } else { "+" };
            format!("{} {} {}", self.re.latex(), sign, imaginary(self.im))
        }
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Div for Complex {
    type Output = Complex;
    fn div(self, rhs: Complex) -> Complex {
        assert!(!rhs.is_zero(), "division by zero complex number");
        let denom = rhs.abs_squared();
        (self * rhs.conjugate()).scale(denom.recip())
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Complex {
            re: -self.re,
            im: -self.im,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_arithmetic() {
        let a = Complex::from_ints(1, 2);
        let b = Complex::from_ints(3, -1);
        assert_eq!(a + b, Complex::from_ints(4, 1));
        assert_eq!(a * b, Complex::from_ints(5, 5));
        assert_eq!((a * b) / b, a);
        assert_eq!(a.conjugate(), Complex::from_ints(1, -2));
        assert_eq!(a.abs_squared(), Rational::from(5));
    }

    #[test]
    fn latex_forms() {
        assert_eq!(Complex::from_ints(3, 2).latex(), "3 + 2 i");
        assert_eq!(Complex::from_ints(3, -1).latex(), "3 - i");
        assert_eq!(Complex::from_ints(0, -4).latex(), "- 4 i");
        assert_eq!(Complex::from_ints(0, 1).latex(), "i");
        assert_eq!(Complex::from_ints(-2, 0).latex(), "-2");
        assert_eq!(Complex::from_ints(0, 0).latex(), "0");
        let half_i = Complex::new(Rational::zero(), Rational::new(1, 2));
        assert_eq!(half_i.latex(), "\\frac{1}{2} i");
    }
}
