//! Exact fractions over arbitrary-precision integers.
//!
//! A [`BigRational`] is always kept in lowest terms with a strictly positive
//! denominator, so that structural equality is numeric equality and a value is
//! integral exactly when its denominator is one.

use crate::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt::{self, Display};
use std::iter::{Product, Sum};
use std::ops::{Add, Mul};

/// A reduced fraction `numer / denom` with `denom > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigRational {
    numer: BigInt,
    denom: BigInt,
}

impl BigRational {
    /// Creates the fraction `numer / denom` in lowest terms.
    ///
    /// Returns [`Error::DivisionByZero`] if `denom` is zero. A negative
    /// denominator moves its sign to the numerator.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if denom.is_negative() {
            Ok(Self::reduce(-numer, -denom))
        } else {
            Ok(Self::reduce(numer, denom))
        }
    }

    /// Creates the fraction `value / 1`.
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::one(),
        }
    }

    // `denom` must be strictly positive.
    fn reduce(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(denom.is_positive());
        // gcd(0, d) = d, which yields the canonical zero 0/1.
        let g = numer.gcd(&denom);
        if g.is_one() {
            Self { numer, denom }
        } else {
            Self {
                numer: numer / &g,
                denom: denom / g,
            }
        }
    }

    /// The numerator, carrying the sign of the fraction.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// The denominator, always strictly positive.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Returns true if the fraction is an integer.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Returns the integer value of the fraction, if it is an integer.
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.numer.clone())
    }

    /// Multiplies the fraction by an integer.
    ///
    /// Equivalent to multiplying by `k / 1`, without building the second
    /// fraction.
    pub fn mul_integer(&self, k: &BigInt) -> Self {
        Self::reduce(&self.numer * k, self.denom.clone())
    }
}

impl Default for BigRational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for BigRational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl Display for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl Add<&BigRational> for &BigRational {
    type Output = BigRational;

    fn add(self, rhs: &BigRational) -> BigRational {
        let numer = &self.numer * &rhs.denom + &rhs.numer * &self.denom;
        BigRational::reduce(numer, &self.denom * &rhs.denom)
    }
}

impl Add for BigRational {
    type Output = BigRational;

    fn add(self, rhs: BigRational) -> BigRational {
        &self + &rhs
    }
}

impl Mul<&BigRational> for &BigRational {
    type Output = BigRational;

    fn mul(self, rhs: &BigRational) -> BigRational {
        BigRational::reduce(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Mul for BigRational {
    type Output = BigRational;

    fn mul(self, rhs: BigRational) -> BigRational {
        &self * &rhs
    }
}

impl Mul<&BigInt> for &BigRational {
    type Output = BigRational;

    fn mul(self, rhs: &BigInt) -> BigRational {
        self.mul_integer(rhs)
    }
}

impl Zero for BigRational {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for BigRational {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl Sum for BigRational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| &acc + &x)
    }
}

impl Product for BigRational {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| &acc * &x)
    }
}
