//! Exact rational scalar backed by arbitrary-precision integers.
//!
//! Provides the [`Rational`] value type used for every matrix entry. Values
//! are always stored in lowest terms with a positive denominator, so equality
//! and zero/one tests are exact comparisons with no tolerance.

use crate::errors::SleSolverError;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use serde::{Deserialize, Serialize};

use std::fmt;
use std::iter::Sum;
use std::ops;

/// An exact rational number `num / den`.
///
/// Invariant: reduced by the gcd, `den > 0`, and zero is stored as `0/1`.
/// Every arithmetic operation produces a new, re-normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    /// Create a new rational from a numerator and denominator.
    ///
    /// The denominator must be nonzero; the stored value is reduced and the
    /// sign is moved into the numerator.
    ///
    /// # Example
    ///
    /// ```
    /// # use sle_solver::rational::Rational;
    /// let half = Rational::try_with(2, -4).unwrap();
    /// assert_eq!(half, Rational::try_with(-1, 2).unwrap());
    /// assert!(Rational::try_with(1, 0).is_err());
    /// ```
    pub fn try_with<N, D>(num: N, den: D) -> Result<Self, SleSolverError>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let num = num.into();
        let den = den.into();
        if den.is_zero() {
            return Err(SleSolverError::DivisionByZero(format!(
                "Denominator must be nonzero, got {}/0",
                num
            )));
        }

        Ok(Self::normalized(num, den))
    }

    /// Create a rational with denominator 1.
    pub fn from_integer<N: Into<BigInt>>(num: N) -> Self {
        Self {
            num: num.into(),
            den: BigInt::one(),
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }

    /// Returns the reciprocal `den / num`.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::DivisionByZero` if the value is zero.
    pub fn recip(&self) -> Result<Self, SleSolverError> {
        if self.is_zero() {
            return Err(SleSolverError::DivisionByZero(
                "Zero has no reciprocal".to_string(),
            ));
        }

        Ok(Self::normalized(self.den.clone(), self.num.clone()))
    }

    /// Divides `self` by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns `SleSolverError::DivisionByZero` if `rhs` is zero.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, SleSolverError> {
        Ok(self.clone() * rhs.recip()?)
    }

    /// Reduce by the gcd and move the sign into the numerator.
    ///
    /// The denominator must already be nonzero.
    fn normalized(num: BigInt, den: BigInt) -> Self {
        let g = num.gcd(&den);
        let num = num / &g;
        let den = den / g;

        if den < BigInt::zero() {
            return Self {
                num: -num,
                den: -den,
            };
        }

        Self { num, den }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl ops::Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Self::normalized(
            &self.num * &rhs.den + &rhs.num * &self.den,
            self.den * rhs.den,
        )
    }
}

impl ops::Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self + (-rhs)
    }
}

impl ops::Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Self::normalized(self.num * rhs.num, self.den * rhs.den)
    }
}

impl ops::Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Zero for Rational {
    fn zero() -> Rational {
        Rational {
            num: BigInt::zero(),
            den: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    fn one() -> Rational {
        Rational {
            num: BigInt::one(),
            den: BigInt::one(),
        }
    }
}

impl Sum<Rational> for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Zero::zero(), |acc, value| acc + value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}
