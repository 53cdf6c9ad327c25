//! Exact bounded rational arithmetic
//!
//! Every operation returns `None` instead of a value when the result cannot be
//! represented: a zero divisor, or a reduced numerator or denominator whose
//! magnitude exceeds [`LIMIT`].

use std::fmt;

use log::trace;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Largest magnitude allowed for a reduced numerator or denominator
pub const LIMIT: i64 = 1_000_000_000_000;

/// A rational number in lowest terms with a positive denominator
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fraction(BigRational);

impl Fraction {
    /// Build a reduced fraction from a numerator and denominator.
    pub fn reduce(numerator: BigInt, denominator: BigInt) -> Option<Self> {
        if denominator.is_zero() {
            trace!("Rejecting fraction with zero denominator");
            return None;
        }
        Self::bounded(BigRational::new(numerator, denominator))
    }

    pub fn from_integer(value: i64) -> Option<Self> {
        Self::bounded(BigRational::from_integer(BigInt::from(value)))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    fn bounded(value: BigRational) -> Option<Self> {
        let limit = BigInt::from(LIMIT);
        if value.numer().abs() > limit || value.denom().abs() > limit {
            trace!("Fraction {} exceeds magnitude limit", value);
            return None;
        }
        Some(Self(value))
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn add(&self, other: &Self) -> Option<Self> {
        Self::bounded(&self.0 + &other.0)
    }

    pub fn sub(&self, other: &Self) -> Option<Self> {
        Self::bounded(&self.0 - &other.0)
    }

    pub fn mul(&self, other: &Self) -> Option<Self> {
        Self::bounded(&self.0 * &other.0)
    }

    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            trace!("Exact division by zero");
            return None;
        }
        Self::bounded(&self.0 / &other.0)
    }

    /// Raise to an integer power by repeated multiplication.
    ///
    /// The bound is checked after every multiplication so intermediate values
    /// never grow past [`LIMIT`]. A negative exponent computes the positive
    /// power and then takes the reciprocal, which fails for a zero base.
    pub fn pow(&self, exponent: i32) -> Option<Self> {
        let mut acc = Self::one();
        for _ in 0..exponent.unsigned_abs() {
            acc = acc.mul(self)?;
        }
        if exponent < 0 {
            return Self::one().div(&acc);
        }
        Some(acc)
    }

    /// Nearest float. Both parts fit in 53 bits, so this is a single rounding.
    pub fn to_f64(&self) -> f64 {
        match (self.numer().to_f64(), self.denom().to_f64()) {
            (Some(n), Some(d)) => n / d,
            _ => f64::NAN,
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}
