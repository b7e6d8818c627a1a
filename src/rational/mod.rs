//! # Rational numbers
//!
//! Exact fractions of a signed 64 bit numerator and an unsigned 64 bit denominator.
//!
//! The only ways to create a value reduce it first, so a `Rational` is always in its simplest
//! form with a positive denominator:
//!
//! ```
//! use rational::Rational;
//!
//! assert_eq!(Rational::new(6, 8).to_string(), "3/4");
//! assert_eq!(Rational::from_signed(6, -8).to_string(), "-3/4");
//! ```
use crate::error::{or_panic, RationalError};
use crate::stride::{StrideThrough, StrideTo};

use self::gcd::gcd;

mod gcd;
mod ops;
mod ordering;
mod conversion;
mod traits;
mod macros;
#[cfg(feature = "serde")]
mod serialization;

/// A fraction in lowest terms.
///
/// Invariants:
///
/// * `denominator > 0`
/// * `gcd(|numerator|, denominator) == 1`
/// * the sign lives in the numerator only
///
/// Because of these, two values are equal exactly when their fields are, which is what the
/// derived `PartialEq` compares.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rational {
    numerator: i64,
    denominator: u64,
}

impl Rational {
    /// The additive identity, `0/1`.
    pub const ZERO: Self = Self { numerator: 0, denominator: 1 };
    /// The multiplicative identity, `1/1`.
    pub const ONE: Self = Self { numerator: 1, denominator: 1 };

    /// Create a new instance, reducing the fraction.
    ///
    /// # Panics
    ///
    /// If the denominator is zero.
    #[track_caller]
    pub fn new(numerator: i64, denominator: u64) -> Self {
        or_panic(
            Self::try_new(numerator, denominator),
            || format!("creating {} / {}", numerator, denominator),
        )
    }

    /// Create a new instance, reducing the fraction.
    ///
    /// # Errors
    ///
    /// `RationalError::ZeroDenominator` if the denominator is zero.
    pub fn try_new(numerator: i64, denominator: u64) -> Result<Self, RationalError> {
        Self::from_wide(
            numerator < 0,
            numerator.unsigned_abs() as u128,
            denominator as u128,
            "construction",
        )
    }

    /// Create a new instance from two signed values.
    ///
    /// A negative denominator moves its sign to the numerator.
    ///
    /// # Panics
    ///
    /// If the denominator is zero, or if the result doesn't fit (`i64::MIN / -1`).
    #[track_caller]
    pub fn from_signed(numerator: i64, denominator: i64) -> Self {
        or_panic(
            Self::try_from_signed(numerator, denominator),
            || format!("creating {} / {}", numerator, denominator),
        )
    }

    /// Create a new instance from two signed values.
    ///
    /// # Errors
    ///
    /// `RationalError::ZeroDenominator` if the denominator is zero, `RationalError::Overflow` if
    /// the negated numerator doesn't fit.
    pub fn try_from_signed(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::from_wide(
            (numerator < 0) != (denominator < 0),
            numerator.unsigned_abs() as u128,
            denominator.unsigned_abs() as u128,
            "construction",
        )
    }

    /// An integer value, `n/1`.
    pub const fn from_integer(value: i64) -> Self {
        Self { numerator: value, denominator: 1 }
    }

    /// Reduce a fraction given as a sign and two magnitudes.
    ///
    /// All constructors and operators end here.
    pub(crate) fn from_wide(
        negative: bool,
        magnitude: u128,
        denominator: u128,
        operation: &'static str,
    ) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::ZeroDenominator);
        }

        let divisor = gcd(magnitude, denominator);
        let (magnitude, denominator) = (magnitude / divisor, denominator / divisor);

        let denominator = u64::try_from(denominator)
            .map_err(|_| RationalError::overflow(operation))?;
        let magnitude = i128::try_from(magnitude)
            .map_err(|_| RationalError::overflow(operation))?;
        let numerator = i64::try_from(if negative { -magnitude } else { magnitude })
            .map_err(|_| RationalError::overflow(operation))?;

        Ok(Self { numerator, denominator })
    }

    /// Reduce a signed wide numerator over a wide denominator.
    pub(crate) fn reduce(
        numerator: i128,
        denominator: u128,
        operation: &'static str,
    ) -> Result<Self, RationalError> {
        Self::from_wide(numerator < 0, numerator.unsigned_abs(), denominator, operation)
    }

    /// The numerator, carrying the sign of the value.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// The denominator, always positive.
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Whether the value is smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Whether the value is larger than zero.
    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    /// Whether the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// `-1`, `0` or `1`, depending on the sign.
    pub fn signum(&self) -> Self {
        Self::from_integer(self.numerator.signum())
    }

    /// The nearest `f64`.
    ///
    /// This is a lossy projection, computed as `numerator as f64 / denominator as f64`. Converting
    /// back need not give the same fraction.
    pub fn double(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Swap numerator and denominator, keeping the sign in the numerator.
    ///
    /// ```
    /// use rational::Rational;
    ///
    /// assert_eq!(Rational::new(3, 4).reciprocal(), Rational::new(4, 3));
    /// assert_eq!(Rational::new(-3, 4).reciprocal(), Rational::new(-4, 3));
    /// ```
    ///
    /// # Panics
    ///
    /// If the value is zero, or when the denominator is too large to become a numerator.
    #[track_caller]
    pub fn reciprocal(&self) -> Self {
        or_panic(self.try_reciprocal(), || format!("reciprocal of {}", self))
    }

    /// Swap numerator and denominator, keeping the sign in the numerator.
    ///
    /// # Errors
    ///
    /// `RationalError::ZeroDenominator` for zero, `RationalError::Overflow` when the denominator
    /// exceeds `i64::MAX` (or `2^63` for negative values).
    pub fn try_reciprocal(&self) -> Result<Self, RationalError> {
        Self::from_wide(
            self.numerator < 0,
            self.denominator as u128,
            self.numerator.unsigned_abs() as u128,
            "reciprocal",
        )
    }

    /// The additive inverse.
    ///
    /// # Errors
    ///
    /// `RationalError::Overflow` for a numerator of `i64::MIN`.
    pub fn try_neg(&self) -> Result<Self, RationalError> {
        self.numerator.checked_neg()
            .map(|numerator| Self { numerator, denominator: self.denominator })
            .ok_or(RationalError::overflow("negation"))
    }

    /// The absolute value.
    ///
    /// # Panics
    ///
    /// For a numerator of `i64::MIN`.
    #[track_caller]
    pub fn abs(&self) -> Self {
        or_panic(self.try_abs(), || format!("absolute value of {}", self))
    }

    /// The absolute value.
    ///
    /// # Errors
    ///
    /// `RationalError::Overflow` for a numerator of `i64::MIN`.
    pub fn try_abs(&self) -> Result<Self, RationalError> {
        if self.numerator < 0 {
            self.try_neg()
        } else {
            Ok(*self)
        }
    }

    /// Exact sum.
    ///
    /// The fractions are brought to the least common multiple of the denominators before adding,
    /// after which the result is reduced once more.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, RationalError> {
        Self::sum(self, rhs.numerator as i128, rhs.denominator, "addition")
    }

    /// Exact difference.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, RationalError> {
        Self::sum(self, -(rhs.numerator as i128), rhs.denominator, "subtraction")
    }

    fn sum(
        &self,
        rhs_numerator: i128,
        rhs_denominator: u64,
        operation: &'static str,
    ) -> Result<Self, RationalError> {
        let divisor = gcd(self.denominator, rhs_denominator);
        let (lhs_scale, rhs_scale) = (rhs_denominator / divisor, self.denominator / divisor);

        // Each product is below 2^127 in magnitude, only the sum can leave the range.
        let numerator = (self.numerator as i128 * lhs_scale as i128)
            .checked_add(rhs_numerator * rhs_scale as i128)
            .ok_or(RationalError::overflow(operation))?;
        let denominator = self.denominator as u128 * lhs_scale as u128;

        Self::reduce(numerator, denominator, operation)
    }

    /// Exact product.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, RationalError> {
        Self::reduce(
            self.numerator as i128 * rhs.numerator as i128,
            self.denominator as u128 * rhs.denominator as u128,
            "multiplication",
        )
    }

    /// Exact quotient.
    ///
    /// # Errors
    ///
    /// `RationalError::ZeroDenominator` when dividing by zero.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        // The sign of the divisor moves to the numerator, the denominator stays unsigned.
        let numerator = self.numerator as i128 * rhs.denominator as i128;
        let numerator = if rhs.numerator < 0 { -numerator } else { numerator };

        Self::reduce(
            numerator,
            self.denominator as u128 * rhs.numerator.unsigned_abs() as u128,
            "division",
        )
    }

    /// Values `self, self + by, self + 2 by, ...` strictly before `end`.
    ///
    /// With a negative step the sequence descends and stops strictly above `end`.
    ///
    /// # Errors
    ///
    /// `RationalError::ZeroStep` if `by` is zero.
    pub fn stride_to(self, end: Self, by: Self) -> Result<StrideTo<Self>, RationalError> {
        StrideTo::new(self, end, by)
    }

    /// Values `self, self + by, self + 2 by, ...` up to and including `end`.
    ///
    /// # Errors
    ///
    /// `RationalError::ZeroStep` if `by` is zero.
    pub fn stride_through(self, end: Self, by: Self) -> Result<StrideThrough<Self>, RationalError> {
        StrideThrough::new(self, end, by)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}
