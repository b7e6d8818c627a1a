//! # Numeric traits
//!
//! Implementations of the `num_traits` vocabulary, such that generic numeric code can use the
//! type.
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedSub};
use num_traits::{Float, FromPrimitive, Inv, One, ToPrimitive, Zero};

use crate::rational::Rational;

mod identities {
    use super::*;

    impl Zero for Rational {
        fn zero() -> Self {
            Self::ZERO
        }

        fn is_zero(&self) -> bool {
            self.numerator == 0
        }
    }

    impl One for Rational {
        fn one() -> Self {
            Self::ONE
        }

        fn is_one(&self) -> bool {
            *self == Self::ONE
        }
    }
}

mod checked {
    use super::*;

    impl CheckedAdd for Rational {
        fn checked_add(&self, v: &Self) -> Option<Self> {
            self.try_add(v).ok()
        }
    }

    impl CheckedSub for Rational {
        fn checked_sub(&self, v: &Self) -> Option<Self> {
            self.try_sub(v).ok()
        }
    }

    impl CheckedMul for Rational {
        fn checked_mul(&self, v: &Self) -> Option<Self> {
            self.try_mul(v).ok()
        }
    }

    impl CheckedDiv for Rational {
        fn checked_div(&self, v: &Self) -> Option<Self> {
            self.try_div(v).ok()
        }
    }

    impl CheckedNeg for Rational {
        fn checked_neg(&self) -> Option<Self> {
            self.try_neg().ok()
        }
    }
}

impl Inv for Rational {
    type Output = Self;

    #[track_caller]
    fn inv(self) -> Self::Output {
        self.reciprocal()
    }
}

impl ToPrimitive for Rational {
    /// Truncates toward zero.
    fn to_i64(&self) -> Option<i64> {
        // The quotient is never larger in magnitude than the numerator.
        Some((self.numerator as i128 / self.denominator as i128) as i64)
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|value| u64::try_from(value).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.double())
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        i64::try_from(n).ok().map(Self::from_integer)
    }

    /// The exact value of a finite float, if it can be represented.
    ///
    /// Every finite float is a fraction with a power of two as denominator. `None` when that
    /// fraction needs more than 64 bits for either part.
    fn from_f64(n: f64) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }

        let (mantissa, exponent, sign) = Float::integer_decode(n);
        if mantissa == 0 {
            return Some(Self::ZERO);
        }
        let shift = mantissa.trailing_zeros();
        let (mantissa, exponent) = (mantissa >> shift, exponent as i32 + shift as i32);

        let (magnitude, denominator) = if exponent >= 0 {
            if exponent >= 64 {
                return None;
            }
            ((mantissa as u128) << exponent, 1)
        } else {
            if -exponent >= 64 {
                return None;
            }
            (mantissa as u128, 1u128 << -exponent)
        };

        Self::from_wide(sign < 0, magnitude, denominator, "conversion").ok()
    }
}

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        value.double()
    }
}
