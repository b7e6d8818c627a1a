//! # Ordering
//!
//! Equality is derived on the fields; this only needs the total order.
use std::cmp::Ordering;

use crate::rational::Rational;

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numerator < 0, other.numerator < 0) {
            // -a < -b iff b < a
            (true, true) => compare_magnitudes(other, self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => compare_magnitudes(self, other),
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare `|lhs|` to `|rhs|` by cross multiplication.
///
/// Both products are below `2^128` and can't overflow.
fn compare_magnitudes(lhs: &Rational, rhs: &Rational) -> Ordering {
    let left = lhs.numerator.unsigned_abs() as u128 * rhs.denominator as u128;
    let right = rhs.numerator.unsigned_abs() as u128 * lhs.denominator as u128;

    left.cmp(&right)
}
