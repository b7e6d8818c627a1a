//! # Greatest common divisor
use std::ops::Rem;

use num_traits::Zero;

/// Euclidean algorithm on non-negative integers.
///
/// `gcd(0, y) == y` and `gcd(x, 0) == x`. The degenerate `gcd(0, 0)` is `0`; constructors reject a
/// zero denominator before asking for it.
pub(crate) fn gcd<T: Copy + Zero + Rem<Output = T>>(x: T, y: T) -> T {
    let (mut a, mut b) = (x, y);
    while !b.is_zero() {
        (a, b) = (b, a % b);
    }
    a
}
