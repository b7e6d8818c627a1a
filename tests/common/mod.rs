//! # Random values
//!
//! Generators shared by the integration tests. Every test seeds its own generator, so failures
//! can be reproduced.
#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use rational::Rational;

/// Number of samples drawn by the randomized tests.
pub const SAMPLES: usize = 1000;

/// Absolute tolerance when comparing with floating point results.
pub const EPSILON: f64 = 1e-4;

/// A reproducible generator.
pub fn generator(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Any `i64`.
pub fn random_i64(rng: &mut StdRng) -> i64 {
    rng.gen_range(i64::MIN..=i64::MAX)
}

/// Any `u64`, except zero.
pub fn random_denominator(rng: &mut StdRng) -> u64 {
    rng.gen_range(1..=u64::MAX)
}

/// A nonzero fraction with small parts.
///
/// The numerator has at most 14 bits and the denominator 14 bits, such that a few operations on
/// these values stay far from overflowing and `f64` represents both parts exactly.
pub fn random_rational(rng: &mut StdRng) -> Rational {
    let numerator = random_i64(rng) / (1 << 50);
    let denominator = random_denominator(rng) >> 50;

    Rational::new(
        if numerator == 0 { 1 } else { numerator },
        if denominator == 0 { 1 } else { denominator },
    )
}

/// Whether the value is within `EPSILON` of a float.
pub fn close_enough(value: &Rational, float: f64) -> bool {
    (value.double() - float).abs() < EPSILON
}

/// Whether the fraction can't be reduced any further.
pub fn is_simplest(value: &Rational) -> bool {
    let (mut a, mut b) = (value.numerator().unsigned_abs(), value.denominator());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a == 1
}
