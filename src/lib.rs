//! # Exact rational numbers
//!
//! A fraction type with a signed 64 bit numerator and an unsigned 64 bit denominator. Values are
//! reduced to lowest terms when they are created, and the sign is always carried by the
//! numerator, so every rational value has exactly one representation.
//!
//! Intermediate results of arithmetic and comparisons are computed with 128 bit integers. When a
//! result does not fit the 64 bit pair after reduction, this is reported rather than wrapped:
//! the `try_*` methods return a `RationalError`, the operators panic.
#![warn(missing_docs)]

pub mod error;
pub mod rational;
pub mod stride;

pub use error::RationalError;
pub use rational::Rational;
pub use stride::{Strideable, StrideThrough, StrideTo};
