//! # Arithmetic progressions
//!
//! Lazy sequences `start, start + step, start + 2 step, ...` over an ordered type that can measure
//! the distance to another value and advance by such a distance. The sequence ends at a bound,
//! which is excluded (`StrideTo`) or included (`StrideThrough`). A negative step walks down
//! towards the bound instead. A zero step is refused with `RationalError::ZeroStep` for every
//! element type, and no other error is returned when building a progression.
//!
//! Advancing past the representable range ends the progression if that value would lie past the
//! bound anyway. A value before the bound that can't be represented makes the iterator panic
//! instead of ending early.
//!
//! ```
//! use rational::Rational;
//!
//! let values = Rational::ZERO.stride_to(Rational::ONE, Rational::new(1, 4)).unwrap()
//!     .map(|value| value.to_string())
//!     .collect::<Vec<_>>();
//! assert_eq!(values, vec!["0", "1/4", "1/2", "3/4"]);
//! ```
use std::iter::FusedIterator;
use std::mem;

use num_traits::Zero;

use crate::error::RationalError;
use crate::rational::Rational;

/// A value that can be used as the element of an arithmetic progression.
pub trait Strideable: Ord + Clone {
    /// Difference between two values.
    type Stride: Zero + PartialOrd + Clone;

    /// The step that leads from `self` to `other`.
    fn distance_to(&self, other: &Self) -> Self::Stride;

    /// Take a step.
    ///
    /// # Panics
    ///
    /// When the result can't be represented.
    fn advanced_by(&self, n: &Self::Stride) -> Self;

    /// Take a step, `None` when the result can't be represented.
    fn checked_advanced_by(&self, n: &Self::Stride) -> Option<Self>;

    /// The step that leads from `self` to `other`, `None` when it can't be represented.
    fn checked_distance_to(&self, other: &Self) -> Option<Self::Stride>;
}

impl Strideable for Rational {
    type Stride = Rational;

    #[track_caller]
    fn distance_to(&self, other: &Self) -> Self::Stride {
        other - self
    }

    #[track_caller]
    fn advanced_by(&self, n: &Self::Stride) -> Self {
        self + n
    }

    fn checked_advanced_by(&self, n: &Self::Stride) -> Option<Self> {
        self.try_add(n).ok()
    }

    fn checked_distance_to(&self, other: &Self) -> Option<Self::Stride> {
        other.try_sub(self).ok()
    }
}

/// How far a progression got.
#[derive(Clone)]
enum Position<T> {
    /// Nothing was returned yet.
    Start(T),
    /// The value returned last.
    At(T),
    Finished,
}

/// Shared state of both progression kinds.
struct Cursor<T: Strideable> {
    position: Position<T>,
    end: T,
    step: T::Stride,
    ascending: bool,
}

impl<T: Strideable> Cursor<T> {
    fn new(start: T, end: T, step: T::Stride) -> Result<Self, RationalError> {
        if step.is_zero() {
            return Err(RationalError::ZeroStep);
        }
        let ascending = step > <T::Stride as Zero>::zero();

        Ok(Self { position: Position::Start(start), end, step, ascending })
    }

    fn next_before(&mut self, inclusive: bool) -> Option<T> {
        let candidate = match mem::replace(&mut self.position, Position::Finished) {
            Position::Start(start) => start,
            Position::At(previous) => self.successor(&previous, inclusive)?,
            Position::Finished => return None,
        };
        let within = match (self.ascending, inclusive) {
            (true, false) => candidate < self.end,
            (true, true) => candidate <= self.end,
            (false, false) => candidate > self.end,
            (false, true) => candidate >= self.end,
        };
        if !within {
            return None;
        }

        self.position = Position::At(candidate.clone());
        Some(candidate)
    }

    /// The value after `previous`, `None` if it lies past the end.
    ///
    /// # Panics
    ///
    /// When the value after `previous` can't be represented but isn't known to lie past the end.
    fn successor(&self, previous: &T, inclusive: bool) -> Option<T> {
        if let Some(next) = previous.checked_advanced_by(&self.step) {
            return Some(next);
        }

        // `previous + step` lies past the end exactly when `step` reaches over `end - previous`.
        let past_end = previous.checked_distance_to(&self.end)
            .is_some_and(|remaining| match (self.ascending, inclusive) {
                (true, false) => self.step >= remaining,
                (true, true) => self.step > remaining,
                (false, false) => self.step <= remaining,
                (false, true) => self.step < remaining,
            });
        if past_end {
            None
        } else {
            Some(previous.advanced_by(&self.step))
        }
    }
}

impl<T: Strideable> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            position: self.position.clone(),
            end: self.end.clone(),
            step: self.step.clone(),
            ascending: self.ascending,
        }
    }
}

/// Progression that stops before reaching its end.
#[derive(Clone)]
pub struct StrideTo<T: Strideable>(Cursor<T>);

impl<T: Strideable> StrideTo<T> {
    /// Values from `start` by `step`, excluding `end`.
    ///
    /// # Errors
    ///
    /// `RationalError::ZeroStep` if the step is zero. That is the only error, whatever `T` is.
    ///
    /// # Panics
    ///
    /// While iterating, when a value before the end can't be represented.
    pub fn new(start: T, end: T, step: T::Stride) -> Result<Self, RationalError> {
        Cursor::new(start, end, step).map(Self)
    }
}

impl<T: Strideable> Iterator for StrideTo<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_before(false)
    }
}

impl<T: Strideable> FusedIterator for StrideTo<T> {}

/// Progression that includes its end, if it is hit exactly.
#[derive(Clone)]
pub struct StrideThrough<T: Strideable>(Cursor<T>);

impl<T: Strideable> StrideThrough<T> {
    /// Values from `start` by `step`, including `end`.
    ///
    /// # Errors
    ///
    /// `RationalError::ZeroStep` if the step is zero. That is the only error, whatever `T` is.
    ///
    /// # Panics
    ///
    /// While iterating, when a value before the end can't be represented.
    pub fn new(start: T, end: T, step: T::Stride) -> Result<Self, RationalError> {
        Cursor::new(start, end, step).map(Self)
    }
}

impl<T: Strideable> Iterator for StrideThrough<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_before(true)
    }
}

impl<T: Strideable> FusedIterator for StrideThrough<T> {}
