//! # Error reporting for rational arithmetic
//!
//! A single enum describes everything that can go wrong while creating or computing with a
//! `Rational`. None of these errors can leave a value behind in a non-canonical state: an
//! operation either produces a reduced fraction or one of these variants.
use std::error::Error;
use std::fmt;

use log::error;

/// A `RationalError` is created when a rational value can't be constructed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RationalError {
    /// A denominator of zero was requested.
    ///
    /// This includes division by zero and the reciprocal of zero, both of which construct a
    /// fraction with a zero denominator.
    ZeroDenominator,
    /// The exact result exists, but doesn't fit a 64 bit numerator and denominator.
    Overflow {
        /// Name of the operation that overflowed, for the end user.
        operation: &'static str,
    },
    /// An arithmetic progression was requested with a step of zero.
    ZeroStep,
    /// Text could not be read as a fraction.
    ///
    /// The contained `String` is a message for the end user.
    Parse(String),
}

impl RationalError {
    pub(crate) fn overflow(operation: &'static str) -> Self {
        RationalError::Overflow { operation }
    }
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RationalError::ZeroDenominator => f.write_str("denominator is zero"),
            RationalError::Overflow { operation } => {
                write!(f, "{} overflows a 64 bit numerator or denominator", operation)
            },
            RationalError::ZeroStep => f.write_str("step of a progression is zero"),
            RationalError::Parse(message) => write!(f, "ParseError: {}", message),
        }
    }
}

impl Error for RationalError {}

/// Unwrap the result of a checked operation for the panicking API.
///
/// The failure is logged before panicking, with a description of the operands that is only
/// formatted when needed.
#[track_caller]
pub(crate) fn or_panic<T>(
    result: Result<T, RationalError>,
    describe: impl FnOnce() -> String,
) -> T {
    match result {
        Ok(value) => value,
        Err(cause) => {
            let description = describe();
            error!("{}: {}", description, cause);
            panic!("{}: {}", description, cause)
        },
    }
}

#[cfg(test)]
mod test {
    use crate::error::{or_panic, RationalError};

    #[test]
    fn display() {
        assert_eq!(RationalError::ZeroDenominator.to_string(), "denominator is zero");
        assert_eq!(
            RationalError::overflow("addition").to_string(),
            "addition overflows a 64 bit numerator or denominator",
        );
        assert_eq!(RationalError::Parse("empty".to_string()).to_string(), "ParseError: empty");
    }

    #[test]
    fn or_panic_passes_values() {
        assert_eq!(or_panic(Ok::<_, RationalError>(3), || unreachable!()), 3);
    }

    #[test]
    #[should_panic(expected = "1 / 0: denominator is zero")]
    fn or_panic_describes() {
        or_panic::<()>(Err(RationalError::ZeroDenominator), || "1 / 0".to_string());
    }
}
