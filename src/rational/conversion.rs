//! # Conversions
//!
//! From and to integers, integer pairs and text.
use std::fmt::{self, Write};
use std::str::FromStr;

use crate::error::RationalError;
use crate::rational::Rational;

mod creation {
    use super::*;

    impl From<i64> for Rational {
        fn from(value: i64) -> Self {
            Self::from_integer(value)
        }
    }

    impl From<i32> for Rational {
        fn from(value: i32) -> Self {
            Self::from_integer(value.into())
        }
    }

    impl From<u32> for Rational {
        fn from(value: u32) -> Self {
            Self::from_integer(value.into())
        }
    }

    impl TryFrom<u64> for Rational {
        type Error = RationalError;

        fn try_from(value: u64) -> Result<Self, Self::Error> {
            i64::try_from(value)
                .map(Self::from_integer)
                .map_err(|_| RationalError::overflow("conversion"))
        }
    }

    impl TryFrom<(i64, u64)> for Rational {
        type Error = RationalError;

        fn try_from((numerator, denominator): (i64, u64)) -> Result<Self, Self::Error> {
            Self::try_new(numerator, denominator)
        }
    }

    impl TryFrom<(i64, i64)> for Rational {
        type Error = RationalError;

        fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
            Self::try_from_signed(numerator, denominator)
        }
    }

    impl From<Rational> for (i64, u64) {
        fn from(value: Rational) -> Self {
            (value.numerator, value.denominator)
        }
    }
}

/// Writes `n` or `n/d`. A width pads like the integers do: on the left, unless another alignment
/// is asked for.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.denominator == 1 {
            self.numerator.to_string()
        } else {
            format!("{}/{}", self.numerator, self.denominator)
        };

        let padding = f.width().map_or(0, |width| width.saturating_sub(text.len()));
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Left) => (0, padding),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Right) | None => (padding, 0),
        };
        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }

        Ok(())
    }
}

/// Reads `"n"` or `"n/d"`, where spaces around the parts are ignored and `d` may be negative.
impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parse_error = |part: &str, error: std::num::ParseIntError| {
            RationalError::Parse(format!("\"{}\" in \"{}\": {}", part, input, error))
        };

        match input.split_once('/') {
            None => {
                let part = input.trim();
                part.parse::<i64>()
                    .map(Self::from_integer)
                    .map_err(|error| parse_error(part, error))
            },
            Some((numerator, denominator)) => {
                let (numerator, denominator) = (numerator.trim(), denominator.trim());
                let numerator_value = numerator.parse::<i64>()
                    .map_err(|error| parse_error(numerator, error))?;

                if denominator.starts_with('-') {
                    let denominator_value = denominator.parse::<i64>()
                        .map_err(|error| parse_error(denominator, error))?;
                    Self::try_from_signed(numerator_value, denominator_value)
                } else {
                    let denominator_value = denominator.parse::<u64>()
                        .map_err(|error| parse_error(denominator, error))?;
                    Self::try_new(numerator_value, denominator_value)
                }
            },
        }
    }
}
