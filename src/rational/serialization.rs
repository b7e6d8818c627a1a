//! # Serialization
//!
//! A value is written as its numerator and denominator. Reading goes through the checked
//! constructor, so the input needn't be reduced but can't have a zero denominator.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error;

use crate::rational::Rational;

#[derive(Serialize, Deserialize)]
struct Parts {
    numerator: i64,
    denominator: u64,
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Parts { numerator: self.numerator, denominator: self.denominator }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Parts { numerator, denominator } = Parts::deserialize(deserializer)?;
        Rational::try_new(numerator, denominator).map_err(D::Error::custom)
    }
}
