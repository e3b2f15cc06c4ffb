//! JSON-safe representation of non-finite floats.
//!
//! The hit model legitimately produces `f64::INFINITY` (and NaN for garbage
//! input), which standard JSON cannot encode. Fields annotated with
//! `#[serde(with = "float_repr")]` serialize finite values as numbers and
//! non-finite values as the strings below. Deserialization accepts either.
//!
//! | value          | encoded as     |
//! |----------------|----------------|
//! | finite `x`     | `x`            |
//! | `+∞`           | `"Infinity"`   |
//! | `-∞`           | `"-Infinity"`  |
//! | NaN            | `"NaN"`        |

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

pub const POSITIVE_INFINITY: &str = "Infinity";
pub const NEGATIVE_INFINITY: &str = "-Infinity";
pub const NOT_A_NUMBER: &str = "NaN";

/// Serialize an `f64`, mapping non-finite values to their string form.
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match non_finite_label(*value) {
        Some(label) => serializer.serialize_str(label),
        None => serializer.serialize_f64(*value),
    }
}

/// Deserialize an `f64` from a number or one of the non-finite labels.
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FloatVisitor)
}

/// Returns the string label for a non-finite value, or `None` if finite.
pub fn non_finite_label(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some(NOT_A_NUMBER)
    } else if value == f64::INFINITY {
        Some(POSITIVE_INFINITY)
    } else if value == f64::NEG_INFINITY {
        Some(NEGATIVE_INFINITY)
    } else {
        None
    }
}

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a number or one of \"{POSITIVE_INFINITY}\", \"{NEGATIVE_INFINITY}\", \"{NOT_A_NUMBER}\""
        )
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        match value {
            POSITIVE_INFINITY => Ok(f64::INFINITY),
            NEGATIVE_INFINITY => Ok(f64::NEG_INFINITY),
            NOT_A_NUMBER => Ok(f64::NAN),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}
