//! Serde helpers for `f64` values that may be non-finite
//!
//! JSON has no representation for infinity or NaN and `serde_json` writes
//! them as `null`, which it then refuses to read back as `f64`. Finite
//! values are written as plain numbers; the rest as `"inf"`, `"-inf"` or
//! `"NaN"`. A bare `null` reads as NaN.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serializer};

const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";
const NAN: &str = "NaN";

/// Writes `value` as a number, or as a marker string when non-finite
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if value.is_sign_positive() {
        serializer.serialize_str(INFINITY)
    } else {
        serializer.serialize_str(NEG_INFINITY)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Marker(String),
    Null(()),
}

/// Reads a number, a marker string or `null`
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Repr::deserialize(deserializer)? {
        Repr::Number(n) => Ok(n),
        Repr::Null(()) => Ok(f64::NAN),
        Repr::Marker(text) => match text.as_str() {
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            NAN => Ok(f64::NAN),
            other => Err(de::Error::invalid_value(
                Unexpected::Str(other),
                &"a number, \"inf\", \"-inf\" or \"NaN\"",
            )),
        },
    }
}
