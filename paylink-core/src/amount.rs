//! Major-to-minor amount conversion.
//!
//! The request amount is never validated. Whatever JSON value the client
//! sends is coerced to an `f64` and scaled by 100, so a string, a negative
//! number or a missing field all reach the gateway in some numeric form.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Minor units per major unit for two-decimal currencies (paise per rupee).
pub const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Coerce a request `amount` field to a major-unit number.
///
/// `None` means the field was absent from the body and yields NaN.
///
/// | value              | result               |
/// |--------------------|----------------------|
/// | number             | itself               |
/// | `null`             | `0`                  |
/// | `true`/`false`     | `1`/`0`              |
/// | blank string       | `0`                  |
/// | decimal string     | parsed value         |
/// | `0x`/`0o`/`0b` str | unsigned integer     |
/// | `[]`               | `0`                  |
/// | `[x]`              | `x` via its text form |
/// | anything else      | NaN                  |
#[must_use]
pub fn coerce_major(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Object(_)) => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_numeric_str(s),
        Some(Value::Array(items)) => coerce_array(items),
    }
}

/// An array is read through its comma-joined text, so only `[]` and a
/// single element can be numeric.
fn coerce_array(items: &[Value]) -> f64 {
    match items {
        [] => 0.0,
        [single] => match single {
            // null renders as empty text
            Value::Null => 0.0,
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => parse_numeric_str(s),
            Value::Array(inner) => coerce_array(inner),
            // "true", "false" and "[object Object]" are not numbers
            Value::Bool(_) | Value::Object(_) => f64::NAN,
        },
        _ => f64::NAN,
    }
}

fn parse_numeric_str(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if let Some(value) = parse_radix_prefixed(trimmed) {
        return value;
    }
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // `f64::from_str` also accepts "inf" and "nan", which are not numbers here.
        s if s.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') => f64::NAN,
        s => s.parse().unwrap_or(f64::NAN),
    }
}

/// Unsigned `0x`, `0o` and `0b` literals. `None` when there is no prefix;
/// NaN when the digits are missing or invalid. No sign is allowed.
fn parse_radix_prefixed(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits
        .chars()
        .try_fold(0.0_f64, |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)));
    Some(value.unwrap_or(f64::NAN))
}

/// An amount in minor currency units, as submitted to the gateway.
///
/// Serialises as a JSON integer when integral, a JSON float when
/// fractional, and `null` when NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinorAmount(f64);

impl MinorAmount {
    /// Scale a major-unit amount to minor units.
    #[must_use]
    pub fn from_major(major: f64) -> Self {
        Self(major * MINOR_UNITS_PER_MAJOR)
    }

    /// Returns the raw `f64` value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the amount as an integer when it is finite, integral and
    /// exactly representable.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, reason = "range and fraction checked above")]
    pub fn as_integer(self) -> Option<i64> {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
            Some(v as i64)
        } else {
            None
        }
    }
}

impl Serialize for MinorAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.0.is_finite() {
            return serializer.serialize_none();
        }
        match self.as_integer() {
            Some(i) => serializer.serialize_i64(i),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl fmt::Display for MinorAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(i) => write!(f, "{i}"),
            None => write!(f, "{}", self.0),
        }
    }
}
