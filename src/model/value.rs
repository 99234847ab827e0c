//! Scalar dimension values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single dimension value: string, finite number, or boolean.
///
/// Null and nested objects never make it into a `ScalarValue`; the record
/// boundary drops them. Equality is strict across kinds, so the text `"2"`
/// and the number `2` are different values, while `2` and `2.0` are equal.
#[derive(Debug, Clone)]
pub enum ScalarValue {
    /// UTF-8 text
    Text(String),
    /// Finite number
    Number(f64),
    /// Boolean flag
    Bool(bool),
}

impl ScalarValue {
    /// Create a number value. Returns `None` for NaN and infinities.
    #[must_use]
    pub fn number(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self::Number(value))
    }

    /// Convert a JSON value, keeping only scalars.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().and_then(Self::number),
            _ => None,
        }
    }

    /// Whether the value counts as present. Empty strings are treated as absent.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Text(s) if s.is_empty())
    }

    /// Borrow the text content, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content, if this is a number value.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric content as a positive pixel size, if integral and in range.
    #[must_use]
    pub fn as_pixels(&self) -> Option<u32> {
        match self {
            Self::Number(n) if n.fract() == 0.0 && *n > 0.0 && *n <= f64::from(u32::MAX) => {
                Some(*n as u32)
            }
            Self::Text(s) => s.trim().parse::<u32>().ok().filter(|px| *px > 0),
            _ => None,
        }
    }

    /// Whether this is a number value.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

/// Render a number the way it reads in a label: integral values without a
/// fractional part.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Canonical bit pattern so that `0.0` and `-0.0` hash alike.
fn number_bits(n: f64) -> u64 {
    if n == 0.0 {
        0.0_f64.to_bits()
    } else {
        n.to_bits()
    }
}

impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => false,
        }
    }
}

// Numbers are finite by construction, so equality is reflexive.
impl Eq for ScalarValue {}

impl Hash for ScalarValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Text(s) => s.hash(state),
            Self::Number(n) => number_bits(*n).hash(state),
            Self::Bool(b) => b.hash(state),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Serialize for ScalarValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl<'de> Deserialize<'de> for ScalarValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&value)
            .ok_or_else(|| serde::de::Error::custom("expected a string, finite number or boolean"))
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u32> for ScalarValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i32> for ScalarValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}
