//! Host numeric value.

use std::fmt;
use std::str::FromStr;

use ptype_common::{format_numeric, parse_f64, parse_i64};
use serde::{Deserialize, Serialize};

/// A numeric value as seen by the host: either an integer or a float.
///
/// Serializes untagged, so `Integer(1)` is `1` and `Float(1.0)` is `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns the value widened to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// True for `0`, `0.0` and `-0.0`.
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            // Keep a trailing ".0" so floats stay distinguishable from integers
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => {
                write!(f, "{}.0", format_numeric(*v))
            }
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Error returned when text is neither an integer nor a float.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNumberError(pub String);

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a number", self.0)
    }
}

impl std::error::Error for ParseNumberError {}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(v) = parse_i64(s) {
            return Ok(Self::Integer(v));
        }
        parse_f64(s)
            .map(Self::Float)
            .ok_or_else(|| ParseNumberError(s.to_string()))
    }
}
