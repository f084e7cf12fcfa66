//! Value-level type tests.

use chrono::{NaiveDate, NaiveDateTime};
use ptype_common::{parse_f64, parse_i64};

use crate::types::InferredType;

const BOOLEAN_TOKENS: &[&str] = &["true", "false", "yes", "no", "t", "f", "y", "n"];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%d %b %Y",
    "%d %B %Y", "%b %d, %Y", "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

pub(crate) fn is_boolean(value: &str) -> bool {
    let trimmed = value.trim();
    BOOLEAN_TOKENS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(trimmed))
}

pub(crate) fn is_integer(value: &str) -> bool {
    parse_i64(value).is_some()
}

/// Decimal numbers only; `inf` and `NaN` spellings are not floats here.
pub(crate) fn is_float(value: &str) -> bool {
    value.bytes().any(|b| b.is_ascii_digit()) && parse_f64(value).is_some()
}

pub(crate) fn is_date(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(trimmed, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).is_ok())
}

/// True when `value` is a valid instance of `ty`.
///
/// Every value is a valid string or category label.
pub(crate) fn matches(ty: InferredType, value: &str) -> bool {
    match ty {
        InferredType::Boolean => is_boolean(value),
        InferredType::Integer => is_integer(value),
        InferredType::Float => is_float(value),
        InferredType::Date => is_date(value),
        InferredType::Categorical | InferredType::String => true,
    }
}
