//! Error types for calculator operations.

use thiserror::Error;

/// Errors raised by [`Calculator`](crate::Calculator) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Divisor was zero (integer or floating-point).
    #[error("division by zero")]
    DivisionByZero,

    /// Integer arithmetic or float-to-integer rounding left the i64 range.
    #[error("integer overflow in {operation}")]
    Overflow { operation: &'static str },

    /// Input or intermediate value was infinite or NaN where a finite value is required.
    #[error("{operation} requires a finite value, got {value}")]
    NotFinite { operation: &'static str, value: f64 },
}

/// Result type for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;
