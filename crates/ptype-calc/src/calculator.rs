//! Calculator operations over a fixed configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::number::Number;

/// Flags fixed at construction and read by every operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Interpret `tan` input as degrees and round its result to an integer.
    pub use_degrees: bool,
    /// Round `div` results half-to-even to an integer.
    pub round_to_integer: bool,
}

/// Stateless arithmetic over an immutable [`CalculatorConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Creates a calculator from the two flags.
    pub fn with_flags(use_degrees: bool, round_to_integer: bool) -> Self {
        Self::new(CalculatorConfig {
            use_degrees,
            round_to_integer,
        })
    }

    pub fn config(&self) -> CalculatorConfig {
        self.config
    }

    /// Adds two numbers.
    ///
    /// Integer operands stay integers; any float operand promotes the sum to a float.
    pub fn add(&self, a: Number, b: Number) -> Result<Number> {
        let sum = match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => x
                .checked_add(y)
                .map(Number::Integer)
                .ok_or(CalcError::Overflow { operation: "add" })?,
            _ => Number::Float(a.as_f64() + b.as_f64()),
        };
        tracing::trace!(%a, %b, %sum, "add");
        Ok(sum)
    }

    /// Divides `a` by `b` using true (floating-point) division.
    ///
    /// With `round_to_integer` the quotient is rounded half-to-even, so
    /// `div(5, 2)` is `2` and `div(7, 2)` is `4`.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] when `b` is zero, and
    /// [`CalcError::NotFinite`] / [`CalcError::Overflow`] when a rounded
    /// quotient has no integer representation.
    pub fn div(&self, a: Number, b: Number) -> Result<Number> {
        if b.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        let quotient = a.as_f64() / b.as_f64();
        let result = if self.config.round_to_integer {
            Number::Integer(round_half_even(quotient, "div")?)
        } else {
            Number::Float(quotient)
        };
        tracing::trace!(%a, %b, %result, rounded = self.config.round_to_integer, "div");
        Ok(result)
    }

    /// Tangent of `value`.
    ///
    /// In degree mode the input is converted to radians and the result is
    /// rounded half-to-even to an integer, since the float tangent of common
    /// angles is visibly imprecise (`tan(45°)` is `0.9999999999999999`).
    pub fn tan(&self, value: Number) -> Result<Number> {
        let input = value.as_f64();
        if !input.is_finite() {
            return Err(CalcError::NotFinite {
                operation: "tan",
                value: input,
            });
        }
        let result = if self.config.use_degrees {
            Number::Integer(round_half_even(input.to_radians().tan(), "tan")?)
        } else {
            Number::Float(input.tan())
        };
        tracing::trace!(%value, %result, degrees = self.config.use_degrees, "tan");
        Ok(result)
    }
}

/// Rounds to the nearest integer, ties to even.
fn round_half_even(value: f64, operation: &'static str) -> Result<i64> {
    if !value.is_finite() {
        return Err(CalcError::NotFinite { operation, value });
    }
    let rounded = value.round_ties_even();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(CalcError::Overflow { operation });
    }
    Ok(rounded as i64)
}
