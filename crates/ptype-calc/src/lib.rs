//! Arithmetic helper exposed to the host process.
//!
//! A [`Calculator`] holds an immutable [`CalculatorConfig`] and exposes
//! [`add`](Calculator::add), [`div`](Calculator::div) and
//! [`tan`](Calculator::tan). Results are [`Number`]s so callers can tell an
//! integer result (rounded division, degree-mode tangent) from a float one.
//!
//! # Example
//!
//! ```
//! use ptype_calc::{Calculator, Number};
//!
//! let calc = Calculator::with_flags(true, true);
//! assert_eq!(calc.tan(Number::Integer(45))?, Number::Integer(1));
//! assert_eq!(calc.div(Number::Integer(7), Number::Integer(2))?, Number::Integer(4));
//! # Ok::<(), ptype_calc::CalcError>(())
//! ```

mod calculator;
mod error;
mod number;

pub use calculator::{Calculator, CalculatorConfig};
pub use error::{CalcError, Result};
pub use number::Number;
