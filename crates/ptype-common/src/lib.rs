//! Shared utilities for the ptype-shim crates.
//!
//! This crate provides Polars value helpers and lenient numeric parsing used by
//! the loader, the inference engines, and the CLI.

pub mod polars;

pub use polars::{any_to_string, column_to_strings, format_numeric, parse_f64, parse_i64};
