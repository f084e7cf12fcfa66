//! CSV column loading for the schema-inference trigger.
//!
//! This crate loads a named subset of columns from a delimited file into a
//! Polars DataFrame, using one of three [`ReadMode`]s:
//!
//! - **Plain** (`pandas`): dtypes inferred from the file, NA tokens become null
//! - **Typed** (`ptype`): every value read as text, empty fields stay `""`
//! - **TypedCategorical** (`ptype_Cat`): same loading policy as Typed
//!
//! The returned frame holds exactly the requested columns, in request order.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ptype_ingest::{ReadMode, read_csv_columns};
//!
//! let df = read_csv_columns(Path::new("data/people.csv"), &["age", "name"], ReadMode::Typed)?;
//! assert_eq!(df.width(), 2);
//! ```

mod csv;
mod error;
mod mode;

// === Error Types ===
pub use error::{IngestError, Result};

// === Read Modes ===
pub use mode::{LoadPolicy, PANDAS_NA_VALUES, ReadMode};

// === CSV Reading ===
pub use csv::{CsvHeaders, read_csv_columns, read_csv_schema, validate_encoding};
