//! CSV reading utilities.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{read_csv_columns, read_csv_schema, validate_encoding};
