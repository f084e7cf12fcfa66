//! CSV column loading under a [`ReadMode`].

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::mode::{PANDAS_NA_VALUES, ReadMode};

use super::header::{CsvHeaders, normalize_header};

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open_file(path)?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

/// Reads the header row of a CSV file.
///
/// Quoted names are unquoted; a leading UTF-8 BOM is stripped.
pub fn read_csv_schema(path: &Path) -> Result<CsvHeaders> {
    let file = open_file(path)?;
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let record = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if record.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let columns: Vec<String> = record.iter().map(normalize_header).collect();
    if columns.iter().all(|c| c.trim().is_empty()) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    Ok(CsvHeaders::new(columns))
}

/// Loads the requested columns from a CSV file.
///
/// The header row is checked first, so a column absent from the file fails
/// with [`IngestError::MissingColumn`] in every mode. The returned frame holds
/// exactly the requested columns, in the requested order, typed per the mode:
///
/// - [`ReadMode::Plain`]: dtypes inferred over the whole file, pandas NA tokens
///   and empty fields become null
/// - [`ReadMode::Typed`] / [`ReadMode::TypedCategorical`]: every column is
///   `String`, empty fields are `""` and NA tokens are kept verbatim
pub fn read_csv_columns<S: AsRef<str>>(
    path: &Path,
    columns: &[S],
    mode: ReadMode,
) -> Result<DataFrame> {
    let requested: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
    tracing::debug!(
        path = %path.display(),
        mode = %mode,
        columns = ?requested,
        "loading CSV columns"
    );

    validate_encoding(path)?;
    let headers = read_csv_schema(path)?;

    if let Some(column) = headers.first_missing(&requested) {
        return Err(IngestError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
        });
    }

    let mut seen = BTreeSet::new();
    for column in &requested {
        if !seen.insert(*column) {
            return Err(IngestError::DuplicateColumn {
                column: (*column).to_string(),
            });
        }
    }

    if requested.is_empty() {
        return Ok(DataFrame::empty());
    }

    let policy = mode.policy();
    let projection: Arc<[PlSmallStr]> =
        requested.iter().map(|c| PlSmallStr::from(*c)).collect();

    // A zero-length inference window reads every column as String
    let infer_length = if policy.force_text { Some(0) } else { None };
    let null_values = policy.keep_default_na.then(|| {
        NullValues::AllColumns(PANDAS_NA_VALUES.iter().map(|v| PlSmallStr::from(*v)).collect())
    });

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_columns(Some(projection))
        .with_infer_schema_length(infer_length)
        .map_parse_options(|opts| {
            opts.with_missing_is_null(policy.keep_default_na)
                .with_null_values(null_values.clone())
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // The reader yields file order; reorder to request order
    let df = df.select(requested.iter().copied())?;

    tracing::info!(
        path = %path.display(),
        mode = %mode,
        rows = df.height(),
        columns = df.width(),
        "loaded CSV columns"
    );
    Ok(df)
}
