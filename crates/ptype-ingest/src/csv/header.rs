//! CSV header parsing and column lookup.

/// Column names from the header row of a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Column names, in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the file position of a column.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.position(column).is_some()
    }

    /// Returns the first requested column that is not in the header.
    pub fn first_missing<'a, S: AsRef<str>>(&self, requested: &'a [S]) -> Option<&'a str> {
        requested
            .iter()
            .map(AsRef::as_ref)
            .find(|column| !self.contains(column))
    }
}

/// Normalizes a header value by stripping a leading UTF-8 BOM.
///
/// Whitespace is kept: column lookup is by exact name.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').to_string()
}
