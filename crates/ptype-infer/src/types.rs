//! Inferred schema model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical type inferred for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferredType {
    Boolean,
    Categorical,
    Date,
    Float,
    Integer,
    String,
}

impl InferredType {
    /// Typed candidates in tie-break order. `String` is the fallback and
    /// `Categorical` is only assigned by the categorical engine.
    pub const CANDIDATES: [InferredType; 4] =
        [Self::Boolean, Self::Integer, Self::Float, Self::Date];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Categorical => "categorical",
            Self::Date => "date",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::String => "string",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type assignment for one column, split into normal, missing and anomalous values.
///
/// Value lists hold distinct values in first-seen order; counts are per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PType {
    pub inferred_ptype: InferredType,
    /// Share of non-missing rows matching the inferred type.
    pub confidence: f64,
    pub normal_values: Vec<String>,
    pub missing_values: Vec<String>,
    pub anomalous_values: Vec<String>,
    pub normal_count: usize,
    pub missing_count: usize,
    pub anomalous_count: usize,
}

/// Frequency of one category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalStatistics {
    pub label: String,
    pub frequency: usize,
    pub relative_frequency: f64,
}

/// Summary statistics over the normal values of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub minimum: f64,
    pub maximum: f64,
    pub mean: f64,
    pub median: f64,
    pub standard_deviation: f64,
}

/// Inferred schema of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    pub ptype: PType,
    /// Number of distinct normal values.
    pub cardinality: usize,
    pub is_null_present: bool,
    /// Category frequencies, only filled for categorical columns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoricalStatistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
}

impl ColumnSchema {
    pub fn inferred_type(&self) -> InferredType {
        self.ptype.inferred_ptype
    }
}

/// Result of fitting an engine to a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferredSchema {
    /// Name of the engine that produced the schema.
    pub engine: String,
    pub rows: usize,
    pub columns: Vec<ColumnSchema>,
}

impl InferredSchema {
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names paired with their inferred types, in table order.
    pub fn types(&self) -> Vec<(&str, InferredType)> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.inferred_type()))
            .collect()
    }
}
