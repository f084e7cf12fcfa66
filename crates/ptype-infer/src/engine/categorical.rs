//! Categorical type-inference engine.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use ptype_common::column_to_strings;

use crate::error::Result;
use crate::options::InferenceOptions;
use crate::types::{CategoricalStatistics, ColumnSchema, InferredSchema, InferredType};

use super::SchemaEngine;
use super::ptype::{PtypeEngine, distinct};

/// Plain inference plus categorical detection.
///
/// A string or integer column becomes categorical when it has at most
/// `max_categories` distinct values and its distinct/non-missing ratio is at
/// most `max_unique_ratio`. Every non-missing value of a categorical column is
/// a normal value (a category label), so it has no anomalies.
#[derive(Debug, Clone, Default)]
pub struct PtypeCatEngine {
    base: PtypeEngine,
}

impl PtypeCatEngine {
    pub fn new(options: InferenceOptions) -> Self {
        Self {
            base: PtypeEngine::new(options),
        }
    }

    pub fn options(&self) -> &InferenceOptions {
        self.base.options()
    }

    fn fit_column(&self, name: &str, cells: &[Option<String>]) -> ColumnSchema {
        let mut column = self.base.fit_column(name, cells);
        if !matches!(
            column.inferred_type(),
            InferredType::String | InferredType::Integer
        ) {
            return column;
        }

        let (present, _, _) = self.base.split_missing(cells);
        if let Some(categories) = self.categories(&present) {
            tracing::debug!(
                column = name,
                from = %column.inferred_type(),
                categories = categories.len(),
                "column is categorical"
            );
            let labels = distinct(&present);
            column.cardinality = labels.len();
            column.numeric = None;
            column.categories = categories;
            column.ptype.inferred_ptype = InferredType::Categorical;
            column.ptype.confidence = 1.0;
            column.ptype.normal_values = labels;
            column.ptype.normal_count = present.len();
            column.ptype.anomalous_values.clear();
            column.ptype.anomalous_count = 0;
        }
        column
    }

    /// Category frequencies, or `None` when the column has too many distinct values.
    fn categories(&self, present: &[&str]) -> Option<Vec<CategoricalStatistics>> {
        if present.is_empty() {
            return None;
        }

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in present {
            *counts.entry(*value).or_default() += 1;
        }

        let options = self.options();
        let total = present.len();
        let unique_ratio = counts.len() as f64 / total as f64;
        if counts.len() > options.max_categories || unique_ratio > options.max_unique_ratio {
            return None;
        }

        let mut categories: Vec<CategoricalStatistics> = counts
            .into_iter()
            .map(|(label, frequency)| CategoricalStatistics {
                label: label.to_string(),
                frequency,
                relative_frequency: frequency as f64 / total as f64,
            })
            .collect();
        // BTreeMap order makes the label tie-break stable
        categories.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        Some(categories)
    }
}

impl SchemaEngine for PtypeCatEngine {
    fn name(&self) -> &'static str {
        "ptype_cat"
    }

    fn fit_schema(&self, df: &DataFrame) -> Result<InferredSchema> {
        let mut columns = Vec::with_capacity(df.width());
        for col in df.get_columns() {
            let cells = column_to_strings(col)?;
            columns.push(self.fit_column(col.name().as_str(), &cells));
        }
        tracing::info!(
            engine = self.name(),
            rows = df.height(),
            columns = columns.len(),
            "fitted schema"
        );
        Ok(InferredSchema {
            engine: self.name().to_string(),
            rows: df.height(),
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some((*v).to_string())).collect()
    }

    #[test]
    fn test_low_cardinality_strings_are_categorical() {
        let engine = PtypeCatEngine::default();
        let column = engine.fit_column(
            "city",
            &cells(&["Paris", "Oslo", "Paris", "Rome", "Paris", "Oslo", ""]),
        );

        assert_eq!(column.inferred_type(), InferredType::Categorical);
        assert_eq!(column.cardinality, 3);
        assert_eq!(column.ptype.normal_values, vec!["Paris", "Oslo", "Rome"]);
        assert_eq!(column.ptype.missing_count, 1);

        let labels: Vec<(&str, usize)> = column
            .categories
            .iter()
            .map(|c| (c.label.as_str(), c.frequency))
            .collect();
        assert_eq!(labels, vec![("Paris", 3), ("Oslo", 2), ("Rome", 1)]);

        let total: f64 = column.categories.iter().map(|c| c.relative_frequency).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unique_strings_stay_string() {
        let engine = PtypeCatEngine::default();
        let column = engine.fit_column("name", &cells(&["Alice", "Bob", "Charlie", "Dana"]));

        assert_eq!(column.inferred_type(), InferredType::String);
        assert!(column.categories.is_empty());
    }

    #[test]
    fn test_coded_integers_are_categorical() {
        let engine = PtypeCatEngine::default();
        let column = engine.fit_column("grade", &cells(&["1", "2", "1", "2", "1", "3"]));

        assert_eq!(column.inferred_type(), InferredType::Categorical);
        assert!(column.numeric.is_none());
    }

    #[test]
    fn test_booleans_and_floats_unchanged() {
        let engine = PtypeCatEngine::default();
        let flags = engine.fit_column("flag", &cells(&["yes", "no", "yes", "no"]));
        let ratio = engine.fit_column("ratio", &cells(&["0.5", "0.5", "0.25", "0.5"]));

        assert_eq!(flags.inferred_type(), InferredType::Boolean);
        assert_eq!(ratio.inferred_type(), InferredType::Float);
    }

    #[test]
    fn test_max_categories_option() {
        let engine = PtypeCatEngine::new(InferenceOptions::default().with_max_categories(2));
        let column = engine.fit_column("city", &cells(&["a", "b", "c", "a", "b", "c"]));

        assert_eq!(column.inferred_type(), InferredType::String);
    }

    #[test]
    fn test_fit_schema_engine_name() {
        let df = df! {
            "city" => &["Paris", "Paris", "Oslo", "Oslo"],
        }
        .unwrap();

        let schema = PtypeCatEngine::default().fit_schema(&df).unwrap();

        assert_eq!(schema.engine, "ptype_cat");
        assert_eq!(
            schema.column("city").unwrap().inferred_type(),
            InferredType::Categorical
        );
    }
}
