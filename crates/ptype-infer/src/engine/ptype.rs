//! Plain type-inference engine.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;
use ptype_common::{column_to_strings, parse_f64};

use crate::classify::matches;
use crate::error::Result;
use crate::options::InferenceOptions;
use crate::types::{ColumnSchema, InferredSchema, InferredType, NumericSummary, PType};

use super::SchemaEngine;

/// Infers boolean, integer, float, date or string per column.
///
/// The inferred type is the typed candidate matching the most non-missing
/// values, provided it matches at least `min_type_ratio` of them; otherwise
/// the column is a string column. Values that do not match the inferred type
/// are reported as anomalous.
#[derive(Debug, Clone, Default)]
pub struct PtypeEngine {
    options: InferenceOptions,
}

impl PtypeEngine {
    pub fn new(options: InferenceOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InferenceOptions {
        &self.options
    }

    /// Splits cells into present values and missing tokens. Nulls are missing
    /// but have no token.
    pub(crate) fn split_missing<'a>(
        &self,
        cells: &'a [Option<String>],
    ) -> (Vec<&'a str>, Vec<&'a str>, usize) {
        let mut present = Vec::with_capacity(cells.len());
        let mut tokens = Vec::new();
        let mut missing_count = 0usize;
        for cell in cells {
            match cell.as_deref() {
                None => missing_count += 1,
                Some(value) if self.options.is_missing(value) => {
                    missing_count += 1;
                    tokens.push(value);
                }
                Some(value) => present.push(value),
            }
        }
        (present, tokens, missing_count)
    }

    pub(crate) fn fit_column(&self, name: &str, cells: &[Option<String>]) -> ColumnSchema {
        let (present, tokens, missing_count) = self.split_missing(cells);
        let (inferred, matched) = choose_type(&present, self.options.min_type_ratio);

        let mut normal = Vec::with_capacity(matched);
        let mut anomalous = Vec::new();
        for value in &present {
            if matches(inferred, value) {
                normal.push(*value);
            } else {
                anomalous.push(*value);
            }
        }

        let confidence = if present.is_empty() {
            1.0
        } else {
            normal.len() as f64 / present.len() as f64
        };
        let numeric = if inferred.is_numeric() {
            numeric_summary(&normal)
        } else {
            None
        };
        let normal_values = distinct(&normal);

        tracing::debug!(
            column = name,
            ptype = %inferred,
            confidence,
            missing = missing_count,
            anomalies = anomalous.len(),
            "fitted column"
        );

        ColumnSchema {
            name: name.to_string(),
            cardinality: normal_values.len(),
            is_null_present: missing_count > 0,
            categories: Vec::new(),
            numeric,
            ptype: PType {
                inferred_ptype: inferred,
                confidence,
                normal_values,
                missing_values: distinct(&tokens),
                anomalous_values: distinct(&anomalous),
                normal_count: normal.len(),
                missing_count,
                anomalous_count: anomalous.len(),
            },
        }
    }
}

impl SchemaEngine for PtypeEngine {
    fn name(&self) -> &'static str {
        "ptype"
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

/// Picks the typed candidate with the most matches; ties go to the earlier
/// candidate. Falls back to string when no candidate reaches `min_ratio`.
fn choose_type(values: &[&str], min_ratio: f64) -> (InferredType, usize) {
    if values.is_empty() {
        return (InferredType::String, 0);
    }

    let mut best: Option<(InferredType, usize)> = None;
    for candidate in InferredType::CANDIDATES {
        let count = values.iter().filter(|v| matches(candidate, v)).count();
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((candidate, count));
        }
    }

    match best {
        Some((ty, count)) if count > 0 && count as f64 >= min_ratio * values.len() as f64 => {
            (ty, count)
        }
        _ => (InferredType::String, values.len()),
    }
}

/// Distinct values in first-seen order.
pub(crate) fn distinct(values: &[&str]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values
        .iter()
        .filter(|v| seen.insert(**v))
        .map(|v| (*v).to_string())
        .collect()
}

fn numeric_summary(values: &[&str]) -> Option<NumericSummary> {
    let mut numbers: Vec<f64> = values.iter().filter_map(|v| parse_f64(v)).collect();
    if numbers.is_empty() {
        return None;
    }
    numbers.sort_by(f64::total_cmp);

    let n = numbers.len();
    let mean = numbers.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        f64::midpoint(numbers[n / 2 - 1], numbers[n / 2])
    } else {
        numbers[n / 2]
    };
    let standard_deviation = if n > 1 {
        let variance = numbers.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };

    Some(NumericSummary {
        minimum: numbers[0],
        maximum: numbers[n - 1],
        mean,
        median,
        standard_deviation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some((*v).to_string())).collect()
    }

    #[test]
    fn test_integer_column() {
        let engine = PtypeEngine::default();
        let column = engine.fit_column("age", &cells(&["25", "30", "35", "30"]));

        assert_eq!(column.inferred_type(), InferredType::Integer);
        assert_eq!(column.ptype.confidence, 1.0);
        assert_eq!(column.ptype.normal_values, vec!["25", "30", "35"]);
        assert_eq!(column.cardinality, 3);
        let numeric = column.numeric.unwrap();
        assert_eq!(numeric.minimum, 25.0);
        assert_eq!(numeric.maximum, 35.0);
        assert_eq!(numeric.median, 30.0);
    }

    #[test]
    fn test_mixed_integers_and_floats_are_float() {
        let engine = PtypeEngine::default();
        let column = engine.fit_column("v", &cells(&["1", "2.5", "3"]));

        assert_eq!(column.inferred_type(), InferredType::Float);
    }

    #[test]
    fn test_missing_and_anomalous_values() {
        let engine = PtypeEngine::default();
        let column = engine.fit_column(
            "score",
            &cells(&["1", "2", "3", "4", "NA", "", "five", "6", "7", "8"]),
        );

        assert_eq!(column.inferred_type(), InferredType::Integer);
        assert_eq!(column.ptype.missing_values, vec!["NA", ""]);
        assert_eq!(column.ptype.missing_count, 2);
        assert_eq!(column.ptype.anomalous_values, vec!["five"]);
        assert_eq!(column.ptype.anomalous_count, 1);
        assert!(column.is_null_present);
        assert!((column.ptype.confidence - 7.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_low_match_ratio_falls_back_to_string() {
        let engine = PtypeEngine::default();
        let column = engine.fit_column("code", &cells(&["1", "a", "b", "2"]));

        assert_eq!(column.inferred_type(), InferredType::String);
        assert!(column.ptype.anomalous_values.is_empty());
        assert!(column.numeric.is_none());
    }

    #[test]
    fn test_boolean_and_date_columns() {
        let engine = PtypeEngine::default();
        let flags = engine.fit_column("flag", &cells(&["yes", "no", "Yes"]));
        let dates = engine.fit_column("when", &cells(&["2024-01-01", "2024-02-29"]));

        assert_eq!(flags.inferred_type(), InferredType::Boolean);
        assert_eq!(dates.inferred_type(), InferredType::Date);
    }

    #[test]
    fn test_all_missing_column() {
        let engine = PtypeEngine::default();
        let column = engine.fit_column("empty", &[None, Some(String::new())]);

        assert_eq!(column.inferred_type(), InferredType::String);
        assert_eq!(column.ptype.missing_count, 2);
        assert_eq!(column.ptype.missing_values, vec![""]);
        assert_eq!(column.cardinality, 0);
    }

    #[test]
    fn test_fit_schema_keeps_column_order() {
        let df = df! {
            "name" => &["Alice", "Bob", "Charlie"],
            "age" => &["25", "30", "35"],
        }
        .unwrap();

        let schema = PtypeEngine::default().fit_schema(&df).unwrap();

        assert_eq!(schema.engine, "ptype");
        assert_eq!(schema.rows, 3);
        assert_eq!(
            schema.types(),
            vec![("name", InferredType::String), ("age", InferredType::Integer)]
        );
    }

    #[test]
    fn test_fit_schema_accepts_numeric_dtypes() {
        let df = df! {
            "x" => &[Some(1i64), None, Some(3)],
        }
        .unwrap();

        let schema = PtypeEngine::default().fit_schema(&df).unwrap();
        let x = schema.column("x").unwrap();

        assert_eq!(x.inferred_type(), InferredType::Integer);
        assert!(x.is_null_present);
        assert!(x.ptype.missing_values.is_empty());
    }

    #[test]
    fn test_numeric_summary() {
        let summary = numeric_summary(&["1", "2", "3", "4"]).unwrap();
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.median, 2.5);
        assert!((summary.standard_deviation - 1.290_994_448_735_805_6).abs() < 1e-12);
    }
}
