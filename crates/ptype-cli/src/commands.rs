//! Command implementations, independent of argument parsing.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use ptype_calc::{Calculator, CalculatorConfig, Number};
use ptype_infer::{InferenceOptions, infer_schema};
use ptype_ingest::{ReadMode, read_csv_columns};

/// Calculator operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalcOp {
    Add(Number, Number),
    Div(Number, Number),
    Tan(Number),
}

/// How the schema report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

pub fn run_calc(config: CalculatorConfig, op: CalcOp) -> Result<Number> {
    let calc = Calculator::new(config);
    let result = match op {
        CalcOp::Add(a, b) => calc.add(a, b),
        CalcOp::Div(a, b) => calc.div(a, b),
        CalcOp::Tan(value) => calc.tan(value),
    };
    result.with_context(|| format!("{op:?} failed"))
}

pub fn run_load(path: &Path, columns: &[String], mode: ReadMode) -> Result<DataFrame> {
    read_csv_columns(path, columns, mode)
        .with_context(|| format!("loading columns from {}", path.display()))
}

pub fn run_infer<W: Write>(
    path: &Path,
    columns: &[String],
    mode: ReadMode,
    options: &InferenceOptions,
    format: ReportFormat,
    out: &mut W,
) -> Result<()> {
    let schema = infer_schema(path, columns, mode, options)
        .with_context(|| format!("inferring schema of {}", path.display()))?;
    match format {
        ReportFormat::Table => schema.show_with_limit(out, options.sample_limit)?,
        ReportFormat::Json => writeln!(out, "{}", schema.to_json()?)?,
    }
    Ok(())
}
