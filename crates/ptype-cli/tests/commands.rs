//! Command-level tests over a temporary CSV file.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use ptype_calc::{CalculatorConfig, Number};
use ptype_cli::commands::{CalcOp, ReportFormat, run_calc, run_infer, run_load};
use ptype_infer::InferenceOptions;
use ptype_ingest::ReadMode;

fn write_csv(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("visits.csv");
    fs::write(
        &path,
        "subject,arm,dose\nS1,A,10\nS2,B,20\nS3,A,\nS4,A,15\n",
    )
    .expect("write file");
    path
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn calc_rounds_division_when_requested() {
    let config = CalculatorConfig {
        use_degrees: false,
        round_to_integer: true,
    };
    let value = run_calc(config, CalcOp::Div(Number::Integer(7), Number::Integer(2))).unwrap();
    assert_eq!(value, Number::Integer(4));

    let value = run_calc(
        CalculatorConfig::default(),
        CalcOp::Div(Number::Integer(7), Number::Integer(2)),
    )
    .unwrap();
    assert_eq!(value, Number::Float(3.5));
}

#[test]
fn load_returns_requested_columns_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir);

    let df = run_load(&path, &columns(&["dose", "subject"]), ReadMode::Typed).unwrap();
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["dose", "subject"]);
    assert_eq!(df.height(), 4);
}

#[test]
fn load_error_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir);

    let err = run_load(&path, &columns(&["visit"]), ReadMode::Plain).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("visits.csv"));
    assert!(message.contains("visit"));
}

#[test]
fn infer_writes_json_report() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir);
    let mut out = Vec::new();

    run_infer(
        &path,
        &columns(&["arm", "dose"]),
        ReadMode::TypedCategorical,
        &InferenceOptions::default(),
        ReportFormat::Json,
        &mut out,
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["engine"], "ptype_cat");
    assert_eq!(value["rows"], 4);
    assert_eq!(value["columns"][0]["name"], "arm");
    assert_eq!(value["columns"][1]["name"], "dose");
    assert_eq!(value["columns"][1]["ptype"]["inferred_ptype"], "integer");
}

#[test]
fn infer_rejects_plain_mode() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir);
    let mut out = Vec::new();

    let result = run_infer(
        &path,
        &columns(&["arm"]),
        ReadMode::Plain,
        &InferenceOptions::default(),
        ReportFormat::Table,
        &mut out,
    );
    assert!(result.is_err());
    assert!(out.is_empty());
}
