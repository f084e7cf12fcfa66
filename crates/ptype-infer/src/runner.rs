//! Load-then-fit orchestration.

use std::io::{self, Write};
use std::path::Path;

use ptype_ingest::{ReadMode, read_csv_columns};

use crate::engine::EngineKind;
use crate::error::{InferError, Result};
use crate::options::InferenceOptions;
use crate::types::InferredSchema;

/// Mode used when the caller does not pick one.
pub const DEFAULT_READ_MODE: ReadMode = ReadMode::TypedCategorical;

/// Loads `columns` from `path` under `mode` and fits the engine the mode selects.
///
/// The mode is used both for loading and for engine selection, so the typed
/// modes always hand text-forced columns to their engine.
///
/// # Errors
///
/// [`InferError::NoEngine`] for [`ReadMode::Plain`], which has no engine, and
/// [`InferError::Ingest`] for any loader failure.
pub fn infer_schema<S: AsRef<str>>(
    path: &Path,
    columns: &[S],
    mode: ReadMode,
    options: &InferenceOptions,
) -> Result<InferredSchema> {
    let kind = EngineKind::for_mode(mode).ok_or(InferError::NoEngine { mode })?;
    let df = read_csv_columns(path, columns, mode)?;
    let engine = kind.build(options.clone());
    let _span = tracing::info_span!("fit_schema", engine = engine.name()).entered();
    engine.fit_schema(&df)
}

/// Loads, fits and prints the schema to stdout with default options.
pub fn run_type_inference<S: AsRef<str>>(
    path: &Path,
    columns: &[S],
    mode: ReadMode,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_type_inference_with(path, columns, mode, &InferenceOptions::default(), &mut out)
}

/// Like [`run_type_inference`], with explicit options and output stream.
pub fn run_type_inference_with<S: AsRef<str>, W: Write>(
    path: &Path,
    columns: &[S],
    mode: ReadMode,
    options: &InferenceOptions,
    out: &mut W,
) -> Result<()> {
    let schema = infer_schema(path, columns, mode, options)?;
    schema.show_with_limit(out, options.sample_limit)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_plain_mode_has_no_engine() {
        let file = create_temp_csv("x\n1\n");
        let result = infer_schema(
            file.path(),
            &["x"],
            ReadMode::Plain,
            &InferenceOptions::default(),
        );

        assert!(matches!(
            result,
            Err(InferError::NoEngine {
                mode: ReadMode::Plain
            })
        ));
    }

    #[test]
    fn test_default_mode_is_categorical() {
        assert_eq!(DEFAULT_READ_MODE, ReadMode::default());
        assert_eq!(
            EngineKind::for_mode(DEFAULT_READ_MODE),
            Some(EngineKind::PtypeCat)
        );
    }

    #[test]
    fn test_run_writes_report() {
        let file = create_temp_csv("x,y\n1,a\n2,b\n3,a\n4,b\n");
        let mut out = Vec::new();

        run_type_inference_with(
            file.path(),
            &["y", "x"],
            ReadMode::TypedCategorical,
            &InferenceOptions::default(),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Schema (ptype_cat engine, 4 rows, 2 columns)"));
        assert!(text.contains("categorical"));
    }
}
