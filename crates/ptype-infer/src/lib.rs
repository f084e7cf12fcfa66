//! Schema inference over tabular data loaded from CSV.
//!
//! Two engines implement [`SchemaEngine::fit_schema`]:
//!
//! - [`PtypeEngine`]: per-column type (boolean, integer, float, date, string)
//!   with missing and anomalous values
//! - [`PtypeCatEngine`]: the same, plus low-cardinality columns reported as
//!   categorical with value frequencies
//!
//! [`run_type_inference`] ties the loader and the engines together: it loads
//! the requested columns, fits the engine selected by the read mode, and
//! prints the schema to stdout.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ptype_infer::{InferenceOptions, ReadMode, infer_schema};
//!
//! let schema = infer_schema(
//!     Path::new("data/people.csv"),
//!     &["age", "city"],
//!     ReadMode::TypedCategorical,
//!     &InferenceOptions::default(),
//! )?;
//! schema.show(&mut std::io::stdout())?;
//! ```

mod classify;
mod display;
mod engine;
mod error;
mod options;
mod runner;
mod types;

// === Error Types ===
pub use error::{InferError, Result};

// === Options ===
pub use options::InferenceOptions;

// === Engines ===
pub use engine::{EngineKind, PtypeCatEngine, PtypeEngine, SchemaEngine};

// === Schema Model ===
pub use types::{
    CategoricalStatistics, ColumnSchema, InferredSchema, InferredType, NumericSummary, PType,
};

// === Orchestration ===
pub use runner::{DEFAULT_READ_MODE, infer_schema, run_type_inference, run_type_inference_with};

// Re-exported so callers can select a mode without depending on the loader crate.
pub use ptype_ingest::ReadMode;
