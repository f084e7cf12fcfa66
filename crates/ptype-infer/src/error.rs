//! Error types for schema inference.

use ptype_ingest::{IngestError, ReadMode};
use thiserror::Error;

/// Errors that can occur while loading and fitting a schema.
#[derive(Debug, Error)]
pub enum InferError {
    /// Loading the columns failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The read mode has no schema-inference engine.
    #[error("read mode '{mode}' has no schema-inference engine (use ptype or ptype_Cat)")]
    NoEngine { mode: ReadMode },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Writing the schema report failed.
    #[error("failed to write schema: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the schema failed.
    #[error("failed to serialize schema: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<polars::prelude::PolarsError> for InferError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for inference operations.
pub type Result<T> = std::result::Result<T, InferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_engine_display() {
        let err = InferError::NoEngine {
            mode: ReadMode::Plain,
        };
        assert_eq!(
            err.to_string(),
            "read mode 'pandas' has no schema-inference engine (use ptype or ptype_Cat)"
        );
    }

    #[test]
    fn test_ingest_is_transparent() {
        let err: InferError = IngestError::UnknownReadMode {
            mode: "x".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("unknown read mode 'x'"));
    }
}
