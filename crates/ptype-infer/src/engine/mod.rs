//! Schema-inference engines.

mod categorical;
mod ptype;

use polars::prelude::DataFrame;
use ptype_ingest::ReadMode;

use crate::error::Result;
use crate::options::InferenceOptions;
use crate::types::InferredSchema;

pub use categorical::PtypeCatEngine;
pub use ptype::PtypeEngine;

/// Capability shared by the schema-inference engines.
pub trait SchemaEngine {
    /// Short engine name recorded in the fitted schema.
    fn name(&self) -> &'static str;

    /// Infers a schema for every column of `df`, in column order.
    fn fit_schema(&self, df: &DataFrame) -> Result<InferredSchema>;
}

/// Which engine a read mode feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Ptype,
    PtypeCat,
}

impl EngineKind {
    /// Engine for a read mode. Plain-mode frames have no engine.
    pub fn for_mode(mode: ReadMode) -> Option<Self> {
        match mode {
            ReadMode::Plain => None,
            ReadMode::Typed => Some(Self::Ptype),
            ReadMode::TypedCategorical => Some(Self::PtypeCat),
        }
    }

    pub fn build(self, options: InferenceOptions) -> Box<dyn SchemaEngine> {
        match self {
            Self::Ptype => Box::new(PtypeEngine::new(options)),
            Self::PtypeCat => Box::new(PtypeCatEngine::new(options)),
        }
    }
}
