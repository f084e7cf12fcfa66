//! Inference tuning options.

use serde::{Deserialize, Serialize};

/// Tokens treated as missing values when fitting a schema.
pub const DEFAULT_MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "#N/A", "-", "?",
];

/// Options shared by both engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceOptions {
    /// Cell values (compared after trimming) that count as missing.
    pub missing_tokens: Vec<String>,
    /// Share of non-missing values a typed candidate must match to win over string.
    pub min_type_ratio: f64,
    /// Most distinct values a column may have and still be categorical.
    pub max_categories: usize,
    /// Highest distinct/normal ratio a categorical column may have.
    pub max_unique_ratio: f64,
    /// Values listed per sample column when showing the schema.
    pub sample_limit: usize,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            missing_tokens: DEFAULT_MISSING_TOKENS
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
            min_type_ratio: 0.75,
            max_categories: 10,
            max_unique_ratio: 0.5,
            sample_limit: 5,
        }
    }
}

impl InferenceOptions {
    #[must_use]
    pub fn with_max_categories(mut self, max_categories: usize) -> Self {
        self.max_categories = max_categories;
        self
    }

    #[must_use]
    pub fn with_missing_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_sample_limit(mut self, sample_limit: usize) -> Self {
        self.sample_limit = sample_limit;
        self
    }

    pub fn is_missing(&self, value: &str) -> bool {
        let trimmed = value.trim();
        self.missing_tokens.iter().any(|token| token == trimmed)
    }
}
