//! Read modes and their loading policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IngestError;

/// Tokens treated as missing in plain mode, matching the pandas defaults.
///
/// The empty field is handled separately by the parser's missing-is-null flag.
pub const PANDAS_NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// How columns are loaded from the source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadMode {
    /// Natural dtype inference (`pandas`).
    Plain,
    /// Every value as raw text (`ptype`).
    Typed,
    /// Every value as raw text, fed to the categorical engine (`ptype_Cat`).
    #[default]
    TypedCategorical,
}

/// Loading policy carried by each [`ReadMode`].
///
/// The column subset is always applied, so it is not a field here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPolicy {
    /// Read every column as `String` instead of inferring dtypes.
    pub force_text: bool,
    /// Treat empty fields and NA tokens as null.
    pub keep_default_na: bool,
}

impl ReadMode {
    pub const ALL: [ReadMode; 3] = [Self::Plain, Self::Typed, Self::TypedCategorical];

    pub fn policy(self) -> LoadPolicy {
        match self {
            Self::Plain => LoadPolicy {
                force_text: false,
                keep_default_na: true,
            },
            Self::Typed | Self::TypedCategorical => LoadPolicy {
                force_text: true,
                keep_default_na: false,
            },
        }
    }

    /// Source name used by the host (`pandas`, `ptype`, `ptype_Cat`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "pandas",
            Self::Typed => "ptype",
            Self::TypedCategorical => "ptype_Cat",
        }
    }

    pub fn is_categorical(self) -> bool {
        self == Self::TypedCategorical
    }
}

impl fmt::Display for ReadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadMode {
    type Err = IngestError;

    /// Accepts both the host source names and the descriptive names,
    /// ignoring ASCII case (`ptype_Cat` and `ptype_cat` are the same mode).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pandas" | "plain" => Ok(Self::Plain),
            "ptype" | "typed" => Ok(Self::Typed),
            "ptype_cat" | "typed_categorical" => Ok(Self::TypedCategorical),
            _ => Err(IngestError::UnknownReadMode {
                mode: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_names() {
        assert_eq!("pandas".parse::<ReadMode>().unwrap(), ReadMode::Plain);
        assert_eq!("ptype".parse::<ReadMode>().unwrap(), ReadMode::Typed);
        assert_eq!(
            "ptype_Cat".parse::<ReadMode>().unwrap(),
            ReadMode::TypedCategorical
        );
        assert_eq!(
            "ptype_cat".parse::<ReadMode>().unwrap(),
            ReadMode::TypedCategorical
        );
    }

    #[test]
    fn test_parse_descriptive_names() {
        assert_eq!("plain".parse::<ReadMode>().unwrap(), ReadMode::Plain);
        assert_eq!("typed".parse::<ReadMode>().unwrap(), ReadMode::Typed);
        assert_eq!(
            "typed_categorical".parse::<ReadMode>().unwrap(),
            ReadMode::TypedCategorical
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "numpy".parse::<ReadMode>().unwrap_err();
        assert!(matches!(err, IngestError::UnknownReadMode { mode } if mode == "numpy"));
    }

    #[test]
    fn test_display_roundtrips() {
        for mode in ReadMode::ALL {
            assert_eq!(mode.to_string().parse::<ReadMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_policies() {
        assert!(!ReadMode::Plain.policy().force_text);
        assert!(ReadMode::Plain.policy().keep_default_na);
        assert_eq!(ReadMode::Typed.policy(), ReadMode::TypedCategorical.policy());
        assert!(ReadMode::Typed.policy().force_text);
        assert!(!ReadMode::Typed.policy().keep_default_na);
    }

    #[test]
    fn test_default_is_categorical() {
        assert!(ReadMode::default().is_categorical());
    }

    #[test]
    fn test_deserialize() {
        let mode: ReadMode = serde_json::from_str("\"typed\"").unwrap();
        assert_eq!(mode, ReadMode::Typed);
    }
}
