//! Error types for record construction, configuration, and import operations.
//!
//! [`ValidationError`] is the only error produced by the record model itself. The
//! other variants of [`CitationError`] come from decoding input, loading library
//! configuration, or the external collaborators driven by [`crate::pipeline`].

use std::fmt;
use thiserror::Error;

/// Marker reported in [`ValidationError::MissingFields`] when an entry type accepts
/// either an author or an editor and neither is present.
pub const AUTHOR_OR_EDITOR: &str = "author or editor";

/// Top-level error type for snapcite operations.
#[derive(Error, Debug)]
pub enum CitationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{stage} failed: {message}")]
    Collaborator { stage: Stage, message: String },
}

impl CitationError {
    /// Wrap a failure reported by an external collaborator.
    pub fn collaborator(stage: Stage, error: impl fmt::Display) -> Self {
        CitationError::Collaborator {
            stage,
            message: error.to_string(),
        }
    }
}

/// Reasons a bibliographic record cannot be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required fields for the entry type are absent. `missing` keeps the order of
    /// the required-field table and may contain [`AUTHOR_OR_EDITOR`].
    #[error("'{entry_type}' requires: {}", missing.join(", "))]
    MissingFields {
        entry_type: String,
        missing: Vec<&'static str>,
    },

    #[error("Unknown entry type \"{0}\"")]
    UnknownEntryType(String),

    #[error("Unknown field \"{0}\"")]
    UnknownField(String),

    #[error("Missing value for {0}")]
    MissingKey(&'static str),

    #[error("Bad value for {field}: \"{value}\" ({reason})")]
    BadValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    /// Names of the missing required fields, empty for every other variant.
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            ValidationError::MissingFields { missing, .. } => missing,
            _ => &[],
        }
    }
}

/// Errors raised while loading or validating library configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[cfg(feature = "toml")]
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[cfg(feature = "toml")]
    #[error("Failed to serialize to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Pipeline step an external collaborator failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Recognition,
    Extraction,
    Upload,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Recognition => "Text recognition",
            Stage::Extraction => "Citation extraction",
            Stage::Upload => "Library upload",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
