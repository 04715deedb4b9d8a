//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

use super::value::ValueKind;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} is not a valid {expected} ({reason})")]
    Parse {
        key: String,
        value: String,
        expected: ValueKind,
        reason: String,
    },

    #[error("Required override file not found: {}", path.display())]
    FileMissing { path: PathBuf },

    #[error("Failed to read override file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Section {section} has no {expected} field named {field}")]
    Schema {
        section: &'static str,
        field: &'static str,
        expected: &'static str,
    },
}

impl ConfigError {
    /// Returns the environment key this error refers to, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Parse { key, .. } => Some(key),
            _ => None,
        }
    }
}
