//! Configuration errors.

use super::error_code::{self, LevelerErrorCode};

/// Errors that can occur during configuration loading, validation, and
/// column resolution. All of them are fatal to a run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Column '{name}' configured as {role} does not exist (available: {available})")]
    UnresolvedColumn {
        role: &'static str,
        name: String,
        available: String,
    },
}

impl LevelerErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnresolvedColumn { .. } => error_code::COLUMN_UNRESOLVED,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
