//! CLI error type and exit code mapping.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Runtime or storage error |
//! | 2 | Configuration error (bad config file, unresolved column) |

use leveler_core::errors::{ConfigError, LevelError, LevelerErrorCode, StorageError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", .0.coded_string())]
    Config(#[from] ConfigError),

    #[error("{}", .0.coded_string())]
    Storage(#[from] StorageError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<LevelError> for CliError {
    fn from(e: LevelError) -> Self {
        match e {
            LevelError::Config(c) => Self::Config(c),
            LevelError::Storage(s) => Self::Storage(s),
        }
    }
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Storage(_) | Self::InvalidInput(_) | Self::Io(_) | Self::Serialization(_) => 1,
        }
    }
}
