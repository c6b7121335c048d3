//! Run-level error aggregating subsystem errors.

use super::error_code::LevelerErrorCode;
use super::{ConfigError, StorageError};

/// Errors that abort a whole run (batch or single).
///
/// Per-record store failures inside a batch do not surface here; the batch
/// runner captures them as `RecordFailure`s.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl LevelError {
    /// True when the run was aborted by configuration rather than I/O.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl LevelerErrorCode for LevelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
        }
    }
}
