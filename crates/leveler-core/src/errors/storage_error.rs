//! Storage-layer errors raised by `TableStore` implementations.

use super::error_code::{self, LevelerErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("database busy")]
    DbBusy,

    #[error("table not found: {name}")]
    TableNotFound { name: String },

    #[error("table already exists: {name}")]
    TableExists { name: String },

    #[error("record not found: {id}")]
    RecordNotFound { id: String },

    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

impl LevelerErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } | Self::Unavailable { .. } => error_code::STORAGE_ERROR,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::DbBusy => error_code::DB_BUSY,
            Self::TableNotFound { .. }
            | Self::RecordNotFound { .. }
            | Self::ColumnNotFound { .. } => error_code::NOT_FOUND,
            Self::TableExists { .. } => error_code::ALREADY_EXISTS,
        }
    }
}
