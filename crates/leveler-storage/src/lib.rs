//! # leveler-storage
//!
//! SQLite-backed base: tables, columns, records and dynamically typed cells,
//! plus the run history log. [`SqliteTableStore`] exposes one table through
//! the `TableStore` trait.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

pub use connection::DatabaseManager;
pub use store::SqliteTableStore;

use leveler_core::errors::StorageError;

/// Map a rusqlite error into a `StorageError`, surfacing busy/locked as `DbBusy`.
pub(crate) fn to_storage_err(e: rusqlite::Error) -> StorageError {
    match e.sqlite_error_code() {
        Some(rusqlite::ErrorCode::DatabaseBusy) | Some(rusqlite::ErrorCode::DatabaseLocked) => {
            StorageError::DbBusy
        }
        _ => StorageError::SqliteError {
            message: e.to_string(),
        },
    }
}

/// Current unix time in seconds.
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}
