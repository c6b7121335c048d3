//! Queries for run_history, the append-only log of batch runs.

use leveler_core::errors::StorageError;
use rusqlite::{params, Connection};

use crate::to_storage_err;

/// A run history record.
#[derive(Debug, Clone)]
pub struct RunHistoryRow {
    pub id: i64,
    pub table_name: String,
    pub mode: String,
    pub started_at: i64,
    pub completed_at: Option<i64>,
    pub total: Option<i64>,
    pub changed: Option<i64>,
    pub failed: Option<i64>,
    pub duration_ms: Option<i64>,
    pub status: String,
    pub error: Option<String>,
}

/// Completion figures for a run.
#[derive(Debug, Clone, Default)]
pub struct RunCompletion<'a> {
    pub completed_at: i64,
    pub total: i64,
    pub changed: i64,
    pub failed: i64,
    pub duration_ms: i64,
    pub status: &'a str,
    pub error: Option<&'a str>,
}

/// Insert a new run record (status = 'running'). Returns the row id.
pub fn insert_run_start(
    conn: &Connection,
    started_at: i64,
    table_name: &str,
    mode: &str,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO run_history (table_name, mode, started_at, status)
         VALUES (?1, ?2, ?3, 'running')",
        params![table_name, mode, started_at],
    )
    .map_err(to_storage_err)?;
    Ok(conn.last_insert_rowid())
}

/// Update a run record with completion data.
pub fn update_run_complete(
    conn: &Connection,
    id: i64,
    completion: &RunCompletion<'_>,
) -> Result<(), StorageError> {
    conn.execute(
        "UPDATE run_history SET
            completed_at = ?1, total = ?2, changed = ?3, failed = ?4,
            duration_ms = ?5, status = ?6, error = ?7
         WHERE id = ?8",
        params![
            completion.completed_at,
            completion.total,
            completion.changed,
            completion.failed,
            completion.duration_ms,
            completion.status,
            completion.error,
            id
        ],
    )
    .map_err(to_storage_err)?;
    Ok(())
}

/// Most recent runs first.
pub fn query_recent(conn: &Connection, limit: usize) -> Result<Vec<RunHistoryRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, table_name, mode, started_at, completed_at, total, changed, failed,
                    duration_ms, status, error
             FROM run_history ORDER BY started_at DESC, id DESC LIMIT ?1",
        )
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(RunHistoryRow {
                id: row.get(0)?,
                table_name: row.get(1)?,
                mode: row.get(2)?,
                started_at: row.get(3)?,
                completed_at: row.get(4)?,
                total: row.get(5)?,
                changed: row.get(6)?,
                failed: row.get(7)?,
                duration_ms: row.get(8)?,
                status: row.get(9)?,
                error: row.get(10)?,
            })
        })
        .map_err(to_storage_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

/// Count total run history entries.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM run_history", [], |row| row.get(0))
        .map_err(to_storage_err)
}
