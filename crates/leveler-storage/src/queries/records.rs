//! Queries for base_records.

use leveler_core::errors::StorageError;
use leveler_core::types::RecordId;
use rusqlite::{params, Connection};

use crate::{now_secs, to_storage_err};

/// Append an empty record to a table. Returns the new record id.
pub fn insert_record(conn: &Connection, table_id: &str) -> Result<RecordId, StorageError> {
    let id = format!("rec_{}", uuid::Uuid::new_v4().simple());
    conn.execute(
        "INSERT INTO base_records (id, table_id, position, created_at)
         VALUES (?1, ?2,
                 (SELECT COALESCE(MAX(position), 0) + 1 FROM base_records WHERE table_id = ?2),
                 ?3)",
        params![id, table_id, now_secs()],
    )
    .map_err(to_storage_err)?;
    Ok(RecordId::new(id))
}

/// Every record id of a table in insertion order. No pagination.
pub fn list_records(conn: &Connection, table_id: &str) -> Result<Vec<RecordId>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT id FROM base_records WHERE table_id = ?1 ORDER BY position")
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![table_id], |row| row.get::<_, String>(0).map(RecordId::new))
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

pub fn record_exists(
    conn: &Connection,
    table_id: &str,
    record_id: &RecordId,
) -> Result<bool, StorageError> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM base_records WHERE id = ?1 AND table_id = ?2)",
        params![record_id.as_str(), table_id],
        |row| row.get(0),
    )
    .map_err(to_storage_err)
}

/// Delete a record and, through cascades, its cells and selection entry.
pub fn delete_record(
    conn: &Connection,
    table_id: &str,
    record_id: &RecordId,
) -> Result<(), StorageError> {
    let affected = conn
        .execute(
            "DELETE FROM base_records WHERE id = ?1 AND table_id = ?2",
            params![record_id.as_str(), table_id],
        )
        .map_err(to_storage_err)?;
    if affected == 0 {
        return Err(StorageError::RecordNotFound {
            id: record_id.to_string(),
        });
    }
    Ok(())
}
