//! Queries for base_selection: the user's current record selection per table.

use leveler_core::errors::StorageError;
use leveler_core::types::RecordId;
use rusqlite::{params, Connection};

use super::records;
use crate::to_storage_err;

/// Replace a table's selection. Every id must belong to the table.
pub fn set_selection(
    conn: &Connection,
    table_id: &str,
    record_ids: &[RecordId],
) -> Result<(), StorageError> {
    let tx = conn.unchecked_transaction().map_err(to_storage_err)?;
    tx.execute(
        "DELETE FROM base_selection WHERE table_id = ?1",
        params![table_id],
    )
    .map_err(to_storage_err)?;
    for (position, id) in record_ids.iter().enumerate() {
        if !records::record_exists(&tx, table_id, id)? {
            return Err(StorageError::RecordNotFound { id: id.to_string() });
        }
        tx.execute(
            "INSERT OR IGNORE INTO base_selection (table_id, record_id, position)
             VALUES (?1, ?2, ?3)",
            params![table_id, id.as_str(), position as i64],
        )
        .map_err(to_storage_err)?;
    }
    tx.commit().map_err(to_storage_err)
}

/// The selection in the order it was made. Empty when nothing is selected.
pub fn get_selection(conn: &Connection, table_id: &str) -> Result<Vec<RecordId>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT record_id FROM base_selection WHERE table_id = ?1 ORDER BY position",
        )
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![table_id], |row| row.get::<_, String>(0).map(RecordId::new))
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

pub fn clear_selection(conn: &Connection, table_id: &str) -> Result<(), StorageError> {
    conn.execute(
        "DELETE FROM base_selection WHERE table_id = ?1",
        params![table_id],
    )
    .map_err(to_storage_err)?;
    Ok(())
}
