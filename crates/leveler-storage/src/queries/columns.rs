//! Queries for base_columns.

use leveler_core::errors::StorageError;
use leveler_core::types::{ColumnDef, ColumnId};
use rusqlite::{params, Connection};

use crate::to_storage_err;

/// Append a column to a table. Returns the new column id.
pub fn add_column(conn: &Connection, table_id: &str, name: &str) -> Result<ColumnId, StorageError> {
    let id = format!("col_{}", uuid::Uuid::new_v4().simple());
    conn.execute(
        "INSERT INTO base_columns (id, table_id, name, position)
         VALUES (?1, ?2, ?3,
                 (SELECT COALESCE(MAX(position), 0) + 1 FROM base_columns WHERE table_id = ?2))",
        params![id, table_id, name],
    )
    .map_err(to_storage_err)?;
    Ok(ColumnId::new(id))
}

/// All columns of a table in display order.
pub fn list_columns(conn: &Connection, table_id: &str) -> Result<Vec<ColumnDef>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, name FROM base_columns WHERE table_id = ?1 ORDER BY position",
        )
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![table_id], |row| {
            Ok(ColumnDef {
                id: ColumnId::new(row.get::<_, String>(0)?),
                name: row.get(1)?,
            })
        })
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

pub fn column_exists(
    conn: &Connection,
    table_id: &str,
    column_id: &ColumnId,
) -> Result<bool, StorageError> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM base_columns WHERE id = ?1 AND table_id = ?2)",
        params![column_id.as_str(), table_id],
        |row| row.get(0),
    )
    .map_err(to_storage_err)
}
