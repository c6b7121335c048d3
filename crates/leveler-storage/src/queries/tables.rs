//! Queries for base_tables.

use leveler_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

use crate::{now_secs, to_storage_err};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

/// Create a table. Names are unique across the base.
pub fn create_table(conn: &Connection, name: &str) -> Result<String, StorageError> {
    if find_table(conn, name)?.is_some() {
        return Err(StorageError::TableExists {
            name: name.to_string(),
        });
    }
    let id = format!("tbl_{}", uuid::Uuid::new_v4().simple());
    conn.execute(
        "INSERT INTO base_tables (id, name, created_at) VALUES (?1, ?2, ?3)",
        params![id, name, now_secs()],
    )
    .map_err(to_storage_err)?;
    Ok(id)
}

/// Look up a table id by exact name.
pub fn find_table(conn: &Connection, name: &str) -> Result<Option<String>, StorageError> {
    conn.query_row(
        "SELECT id FROM base_tables WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )
    .optional()
    .map_err(to_storage_err)
}

pub fn list_tables(conn: &Connection) -> Result<Vec<TableRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT id, name, created_at FROM base_tables ORDER BY name")
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(TableRow {
                id: row.get(0)?,
                name: row.get(1)?,
                created_at: row.get(2)?,
            })
        })
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}
