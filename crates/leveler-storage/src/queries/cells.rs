//! Queries for base_cells.
//!
//! Cells keep SQLite's dynamic typing, and the storage class records the JSON
//! type so a value reads back as it was written: integers and reals are
//! numbers, text is always a string, booleans, objects and arrays are stored
//! as JSON in a BLOB, NULL is null.

use leveler_core::errors::StorageError;
use leveler_core::types::{ColumnDef, ColumnId, RecordId};
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{Number, Value};

use super::{columns, records};
use crate::{now_secs, to_storage_err};

/// Largest integer an f64 represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Read one cell. A cell that was never written reads as null.
pub fn read_cell(
    conn: &Connection,
    table_id: &str,
    record_id: &RecordId,
    column_id: &ColumnId,
) -> Result<Value, StorageError> {
    ensure_cell_target(conn, table_id, record_id, column_id)?;
    let mut stmt = conn
        .prepare_cached("SELECT value FROM base_cells WHERE record_id = ?1 AND column_id = ?2")
        .map_err(to_storage_err)?;
    let value = stmt
        .query_row(params![record_id.as_str(), column_id.as_str()], |row| {
            Ok(sql_to_json(row.get_ref(0)?))
        })
        .optional()
        .map_err(to_storage_err)?;
    Ok(value.unwrap_or(Value::Null))
}

/// Write a number. Integral values are stored as INTEGER, others as REAL.
pub fn write_number(
    conn: &Connection,
    table_id: &str,
    record_id: &RecordId,
    column_id: &ColumnId,
    value: f64,
) -> Result<(), StorageError> {
    ensure_cell_target(conn, table_id, record_id, column_id)?;
    upsert(conn, record_id, column_id, number_to_sql(value))
}

/// Write an arbitrary JSON value (imports and fixtures).
pub fn write_raw(
    conn: &Connection,
    table_id: &str,
    record_id: &RecordId,
    column_id: &ColumnId,
    value: &Value,
) -> Result<(), StorageError> {
    ensure_cell_target(conn, table_id, record_id, column_id)?;
    upsert(conn, record_id, column_id, json_to_sql(value))
}

/// Every column of a record paired with its raw value, in column order.
pub fn read_row(
    conn: &Connection,
    table_id: &str,
    record_id: &RecordId,
) -> Result<Vec<(ColumnDef, Value)>, StorageError> {
    if !records::record_exists(conn, table_id, record_id)? {
        return Err(StorageError::RecordNotFound {
            id: record_id.to_string(),
        });
    }
    let mut stmt = conn
        .prepare_cached(
            "SELECT c.id, c.name, cell.value
             FROM base_columns c
             LEFT JOIN base_cells cell ON cell.column_id = c.id AND cell.record_id = ?2
             WHERE c.table_id = ?1
             ORDER BY c.position",
        )
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map(params![table_id, record_id.as_str()], |row| {
            Ok((
                ColumnDef {
                    id: ColumnId::new(row.get::<_, String>(0)?),
                    name: row.get(1)?,
                },
                sql_to_json(row.get_ref(2)?),
            ))
        })
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

fn ensure_cell_target(
    conn: &Connection,
    table_id: &str,
    record_id: &RecordId,
    column_id: &ColumnId,
) -> Result<(), StorageError> {
    if !records::record_exists(conn, table_id, record_id)? {
        return Err(StorageError::RecordNotFound {
            id: record_id.to_string(),
        });
    }
    if !columns::column_exists(conn, table_id, column_id)? {
        return Err(StorageError::ColumnNotFound {
            id: column_id.to_string(),
        });
    }
    Ok(())
}

fn upsert(
    conn: &Connection,
    record_id: &RecordId,
    column_id: &ColumnId,
    value: SqlValue,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO base_cells (record_id, column_id, value, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(record_id, column_id)
         DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![record_id.as_str(), column_id.as_str(), value, now_secs()],
    )
    .map_err(to_storage_err)?;
    Ok(())
}

/// Convert a stored SQLite value into JSON.
pub fn sql_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        // Blobs only come from json_to_sql; anything unparsable reads as null.
        ValueRef::Blob(bytes) => serde_json::from_slice(bytes).unwrap_or(Value::Null),
    }
}

/// Convert JSON into the SQLite value to store.
pub fn json_to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => n.as_f64().map_or(SqlValue::Null, number_to_sql),
        },
        Value::String(s) => SqlValue::Text(s.clone()),
        Value::Bool(_) | Value::Object(_) | Value::Array(_) => {
            SqlValue::Blob(value.to_string().into_bytes())
        }
    }
}

fn number_to_sql(value: f64) -> SqlValue {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        SqlValue::Integer(value as i64)
    } else {
        SqlValue::Real(value)
    }
}
