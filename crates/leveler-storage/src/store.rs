//! SqliteTableStore: one table of the SQLite base behind `TableStore`.

use std::sync::Arc;

use leveler_core::errors::StorageError;
use leveler_core::traits::TableStore;
use leveler_core::types::{ColumnDef, ColumnId, RecordId};
use serde_json::Value;

use crate::connection::DatabaseManager;
use crate::queries::{cells, columns, records, selection, tables};

/// A `TableStore` scoped to one named table.
///
/// Reads go through the read pool, writes through the serialized writer.
/// Each write is an autocommit statement, so it is visible to the next read.
pub struct SqliteTableStore {
    db: Arc<DatabaseManager>,
    table_id: String,
    table_name: String,
    expose_selection: bool,
}

impl SqliteTableStore {
    /// Open an existing table by name.
    pub fn open(db: Arc<DatabaseManager>, table_name: &str) -> Result<Self, StorageError> {
        let table_id = db
            .with_reader(|conn| tables::find_table(conn, table_name))?
            .ok_or_else(|| StorageError::TableNotFound {
                name: table_name.to_string(),
            })?;
        Ok(Self {
            db,
            table_id,
            table_name: table_name.to_string(),
            expose_selection: true,
        })
    }

    /// Create a table with the given columns and open it.
    pub fn create(
        db: Arc<DatabaseManager>,
        table_name: &str,
        column_names: &[&str],
    ) -> Result<Self, StorageError> {
        let table_id = db.with_writer(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(crate::to_storage_err)?;
            let table_id = tables::create_table(&tx, table_name)?;
            for name in column_names {
                columns::add_column(&tx, &table_id, name)?;
            }
            tx.commit().map_err(crate::to_storage_err)?;
            Ok(table_id)
        })?;
        tracing::info!(table = table_name, columns = column_names.len(), "table created");
        Ok(Self {
            db,
            table_id,
            table_name: table_name.to_string(),
            expose_selection: true,
        })
    }

    /// Behave like a host that does not expose a selection:
    /// `selected_records` returns `None`.
    pub fn without_selection(mut self) -> Self {
        self.expose_selection = false;
        self
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn database(&self) -> &Arc<DatabaseManager> {
        &self.db
    }

    // --- Editing helpers used by the CLI and tests ---

    pub fn add_column(&self, name: &str) -> Result<ColumnId, StorageError> {
        self.db
            .with_writer(|conn| columns::add_column(conn, &self.table_id, name))
    }

    /// Insert a record with the given raw values, keyed by column name.
    /// Unknown column names are rejected before anything is written.
    pub fn insert_record(&self, values: &[(&str, Value)]) -> Result<RecordId, StorageError> {
        self.db.with_writer(|conn| {
            let defs = columns::list_columns(conn, &self.table_id)?;
            let mut resolved = Vec::with_capacity(values.len());
            for (name, value) in values {
                let def = defs.iter().find(|d| d.name == *name).ok_or_else(|| {
                    StorageError::ColumnNotFound {
                        id: (*name).to_string(),
                    }
                })?;
                resolved.push((def.id.clone(), value));
            }

            let tx = conn
                .unchecked_transaction()
                .map_err(crate::to_storage_err)?;
            let record_id = records::insert_record(&tx, &self.table_id)?;
            for (column_id, value) in resolved {
                cells::write_raw(&tx, &self.table_id, &record_id, &column_id, value)?;
            }
            tx.commit().map_err(crate::to_storage_err)?;
            Ok(record_id)
        })
    }

    pub fn write_raw(
        &self,
        record: &RecordId,
        column: &ColumnId,
        value: &Value,
    ) -> Result<(), StorageError> {
        self.db
            .with_writer(|conn| cells::write_raw(conn, &self.table_id, record, column, value))
    }

    pub fn delete_record(&self, record: &RecordId) -> Result<(), StorageError> {
        self.db
            .with_writer(|conn| records::delete_record(conn, &self.table_id, record))
    }

    pub fn set_selection(&self, ids: &[RecordId]) -> Result<(), StorageError> {
        self.db
            .with_writer(|conn| selection::set_selection(conn, &self.table_id, ids))
    }

    pub fn clear_selection(&self) -> Result<(), StorageError> {
        self.db
            .with_writer(|conn| selection::clear_selection(conn, &self.table_id))
    }

    /// A record's full row as `(column, raw value)` pairs.
    pub fn read_row(&self, record: &RecordId) -> Result<Vec<(ColumnDef, Value)>, StorageError> {
        self.db
            .with_reader(|conn| cells::read_row(conn, &self.table_id, record))
    }
}

impl TableStore for SqliteTableStore {
    fn list_columns(&self) -> Result<Vec<ColumnDef>, StorageError> {
        self.db
            .with_reader(|conn| columns::list_columns(conn, &self.table_id))
    }

    fn read_cell(&self, record: &RecordId, column: &ColumnId) -> Result<Value, StorageError> {
        self.db
            .with_reader(|conn| cells::read_cell(conn, &self.table_id, record, column))
    }

    fn write_cell(
        &self,
        record: &RecordId,
        column: &ColumnId,
        value: f64,
    ) -> Result<(), StorageError> {
        self.db
            .with_writer(|conn| cells::write_number(conn, &self.table_id, record, column, value))
    }

    fn list_records(&self) -> Result<Vec<RecordId>, StorageError> {
        self.db
            .with_reader(|conn| records::list_records(conn, &self.table_id))
    }

    fn selected_records(&self) -> Result<Option<Vec<RecordId>>, StorageError> {
        if !self.expose_selection {
            return Ok(None);
        }
        self.db
            .with_reader(|conn| selection::get_selection(conn, &self.table_id))
            .map(Some)
    }
}
