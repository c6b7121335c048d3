use serde_json::Value;

use crate::errors::StorageError;
use crate::types::{ColumnDef, ColumnId, RecordId};

/// Field discovery + cell I/O + record enumeration + selection, scoped to the
/// active table.
///
/// Reads return the raw value as the store holds it; callers coerce with
/// `CellValue::coerce`. Writes are assumed durable once the call returns.
pub trait TableStore: Send + Sync {
    // --- Fields ---
    fn list_columns(&self) -> Result<Vec<ColumnDef>, StorageError>;

    // --- Cells ---
    fn read_cell(&self, record: &RecordId, column: &ColumnId) -> Result<Value, StorageError>;
    fn write_cell(&self, record: &RecordId, column: &ColumnId, value: f64)
        -> Result<(), StorageError>;

    // --- Records ---
    fn list_records(&self) -> Result<Vec<RecordId>, StorageError>;

    /// The user's current selection. `None` when the host has no notion of a
    /// selection or does not permit reading it.
    fn selected_records(&self) -> Result<Option<Vec<RecordId>>, StorageError>;
}

impl<T: TableStore + ?Sized> TableStore for &T {
    fn list_columns(&self) -> Result<Vec<ColumnDef>, StorageError> {
        (**self).list_columns()
    }

    fn read_cell(&self, record: &RecordId, column: &ColumnId) -> Result<Value, StorageError> {
        (**self).read_cell(record, column)
    }

    fn write_cell(
        &self,
        record: &RecordId,
        column: &ColumnId,
        value: f64,
    ) -> Result<(), StorageError> {
        (**self).write_cell(record, column, value)
    }

    fn list_records(&self) -> Result<Vec<RecordId>, StorageError> {
        (**self).list_records()
    }

    fn selected_records(&self) -> Result<Option<Vec<RecordId>>, StorageError> {
        (**self).selected_records()
    }
}
