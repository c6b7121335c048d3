//! Shared fixtures: an in-memory `TableStore` that records every read and
//! write, and a notifier that keeps what it was sent.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use leveler_core::errors::StorageError;
use leveler_core::traits::{Notifier, TableStore};
use leveler_core::types::{ColumnDef, ColumnId, Notice, RecordId};
use serde_json::Value;

pub const PAYABLE: &str = "Payable";
pub const ACTUAL: &str = "Actual";
pub const OT_NET: &str = "OT Net";

pub fn col(name: &str) -> ColumnId {
    ColumnId::new(format!("col:{name}"))
}

#[derive(Default)]
struct Inner {
    records: Vec<RecordId>,
    cells: HashMap<(RecordId, ColumnId), Value>,
    selection: Option<Vec<RecordId>>,
    reads: Vec<(RecordId, ColumnId)>,
    writes: Vec<(RecordId, ColumnId, f64)>,
    failing_reads: HashSet<RecordId>,
    failing_write_after: HashMap<RecordId, usize>,
    selection_errors: bool,
}

pub struct MemoryStore {
    columns: Vec<ColumnDef>,
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_columns(&[PAYABLE, ACTUAL, OT_NET])
    }

    pub fn with_columns(names: &[&str]) -> Self {
        Self {
            columns: names.iter().map(|n| ColumnDef::new(col(n), *n)).collect(),
            inner: Mutex::new(Inner {
                selection: Some(Vec::new()),
                ..Inner::default()
            }),
        }
    }

    /// Add a record with raw payable / actual / ot_net values.
    pub fn add(&self, id: &str, payable: Value, actual: Value, ot_net: Value) -> RecordId {
        let id = RecordId::new(id);
        let mut inner = self.inner.lock().unwrap();
        inner.records.push(id.clone());
        inner.cells.insert((id.clone(), col(PAYABLE)), payable);
        inner.cells.insert((id.clone(), col(ACTUAL)), actual);
        inner.cells.insert((id.clone(), col(OT_NET)), ot_net);
        id
    }

    pub fn select(&self, ids: &[&RecordId]) {
        self.inner.lock().unwrap().selection = Some(ids.iter().map(|i| (*i).clone()).collect());
    }

    pub fn hide_selection(&self) {
        self.inner.lock().unwrap().selection = None;
    }

    pub fn fail_selection(&self) {
        self.inner.lock().unwrap().selection_errors = true;
    }

    /// Every read of this record fails.
    pub fn fail_reads(&self, id: &RecordId) {
        self.inner.lock().unwrap().failing_reads.insert(id.clone());
    }

    /// Writes to this record fail once `n` have succeeded.
    pub fn fail_writes_after(&self, id: &RecordId, n: usize) {
        self.inner
            .lock()
            .unwrap()
            .failing_write_after
            .insert(id.clone(), n);
    }

    pub fn value(&self, id: &RecordId, column: &str) -> Value {
        self.inner
            .lock()
            .unwrap()
            .cells
            .get(&(id.clone(), col(column)))
            .cloned()
            .unwrap_or(Value::Null)
    }

    pub fn writes_for(&self, id: &RecordId) -> Vec<f64> {
        self.inner
            .lock()
            .unwrap()
            .writes
            .iter()
            .filter(|(r, _, _)| r == id)
            .map(|(_, _, v)| *v)
            .collect()
    }

    pub fn total_writes(&self) -> usize {
        self.inner.lock().unwrap().writes.len()
    }

    pub fn reads_for(&self, id: &RecordId) -> Vec<ColumnId> {
        self.inner
            .lock()
            .unwrap()
            .reads
            .iter()
            .filter(|(r, _)| r == id)
            .map(|(_, c)| c.clone())
            .collect()
    }

    pub fn total_reads(&self) -> usize {
        self.inner.lock().unwrap().reads.len()
    }
}

impl TableStore for MemoryStore {
    fn list_columns(&self) -> Result<Vec<ColumnDef>, StorageError> {
        Ok(self.columns.clone())
    }

    fn read_cell(&self, record: &RecordId, column: &ColumnId) -> Result<Value, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        inner.reads.push((record.clone(), column.clone()));
        if inner.failing_reads.contains(record) {
            return Err(StorageError::Unavailable {
                message: format!("read of {record} failed"),
            });
        }
        if !inner.records.contains(record) {
            return Err(StorageError::RecordNotFound {
                id: record.to_string(),
            });
        }
        Ok(inner
            .cells
            .get(&(record.clone(), column.clone()))
            .cloned()
            .unwrap_or(Value::Null))
    }

    fn write_cell(
        &self,
        record: &RecordId,
        column: &ColumnId,
        value: f64,
    ) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(limit) = inner.failing_write_after.get(record).copied() {
            let done = inner.writes.iter().filter(|(r, _, _)| r == record).count();
            if done >= limit {
                return Err(StorageError::Unavailable {
                    message: format!("write to {record} failed"),
                });
            }
        }
        inner.writes.push((record.clone(), column.clone(), value));
        inner
            .cells
            .insert((record.clone(), column.clone()), Value::from(value));
        Ok(())
    }

    fn list_records(&self) -> Result<Vec<RecordId>, StorageError> {
        Ok(self.inner.lock().unwrap().records.clone())
    }

    fn selected_records(&self) -> Result<Option<Vec<RecordId>>, StorageError> {
        let inner = self.inner.lock().unwrap();
        if inner.selection_errors {
            return Err(StorageError::Unavailable {
                message: "selection not permitted".to_string(),
            });
        }
        Ok(inner.selection.clone())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
