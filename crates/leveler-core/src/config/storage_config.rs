//! Location of the SQLite base and the active table.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DB_PATH, DEFAULT_TABLE};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file. Default: "leveler.db".
    pub db_path: Option<String>,
    /// Active table name. Default: "Sheet1".
    pub table: Option<String>,
}

impl StorageConfig {
    pub fn effective_db_path(&self) -> &str {
        self.db_path.as_deref().unwrap_or(DEFAULT_DB_PATH)
    }

    pub fn effective_table(&self) -> &str {
        self.table.as_deref().unwrap_or(DEFAULT_TABLE)
    }
}
