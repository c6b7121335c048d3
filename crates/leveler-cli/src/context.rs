//! Resolved configuration plus lazily opened storage, shared by every command.

use std::path::Path;
use std::sync::Arc;

use leveler_core::config::{CliOverrides, LevelerConfig};
use leveler_storage::{DatabaseManager, SqliteTableStore};

use crate::error::CliError;

pub struct Context {
    pub config: LevelerConfig,
}

impl Context {
    /// Resolve configuration from the working directory, `explicit` config
    /// file, environment and flags.
    pub fn load(explicit: Option<&Path>, overrides: &CliOverrides) -> Result<Self, CliError> {
        let root = std::env::current_dir()?;
        let config = LevelerConfig::load(&root, explicit, Some(overrides))?;
        Ok(Self { config })
    }

    pub fn table_name(&self) -> &str {
        self.config.storage.effective_table()
    }

    /// Open (creating and migrating if needed) the configured database.
    pub fn database(&self) -> Result<Arc<DatabaseManager>, CliError> {
        let path = Path::new(self.config.storage.effective_db_path());
        Ok(Arc::new(DatabaseManager::open(path)?))
    }

    /// Open the active table.
    pub fn table(&self) -> Result<SqliteTableStore, CliError> {
        Ok(SqliteTableStore::open(self.database()?, self.table_name())?)
    }
}
