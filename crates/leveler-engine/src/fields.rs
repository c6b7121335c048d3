//! Resolution of configured column names to column ids.

use leveler_core::config::ColumnsConfig;
use leveler_core::errors::{ConfigError, LevelError};
use leveler_core::traits::TableStore;
use leveler_core::types::{ColumnDef, ColumnId};

/// Column ids for the three roles, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    pub payable: ColumnId,
    pub actual: ColumnId,
    pub ot_net: ColumnId,
}

impl FieldMap {
    /// Resolve every configured name against the store's columns.
    ///
    /// Names must match exactly. A missing name is a configuration error:
    /// the run aborts before any record is read.
    pub fn resolve<S>(store: &S, columns: &ColumnsConfig) -> Result<Self, LevelError>
    where
        S: TableStore + ?Sized,
    {
        let defs = store.list_columns()?;
        Ok(Self::from_columns(&defs, columns)?)
    }

    /// Resolve against an already-fetched column list.
    pub fn from_columns(defs: &[ColumnDef], columns: &ColumnsConfig) -> Result<Self, ConfigError> {
        let find = |role: &'static str, name: &str| -> Result<ColumnId, ConfigError> {
            let mut matches = defs.iter().filter(|d| d.name == name);
            let first = matches.next().ok_or_else(|| ConfigError::UnresolvedColumn {
                role,
                name: name.to_string(),
                available: defs
                    .iter()
                    .map(|d| d.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;
            if matches.next().is_some() {
                tracing::warn!(role, name, "column name is ambiguous; using the first match");
            }
            Ok(first.id.clone())
        };

        let fields = Self {
            payable: find("payable", columns.effective_payable())?,
            actual: find("actual", columns.effective_actual())?,
            ot_net: find("ot_net", columns.effective_ot_net())?,
        };
        tracing::debug!(?fields, "columns resolved");
        Ok(fields)
    }
}
