//! Top-level Leveler configuration with layered resolution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AdjustConfig, ColumnsConfig, StorageConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`LEVELER_*`)
/// 3. Project config (`leveler.toml` in the working root, or an explicit path)
/// 4. User config (`~/.leveler/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LevelerConfig {
    pub columns: ColumnsConfig,
    pub adjust: AdjustConfig,
    pub storage: StorageConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db_path: Option<String>,
    pub table: Option<String>,
    pub step_delay_ms: Option<u64>,
    pub hard_cap: Option<u64>,
}

impl LevelerConfig {
    /// Load configuration with layered resolution.
    ///
    /// When `explicit` is given it replaces the project config lookup and
    /// must exist.
    pub fn load(
        root: &Path,
        explicit: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Layer 3: project config
        match explicit {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &LevelerConfig) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (role, name) in config.columns.roles() {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("columns.{role}"),
                    message: "must not be empty".to_string(),
                });
            }
            if !seen.insert(name) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("columns.{role}"),
                    message: format!("'{name}' is already used by another role"),
                });
            }
        }
        if config.adjust.effective_hard_cap() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "adjust.hard_cap".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.storage.effective_table().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "storage.table".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.leveler/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".leveler").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut LevelerConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: LevelerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut LevelerConfig, other: &LevelerConfig) {
        // Columns
        if other.columns.payable.is_some() {
            base.columns.payable = other.columns.payable.clone();
        }
        if other.columns.actual.is_some() {
            base.columns.actual = other.columns.actual.clone();
        }
        if other.columns.ot_net.is_some() {
            base.columns.ot_net = other.columns.ot_net.clone();
        }

        // Adjust
        if other.adjust.step_delay_ms.is_some() {
            base.adjust.step_delay_ms = other.adjust.step_delay_ms;
        }
        if other.adjust.hard_cap.is_some() {
            base.adjust.hard_cap = other.adjust.hard_cap;
        }

        // Storage
        if other.storage.db_path.is_some() {
            base.storage.db_path = other.storage.db_path.clone();
        }
        if other.storage.table.is_some() {
            base.storage.table = other.storage.table.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `LEVELER_PAYABLE_COLUMN`, `LEVELER_HARD_CAP`, etc.
    pub fn apply_env_overrides(config: &mut LevelerConfig) {
        Self::apply_env_overrides_from(config, |key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    /// Unparsable numeric values are ignored.
    pub fn apply_env_overrides_from<F>(config: &mut LevelerConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("LEVELER_PAYABLE_COLUMN") {
            config.columns.payable = Some(val);
        }
        if let Some(val) = lookup("LEVELER_ACTUAL_COLUMN") {
            config.columns.actual = Some(val);
        }
        if let Some(val) = lookup("LEVELER_OT_NET_COLUMN") {
            config.columns.ot_net = Some(val);
        }
        if let Some(val) = lookup("LEVELER_STEP_DELAY_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.adjust.step_delay_ms = Some(v);
            }
        }
        if let Some(val) = lookup("LEVELER_HARD_CAP") {
            if let Ok(v) = val.parse::<u64>() {
                config.adjust.hard_cap = Some(v);
            }
        }
        if let Some(val) = lookup("LEVELER_DB_PATH") {
            config.storage.db_path = Some(val);
        }
        if let Some(val) = lookup("LEVELER_TABLE") {
            config.storage.table = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut LevelerConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.db_path {
            config.storage.db_path = Some(v.clone());
        }
        if let Some(ref v) = cli.table {
            config.storage.table = Some(v.clone());
        }
        if let Some(v) = cli.step_delay_ms {
            config.adjust.step_delay_ms = Some(v);
        }
        if let Some(v) = cli.hard_cap {
            config.adjust.hard_cap = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
