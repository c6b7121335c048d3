//! Configuration system for Leveler.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod adjust_config;
pub mod columns_config;
pub mod leveler_config;
pub mod storage_config;

pub use adjust_config::AdjustConfig;
pub use columns_config::ColumnsConfig;
pub use leveler_config::{CliOverrides, LevelerConfig};
pub use storage_config::StorageConfig;
