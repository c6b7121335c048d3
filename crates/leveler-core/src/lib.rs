//! # leveler-core
//!
//! Foundation crate for the Leveler row-leveling engine.
//! Defines the shared types, the store/notifier traits, errors, config,
//! events, tracing setup, and constants. Every other crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::LevelerConfig;
pub use errors::{ConfigError, LevelError, StorageError};
pub use traits::{Notifier, TableStore};
pub use types::{
    AdjustmentResult, BatchReport, CellValue, ColumnDef, ColumnId, Notice, NoticeLevel,
    RecordFailure, RecordId, SkipReason, Termination,
};
