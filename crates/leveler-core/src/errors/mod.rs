//! Error handling for Leveler.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod level_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::LevelerErrorCode;
pub use level_error::LevelError;
pub use storage_error::StorageError;
