//! Query modules, one per table family. All functions take a borrowed
//! connection so callers choose between the writer and the read pool.

pub mod cells;
pub mod columns;
pub mod records;
pub mod run_history;
pub mod selection;
pub mod tables;
