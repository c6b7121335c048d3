//! Core value types shared across the workspace.

pub mod cell;
pub mod identifiers;
pub mod notice;
pub mod outcome;

pub use cell::CellValue;
pub use identifiers::{ColumnDef, ColumnId, RecordId};
pub use notice::{Notice, NoticeLevel};
pub use outcome::{AdjustmentResult, BatchReport, RecordFailure, SkipReason, Termination};
