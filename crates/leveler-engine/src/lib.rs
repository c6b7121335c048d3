//! # leveler-engine
//!
//! Moves a record's payable field one unit per step toward its actual field,
//! persisting after every step.
//!
//! - [`RecordAdjuster`]: the per-record convergence loop.
//! - [`BatchRunner`]: selection-or-all entry point with per-record failure isolation.
//! - [`SingleRunner`]: one explicitly supplied record.
//! - [`FieldMap`]: column display name to column id resolution.

pub mod adjuster;
pub mod batch;
pub mod fields;
pub mod notify;
pub mod single;

pub use adjuster::RecordAdjuster;
pub use batch::BatchRunner;
pub use fields::FieldMap;
pub use notify::TracingNotifier;
pub use single::SingleRunner;
