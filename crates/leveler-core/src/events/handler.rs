//! AdjustmentEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing adjustment runs.
///
/// Handlers override only the events they care about. `Send + Sync` so a
/// handler can be shared behind an `Arc`.
pub trait AdjustmentEventHandler: Send + Sync {
    // ---- Batch Lifecycle ----
    fn on_batch_started(&self, _event: &BatchStartedEvent) {}
    fn on_batch_complete(&self, _event: &BatchCompleteEvent) {}

    // ---- Record Lifecycle ----
    fn on_record_started(&self, _event: &RecordStartedEvent) {}
    fn on_step(&self, _event: &StepEvent) {}
    fn on_record_finished(&self, _event: &RecordFinishedEvent) {}
    fn on_record_failed(&self, _event: &RecordFailedEvent) {}
}
