//! Event payload types emitted by the runners and the adjuster.

use crate::types::{AdjustmentResult, RecordId};

/// Payload for `on_batch_started`.
#[derive(Debug, Clone)]
pub struct BatchStartedEvent {
    pub total: usize,
    pub from_selection: bool,
}

/// Payload for `on_record_started`.
#[derive(Debug, Clone)]
pub struct RecordStartedEvent {
    pub record_id: RecordId,
}

/// Payload for `on_step`: fired after each write has returned.
#[derive(Debug, Clone)]
pub struct StepEvent {
    pub record_id: RecordId,
    /// 1-based step counter.
    pub step: u64,
    pub payable: f64,
    pub target: f64,
}

/// Payload for `on_record_finished`.
#[derive(Debug, Clone)]
pub struct RecordFinishedEvent {
    pub result: AdjustmentResult,
}

/// Payload for `on_record_failed`.
#[derive(Debug, Clone)]
pub struct RecordFailedEvent {
    pub record_id: RecordId,
    pub message: String,
}

/// Payload for `on_batch_complete`.
#[derive(Debug, Clone)]
pub struct BatchCompleteEvent {
    pub total: usize,
    pub changed: usize,
    pub failed: usize,
    pub duration_ms: u64,
}
