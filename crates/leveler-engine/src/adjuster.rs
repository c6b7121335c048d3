//! RecordAdjuster: drives one record's payable toward its actual, one unit
//! per step, writing after every step.

use leveler_core::config::AdjustConfig;
use leveler_core::errors::StorageError;
use leveler_core::events::types::StepEvent;
use leveler_core::events::EventDispatcher;
use leveler_core::traits::TableStore;
use leveler_core::types::{
    AdjustmentResult, CellValue, ColumnId, RecordId, SkipReason, Termination,
};
use tracing::{debug, info_span, warn};

use crate::fields::FieldMap;

/// Per-record convergence loop over a [`TableStore`].
///
/// Each call to [`adjust`](Self::adjust) is independent: all state is read
/// from and written to the store.
pub struct RecordAdjuster<'a, S: TableStore + ?Sized> {
    store: &'a S,
    fields: &'a FieldMap,
    config: &'a AdjustConfig,
    events: Option<&'a EventDispatcher>,
}

impl<'a, S: TableStore + ?Sized> RecordAdjuster<'a, S> {
    pub fn new(store: &'a S, fields: &'a FieldMap, config: &'a AdjustConfig) -> Self {
        Self {
            store,
            fields,
            config,
            events: None,
        }
    }

    /// Attach an event dispatcher that receives one `on_step` per write.
    pub fn with_events(mut self, events: &'a EventDispatcher) -> Self {
        self.events = Some(events);
        self
    }

    /// Adjust a single record.
    ///
    /// Skips return `Ok` with a reason. Store failures are returned as `Err`
    /// and may leave payable part-way to its target.
    pub fn adjust(&self, record_id: &RecordId) -> Result<AdjustmentResult, StorageError> {
        let _span = info_span!("leveler.record", record_id = %record_id).entered();

        // Gate first: when ot_net is empty nothing else is read.
        if self.read(record_id, &self.fields.ot_net)?.is_empty() {
            debug!("ot_net empty; skipping");
            return Ok(AdjustmentResult::skipped(
                record_id.clone(),
                SkipReason::OtNetEmpty,
                None,
            ));
        }

        let payable = self.read(record_id, &self.fields.payable)?.as_number();
        let actual = self.read(record_id, &self.fields.actual)?.as_number();
        let (mut payable, target) = match (payable, actual) {
            (Some(p), Some(a)) => (p, a),
            (p, _) => {
                debug!("payable or actual empty; skipping");
                return Ok(AdjustmentResult::skipped(
                    record_id.clone(),
                    SkipReason::PayableOrActualNull,
                    p,
                ));
            }
        };

        if payable == target {
            debug!(payable, "already equal; skipping");
            return Ok(AdjustmentResult::skipped(
                record_id.clone(),
                SkipReason::AlreadyEqual,
                Some(payable),
            ));
        }

        let diff = target - payable;
        let step = if diff > 0.0 { 1.0 } else { -1.0 };
        let limit = self.config.step_limit(diff);
        let delay = self.config.effective_step_delay();
        debug!(payable, target, step, limit, "stepping");

        let mut steps: u64 = 0;
        while payable != target && steps < limit {
            payable += step;
            self.store
                .write_cell(record_id, &self.fields.payable, payable)?;
            steps += 1;

            debug!(step = steps, payable, "step written");
            if let Some(events) = self.events {
                events.emit_step(&StepEvent {
                    record_id: record_id.clone(),
                    step: steps,
                    payable,
                    target,
                });
            }

            if let Some(pause) = delay {
                if payable != target && steps < limit {
                    std::thread::sleep(pause);
                }
            }
        }

        let termination = if payable == target {
            Termination::Matched
        } else {
            warn!(payable, target, steps, limit, "step limit reached before match");
            Termination::MaxLoop
        };
        Ok(AdjustmentResult::stepped(
            record_id.clone(),
            payable,
            steps,
            termination,
        ))
    }

    fn read(&self, record_id: &RecordId, column: &ColumnId) -> Result<CellValue, StorageError> {
        let raw = self.store.read_cell(record_id, column)?;
        Ok(CellValue::coerce(&raw))
    }
}
