//! BatchRunner: adjusts the current selection, or every record when nothing
//! is selected, isolating per-record failures.

use std::collections::HashSet;
use std::time::Instant;

use leveler_core::config::LevelerConfig;
use leveler_core::errors::{LevelError, StorageError};
use leveler_core::events::types::{
    BatchCompleteEvent, BatchStartedEvent, RecordFailedEvent, RecordFinishedEvent,
    RecordStartedEvent,
};
use leveler_core::events::EventDispatcher;
use leveler_core::traits::{Notifier, TableStore};
use leveler_core::types::{BatchReport, Notice, RecordFailure, RecordId};
use tracing::{info, info_span, warn};

use crate::adjuster::RecordAdjuster;
use crate::fields::FieldMap;

pub struct BatchRunner<'a, S: TableStore + ?Sized> {
    store: &'a S,
    config: &'a LevelerConfig,
    notifier: &'a dyn Notifier,
    events: EventDispatcher,
}

impl<'a, S: TableStore + ?Sized> BatchRunner<'a, S> {
    pub fn new(store: &'a S, config: &'a LevelerConfig, notifier: &'a dyn Notifier) -> Self {
        Self {
            store,
            config,
            notifier,
            events: EventDispatcher::new(),
        }
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    /// Run the batch.
    ///
    /// Returns `Err` only for failures that abort the whole run: unresolvable
    /// columns or an unreadable record list. Per-record errors are collected
    /// in the report. Exactly one success notice is sent on completion.
    pub fn run(&self) -> Result<BatchReport, LevelError> {
        let _span = info_span!("leveler.batch").entered();
        let started = Instant::now();

        let fields = FieldMap::resolve(self.store, &self.config.columns)?;
        let (ids, from_selection) = self.working_set()?;
        info!(total = ids.len(), from_selection, "batch started");
        self.events.emit_batch_started(&BatchStartedEvent {
            total: ids.len(),
            from_selection,
        });

        let adjuster =
            RecordAdjuster::new(self.store, &fields, &self.config.adjust).with_events(&self.events);
        let mut report = BatchReport::new(from_selection);

        for id in ids {
            self.events.emit_record_started(&RecordStartedEvent {
                record_id: id.clone(),
            });
            match adjuster.adjust(&id) {
                Ok(result) => {
                    self.events.emit_record_finished(&RecordFinishedEvent {
                        result: result.clone(),
                    });
                    report.results.push(result);
                }
                Err(e) => {
                    warn!(record_id = %id, error = %e, "record failed; continuing");
                    self.events.emit_record_failed(&RecordFailedEvent {
                        record_id: id.clone(),
                        message: e.to_string(),
                    });
                    report.failures.push(RecordFailure {
                        record_id: id,
                        error: e.to_string(),
                    });
                }
            }
        }

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(
            total = report.total(),
            changed = report.changed_count(),
            failed = report.failure_count(),
            duration_ms,
            "batch complete"
        );
        self.events.emit_batch_complete(&BatchCompleteEvent {
            total: report.total(),
            changed: report.changed_count(),
            failed: report.failure_count(),
            duration_ms,
        });
        self.notifier.notify(&Notice::success(report.summary()));
        Ok(report)
    }

    /// The selection when it is non-empty, otherwise every record.
    /// Duplicate ids in a selection are processed once.
    fn working_set(&self) -> Result<(Vec<RecordId>, bool), StorageError> {
        match self.store.selected_records() {
            Ok(Some(selection)) if !selection.is_empty() => {
                let mut seen = HashSet::new();
                let ids = selection
                    .into_iter()
                    .filter(|id| seen.insert(id.clone()))
                    .collect();
                return Ok((ids, true));
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "selection unavailable; using all records"),
        }
        Ok((self.store.list_records()?, false))
    }
}
