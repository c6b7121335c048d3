//! SingleRunner: adjusts exactly one caller-supplied record.

use leveler_core::config::LevelerConfig;
use leveler_core::errors::LevelError;
use leveler_core::events::EventDispatcher;
use leveler_core::traits::{Notifier, TableStore};
use leveler_core::types::{AdjustmentResult, RecordId};

use crate::adjuster::RecordAdjuster;
use crate::fields::FieldMap;
use crate::notify::single_notice;

pub struct SingleRunner<'a, S: TableStore + ?Sized> {
    store: &'a S,
    config: &'a LevelerConfig,
    notifier: &'a dyn Notifier,
    events: EventDispatcher,
}

impl<'a, S: TableStore + ?Sized> SingleRunner<'a, S> {
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

    /// Adjust `record_id` and send one notice describing the outcome.
    /// Store failures propagate without a notice.
    pub fn run(&self, record_id: &RecordId) -> Result<AdjustmentResult, LevelError> {
        let fields = FieldMap::resolve(self.store, &self.config.columns)?;
        let result = RecordAdjuster::new(self.store, &fields, &self.config.adjust)
            .with_events(&self.events)
            .adjust(record_id)?;
        self.notifier.notify(&single_notice(&result));
        Ok(result)
    }
}
