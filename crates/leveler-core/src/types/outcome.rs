//! Per-record and per-batch outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Why a record was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// The gating overtime-net field is empty.
    OtNetEmpty,
    /// Payable or actual is empty.
    PayableOrActualNull,
    /// Payable already equals actual.
    AlreadyEqual,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OtNetEmpty => "OT_NET_EMPTY",
            Self::PayableOrActualNull => "PAYABLE_OR_ACTUAL_NULL",
            Self::AlreadyEqual => "ALREADY_EQUAL",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the stepping loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Termination {
    /// Payable reached actual.
    Matched,
    /// The step limit ran out first.
    MaxLoop,
}

impl Termination {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Matched => "MATCHED",
            Self::MaxLoop => "MAX_LOOP",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of adjusting one record.
///
/// Exactly one of `reason` / `termination` is set: skipped records carry a
/// reason, stepped records carry a termination tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    pub record_id: RecordId,
    pub changed: bool,
    pub reason: Option<SkipReason>,
    pub final_payable: Option<f64>,
    pub steps: u64,
    pub termination: Option<Termination>,
}

impl AdjustmentResult {
    /// A record that was not stepped at all.
    pub fn skipped(record_id: RecordId, reason: SkipReason, payable: Option<f64>) -> Self {
        Self {
            record_id,
            changed: false,
            reason: Some(reason),
            final_payable: payable,
            steps: 0,
            termination: None,
        }
    }

    /// A record whose stepping loop ran to completion or to the limit.
    pub fn stepped(record_id: RecordId, final_payable: f64, steps: u64, termination: Termination) -> Self {
        Self {
            record_id,
            changed: termination == Termination::Matched,
            reason: None,
            final_payable: Some(final_payable),
            steps,
            termination: Some(termination),
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.reason.is_some()
    }
}

/// A record whose adjustment raised an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFailure {
    pub record_id: RecordId,
    pub error: String,
}

/// Aggregate outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Whether the working set came from the user's selection.
    pub from_selection: bool,
    pub results: Vec<AdjustmentResult>,
    pub failures: Vec<RecordFailure>,
}

impl BatchReport {
    pub fn new(from_selection: bool) -> Self {
        Self {
            from_selection,
            ..Self::default()
        }
    }

    /// Records processed, including failures.
    pub fn total(&self) -> usize {
        self.results.len() + self.failures.len()
    }

    pub fn changed_count(&self) -> usize {
        self.results.iter().filter(|r| r.changed).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_skipped()).count()
    }

    pub fn max_loop_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.termination == Some(Termination::MaxLoop))
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// One-line human summary, e.g. `Aligned 3/5 records (1 failed)`.
    pub fn summary(&self) -> String {
        let mut line = format!("Aligned {}/{} records", self.changed_count(), self.total());
        if !self.failures.is_empty() {
            line.push_str(&format!(" ({} failed)", self.failures.len()));
        }
        line
    }
}
