//! Notice construction and the tracing-backed notifier.

use leveler_core::traits::Notifier;
use leveler_core::types::{AdjustmentResult, Notice, NoticeLevel, Termination};

/// Writes notices to the log: success at `info`, warning at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(message = %notice.message, "notice"),
            NoticeLevel::Warning => tracing::warn!(message = %notice.message, "notice"),
        }
    }
}

/// Notice for a single-record run.
pub fn single_notice(result: &AdjustmentResult) -> Notice {
    let id = &result.record_id;
    if let Some(reason) = result.reason {
        return Notice::warning(format!("Record {id} skipped: {reason}"));
    }
    let payable = result.final_payable.unwrap_or_default();
    match result.termination {
        Some(Termination::Matched) => Notice::success(format!(
            "Record {id} aligned: payable = {payable} after {} steps",
            result.steps
        )),
        _ => Notice::warning(format!(
            "Record {id} not aligned: step limit reached after {} steps (payable = {payable})",
            result.steps
        )),
    }
}

#[cfg(test)]
mod tests {
    use leveler_core::types::{RecordId, SkipReason};

    use super::*;

    #[test]
    fn matched_is_success() {
        let r = AdjustmentResult::stepped(RecordId::new("r1"), 103.0, 3, Termination::Matched);
        let n = single_notice(&r);
        assert_eq!(n.level, NoticeLevel::Success);
        assert_eq!(n.message, "Record r1 aligned: payable = 103 after 3 steps");
    }

    #[test]
    fn skip_carries_reason() {
        let r = AdjustmentResult::skipped(RecordId::new("r2"), SkipReason::OtNetEmpty, None);
        let n = single_notice(&r);
        assert_eq!(n.level, NoticeLevel::Warning);
        assert_eq!(n.message, "Record r2 skipped: OT_NET_EMPTY");
    }

    #[test]
    fn max_loop_is_warning() {
        let r = AdjustmentResult::stepped(RecordId::new("r3"), 115.5, 15, Termination::MaxLoop);
        let n = single_notice(&r);
        assert_eq!(n.level, NoticeLevel::Warning);
        assert!(n.message.contains("step limit reached after 15 steps"));
    }
}
