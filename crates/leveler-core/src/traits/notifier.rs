use crate::types::Notice;

/// Sink for the end-of-run notification (a toast in a hosted UI, a line on
/// stdout for the CLI).
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notice: &Notice) {}
}
