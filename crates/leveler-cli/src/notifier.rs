//! Prints notices to stdout.

use leveler_core::traits::Notifier;
use leveler_core::types::Notice;

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, notice: &Notice) {
        println!("{notice}");
    }
}
