//! Collaborator traits: the tabular store and the notification sink.

pub mod notifier;
pub mod table_store;

pub use notifier::{Notifier, NullNotifier};
pub use table_store::TableStore;
