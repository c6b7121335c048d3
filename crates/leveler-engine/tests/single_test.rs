//! SingleRunner: one record, one notice.

mod common;

use leveler_core::config::{ColumnsConfig, LevelerConfig};
use leveler_core::errors::{LevelError, StorageError};
use leveler_core::types::{NoticeLevel, RecordId, SkipReason, Termination};
use leveler_engine::SingleRunner;
use serde_json::json;

use common::*;

#[test]
fn aligns_only_the_given_record() {
    let store = MemoryStore::new();
    let a = store.add("a", json!(1), json!(4), json!(1));
    let b = store.add("b", json!(1), json!(4), json!(1));
    store.select(&[&b]);
    let notifier = RecordingNotifier::default();
    let config = LevelerConfig::default();

    let result = SingleRunner::new(&store, &config, &notifier).run(&a).unwrap();

    assert_eq!(result.termination, Some(Termination::Matched));
    assert_eq!(store.writes_for(&a), vec![2.0, 3.0, 4.0]);
    assert!(store.writes_for(&b).is_empty());

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert_eq!(notices[0].message, "Record a aligned: payable = 4 after 3 steps");
}

#[test]
fn skip_sends_a_warning() {
    let store = MemoryStore::new();
    let a = store.add("a", json!(1), json!(4), json!(null));
    let notifier = RecordingNotifier::default();
    let config = LevelerConfig::default();

    let result = SingleRunner::new(&store, &config, &notifier).run(&a).unwrap();

    assert_eq!(result.reason, Some(SkipReason::OtNetEmpty));
    let notices = notifier.notices();
    assert_eq!(notices[0].level, NoticeLevel::Warning);
    assert_eq!(notices[0].message, "Record a skipped: OT_NET_EMPTY");
}

#[test]
fn store_failure_propagates_without_notice() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::default();
    let config = LevelerConfig::default();

    let err = SingleRunner::new(&store, &config, &notifier)
        .run(&RecordId::new("missing"))
        .unwrap_err();

    assert!(matches!(
        err,
        LevelError::Storage(StorageError::RecordNotFound { .. })
    ));
    assert!(notifier.notices().is_empty());
}

#[test]
fn unresolved_column_is_a_config_error() {
    let store = MemoryStore::new();
    let a = store.add("a", json!(1), json!(4), json!(1));
    let notifier = RecordingNotifier::default();
    let config = LevelerConfig {
        columns: ColumnsConfig::new("Pay", "Actual", "OT Net"),
        ..Default::default()
    };

    let err = SingleRunner::new(&store, &config, &notifier).run(&a).unwrap_err();
    assert!(err.is_config());
    assert_eq!(store.total_reads(), 0);
}
