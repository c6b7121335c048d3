//! Batch and single runs against the SQLite-backed store.

mod common;

use std::sync::Arc;

use leveler_core::config::LevelerConfig;
use leveler_core::traits::TableStore;
use leveler_core::types::{RecordId, SkipReason};
use leveler_engine::{BatchRunner, SingleRunner};
use leveler_storage::{DatabaseManager, SqliteTableStore};
use serde_json::{json, Value};
use tempfile::TempDir;

use common::RecordingNotifier;

fn payable_of(store: &SqliteTableStore, id: &RecordId) -> Value {
    store
        .read_row(id)
        .unwrap()
        .into_iter()
        .find(|(c, _)| c.name == "Payable")
        .map(|(_, v)| v)
        .unwrap()
}

#[test]
fn batch_over_file_database_persists_results() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leveler.db");

    let (a, b) = {
        let db = Arc::new(DatabaseManager::open(&path).unwrap());
        let store =
            SqliteTableStore::create(db, "Sheet1", &["Payable", "Actual", "OT Net", "Notes"])
                .unwrap();
        let a = store
            .insert_record(&[
                ("Payable", json!(100)),
                ("Actual", json!(103)),
                ("OT Net", json!(7.5)),
            ])
            .unwrap();
        let b = store
            .insert_record(&[("Payable", json!(4)), ("Actual", json!(1))])
            .unwrap();
        (a, b)
    };

    let db = Arc::new(DatabaseManager::open(&path).unwrap());
    let store = SqliteTableStore::open(db, "Sheet1").unwrap();
    let notifier = RecordingNotifier::default();
    let config = LevelerConfig::default();

    let report = BatchRunner::new(&store, &config, &notifier).run().unwrap();

    assert_eq!(report.total(), 2);
    assert_eq!(report.changed_count(), 1);
    assert_eq!(payable_of(&store, &a), json!(103));
    assert_eq!(payable_of(&store, &b), json!(4));
    let skipped = report.results.iter().find(|r| r.record_id == b).unwrap();
    assert_eq!(skipped.reason, Some(SkipReason::OtNetEmpty));
}

#[test]
fn stored_selection_drives_the_batch() {
    let db = Arc::new(DatabaseManager::open_in_memory().unwrap());
    let store = SqliteTableStore::create(db, "Sheet1", &["Payable", "Actual", "OT Net"]).unwrap();
    let a = store
        .insert_record(&[("Payable", json!(0)), ("Actual", json!(2)), ("OT Net", json!(1))])
        .unwrap();
    let b = store
        .insert_record(&[("Payable", json!(0)), ("Actual", json!(2)), ("OT Net", json!(1))])
        .unwrap();
    store.set_selection(&[b.clone()]).unwrap();
    let notifier = RecordingNotifier::default();
    let config = LevelerConfig::default();

    let report = BatchRunner::new(&store, &config, &notifier).run().unwrap();

    assert!(report.from_selection);
    assert_eq!(report.total(), 1);
    assert_eq!(payable_of(&store, &a), json!(0));
    assert_eq!(payable_of(&store, &b), json!(2));
}

#[test]
fn store_without_selection_runs_everything() {
    let db = Arc::new(DatabaseManager::open_in_memory().unwrap());
    let store = SqliteTableStore::create(db, "Sheet1", &["Payable", "Actual", "OT Net"])
        .unwrap()
        .without_selection();
    store
        .insert_record(&[("Payable", json!(1)), ("Actual", json!(1)), ("OT Net", json!(1))])
        .unwrap();
    assert_eq!(store.selected_records().unwrap(), None);

    let notifier = RecordingNotifier::default();
    let report = BatchRunner::new(&store, &LevelerConfig::default(), &notifier)
        .run()
        .unwrap();
    assert!(!report.from_selection);
    assert_eq!(report.total(), 1);
}

#[test]
fn single_run_on_deleted_record_fails() {
    let db = Arc::new(DatabaseManager::open_in_memory().unwrap());
    let store = SqliteTableStore::create(db, "Sheet1", &["Payable", "Actual", "OT Net"]).unwrap();
    let a = store
        .insert_record(&[("Payable", json!(0)), ("Actual", json!(2)), ("OT Net", json!(1))])
        .unwrap();
    store.delete_record(&a).unwrap();

    let notifier = RecordingNotifier::default();
    let result = SingleRunner::new(&store, &LevelerConfig::default(), &notifier).run(&a);
    assert!(result.is_err());
    assert!(notifier.notices().is_empty());
}

#[test]
fn boolean_ot_net_is_skipped_after_storage() {
    let db = Arc::new(DatabaseManager::open_in_memory().unwrap());
    let store = SqliteTableStore::create(db, "Sheet1", &["Payable", "Actual", "OT Net"]).unwrap();
    let a = store
        .insert_record(&[("Payable", json!(0)), ("Actual", json!(2)), ("OT Net", json!(false))])
        .unwrap();

    let notifier = RecordingNotifier::default();
    let result = SingleRunner::new(&store, &LevelerConfig::default(), &notifier)
        .run(&a)
        .unwrap();

    assert_eq!(result.reason, Some(SkipReason::OtNetEmpty));
    assert_eq!(payable_of(&store, &a), json!(0));
}
