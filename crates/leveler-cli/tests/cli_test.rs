//! End-to-end tests driving the compiled binary in a scratch directory.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn leveler(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_leveler-cli"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("USERPROFILE")
        .env_remove("LEVELER_PAYABLE_COLUMN")
        .env_remove("LEVELER_ACTUAL_COLUMN")
        .env_remove("LEVELER_OT_NET_COLUMN")
        .env_remove("LEVELER_STEP_DELAY_MS")
        .env_remove("LEVELER_HARD_CAP")
        .env_remove("LEVELER_DB_PATH")
        .env_remove("LEVELER_TABLE")
        .env("LEVELER_LOG", "off")
        .output()
        .expect("failed to spawn leveler-cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn ok(dir: &Path, args: &[&str]) -> String {
    let output = leveler(dir, args);
    assert!(
        output.status.success(),
        "{args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    stdout(&output)
}

fn add(dir: &Path, payable: &str, actual: &str, ot_net: &str) -> String {
    ok(
        dir,
        &[
            "add",
            "--set",
            &format!("Payable={payable}"),
            "--set",
            &format!("Actual={actual}"),
            "--set",
            &format!("OT Net={ot_net}"),
        ],
    )
    .trim()
    .to_string()
}

fn show_json(dir: &Path) -> Vec<Value> {
    serde_json::from_str(&ok(dir, &["show", "--json"])).unwrap()
}

fn payable(rows: &[Value], id: &str) -> Value {
    rows.iter()
        .find(|r| r["id"] == id)
        .map(|r| r["fields"]["Payable"].clone())
        .unwrap()
}

#[test]
fn batch_run_levels_and_is_recorded() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["init"]);
    let a = add(dir.path(), "100", "103", "1");
    let b = add(dir.path(), "7", "9", "null");

    let out = ok(dir.path(), &["run"]);
    assert!(out.contains("[success] Aligned 1/2 records"), "{out}");

    let rows = show_json(dir.path());
    assert_eq!(payable(&rows, &a), 103);
    assert_eq!(payable(&rows, &b), 7);

    let history = ok(dir.path(), &["history"]);
    assert!(history.contains("batch"), "{history}");
    assert!(history.contains("completed"), "{history}");
    assert!(history.contains("changed=1/2"), "{history}");
}

#[test]
fn fractional_gap_reports_the_step_limit() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["init"]);
    let a = add(dir.path(), "0.5", "2", "1");

    let out = ok(dir.path(), &["run"]);
    assert!(out.contains(&format!("{a}  MAX_LOOP  steps=13")), "{out}");
    assert!(out.contains("1 record(s) stopped at the step limit"), "{out}");
    assert_eq!(payable(&show_json(dir.path()), &a), 13.5);

    ok(dir.path(), &["run"]);
    let history = ok(dir.path(), &["history", "--limit", "1"]);
    assert!(history.contains("Showing 1 of 2 run(s)"), "{history}");
}

#[test]
fn selection_limits_the_batch() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["init"]);
    let a = add(dir.path(), "0", "2", "1");
    let b = add(dir.path(), "0", "2", "1");
    ok(dir.path(), &["select", &b]);

    let report: Value = serde_json::from_str(&ok(dir.path(), &["run", "--json"])).unwrap();
    assert_eq!(report["from_selection"], true);

    let rows = show_json(dir.path());
    assert_eq!(payable(&rows, &a), 0);
    assert_eq!(payable(&rows, &b), 2);
    assert_eq!(rows.iter().filter(|r| r["selected"] == true).count(), 1);

    ok(dir.path(), &["select", "--clear"]);
    ok(dir.path(), &["run"]);
    assert_eq!(payable(&show_json(dir.path()), &a), 2);
}

#[test]
fn single_record_run_reports_outcome() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["init"]);
    let a = add(dir.path(), "5", "2", "1");

    let out = ok(dir.path(), &["record", &a]);
    assert_eq!(
        out.trim(),
        format!("[success] Record {a} aligned: payable = 2 after 3 steps")
    );

    let again = ok(dir.path(), &["record", &a]);
    assert!(again.contains("skipped: ALREADY_EQUAL"), "{again}");

    let json: Value = serde_json::from_str(&ok(dir.path(), &["record", &a, "--json"])).unwrap();
    assert_eq!(json["reason"], "ALREADY_EQUAL");
    assert_eq!(json["changed"], false);
}

#[test]
fn unknown_record_exits_with_runtime_error() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["init"]);
    let output = leveler(dir.path(), &["record", "rec_missing"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn unresolved_column_exits_with_config_error() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["init"]);
    add(dir.path(), "0", "2", "1");
    std::fs::write(
        dir.path().join("leveler.toml"),
        "[columns]\not_net = \"Overtime\"\n",
    )
    .unwrap();

    let output = leveler(dir.path(), &["run"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("COLUMN_UNRESOLVED"), "{stderr}");

    let history = ok(dir.path(), &["history"]);
    assert!(history.contains("failed"), "{history}");
}

#[test]
fn malformed_config_exits_with_config_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("leveler.toml"), "[adjust\nhard_cap = ").unwrap();
    let output = leveler(dir.path(), &["show"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn flags_override_table_and_database() {
    let dir = TempDir::new().unwrap();
    ok(dir.path(), &["--db", "other.db", "--table", "Week 12", "init"]);
    assert!(dir.path().join("other.db").exists());
    assert!(!dir.path().join("leveler.db").exists());

    let output = leveler(dir.path(), &["--db", "other.db", "show"]);
    assert_eq!(output.status.code(), Some(1));
    ok(dir.path(), &["--db", "other.db", "--table", "Week 12", "show"]);
}
