use crate::support::{hackgrade, synthcc_test_set};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_inspect_summarizes_logs() {
    let dir = tempdir().unwrap();
    synthcc_test_set(dir.path());

    hackgrade()
        .args(["inspect", "--bth_test_set"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("transactions_log.csv (3 rows)"))
        .stdout(predicate::str::contains("grocery: 2"))
        .stdout(predicate::str::contains("grocery: total=15.5 mean=7.75 count=2"))
        .stdout(predicate::str::contains("Charge Off: 1"));
}

#[test]
fn test_inspect_filters_by_agent_json() {
    let dir = tempdir().unwrap();
    synthcc_test_set(dir.path());

    let output = hackgrade()
        .args(["--format", "json", "inspect", "--agent_id", "a2", "--bth_test_set"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let logs = json.as_array().unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[0]["name"], "account_state_log.csv");
    assert_eq!(logs[0]["rows"], 2);
    assert_eq!(logs[1]["rows"], 0);
    assert_eq!(logs[2]["merchant_categories"][0][0], "travel");
    assert_eq!(logs[2]["spending"][0]["category"], "travel");
    assert_eq!(logs[2]["spending"][0]["total"], 40.0);
    assert_eq!(logs[2]["spending"][0]["count"], 1);
}

#[test]
fn test_inspect_skips_absent_logs() {
    let dir = tempdir().unwrap();
    synthcc_test_set(dir.path());
    fs::remove_file(dir.path().join("payments_log.csv")).unwrap();

    hackgrade()
        .args(["inspect", "--bth_test_set"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("payments_log.csv").not());
}

#[test]
fn test_inspect_missing_directory() {
    let dir = tempdir().unwrap();

    hackgrade()
        .args(["inspect", "--bth_test_set"])
        .arg(dir.path().join("nope"))
        .assert()
        .code(3);
}
