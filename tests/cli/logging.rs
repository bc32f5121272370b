use crate::support::{hackgrade, Submission, HA_LABELS, HA_PREDICTIONS};
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_stage_timings() {
    let sub = Submission::new(HA_PREDICTIONS, HA_LABELS);

    hackgrade()
        .args(["--log-level", "debug"])
        .args(sub.grade_args("grade-ha"))
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("inner_join"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let sub = Submission::new(HA_PREDICTIONS, HA_LABELS);

    hackgrade()
        .args(sub.grade_args("grade-ha"))
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let sub = Submission::new(HA_PREDICTIONS, HA_LABELS);

    hackgrade()
        .arg("--verbose")
        .args(sub.grade_args("grade-ha"))
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let sub = Submission::new(HA_PREDICTIONS, HA_LABELS);

    let output = hackgrade()
        .args(["--log-level", "debug", "--log-json"])
        .args(sub.grade_args("grade-ha"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(event.get("level").is_some());
}

#[test]
fn test_hackgrade_log_env_overrides_default() {
    let sub = Submission::new(HA_PREDICTIONS, HA_LABELS);

    hackgrade()
        .env("HACKGRADE_LOG", "hackgrade_core=info")
        .args(sub.grade_args("grade-ha"))
        .assert()
        .success()
        .stderr(predicate::str::contains("score"));
}
