use crate::support::{
    hackgrade, Submission, HA_LABELS, HA_PREDICTIONS, SYNTHBANK_LABELS, SYNTHBANK_PREDICTIONS,
};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// grade-ha
// ============================================================================

#[test]
fn test_grade_ha_writes_report_named_after_results_dir() {
    let sub = Submission::new(HA_PREDICTIONS, HA_LABELS);

    hackgrade()
        .args(sub.grade_args("grade-ha"))
        .assert()
        .success()
        .stdout(predicate::str::contains("f1 for HadHeartAttack: 0.8"))
        .stdout(predicate::str::contains("run42.csv"));

    assert_eq!(sub.report(), "metric_name,HadHeartAttack\nf1,0.8\n");
}

#[test]
fn test_grade_ha_accepts_float_encoded_binaries() {
    let sub = Submission::new(
        "PatientID,HadHeartAttack\n1,1.0\n2,0.0\n3,1.0\n",
        HA_LABELS,
    );

    hackgrade()
        .args(sub.grade_args("grade-ha"))
        .assert()
        .success();

    assert_eq!(sub.report(), "metric_name,HadHeartAttack\nf1,0.8\n");
}

#[test]
fn test_grade_ha_ignores_row_order() {
    let sub = Submission::new(
        "PatientID,HadHeartAttack\n3,1\n1,1\n2,0\n",
        HA_LABELS,
    );

    hackgrade()
        .args(sub.grade_args("grade-ha"))
        .assert()
        .success();

    assert_eq!(sub.report(), "metric_name,HadHeartAttack\nf1,0.8\n");
}

#[test]
fn test_grade_ha_json_output() {
    let sub = Submission::new(HA_PREDICTIONS, HA_LABELS);

    let output = hackgrade()
        .args(["--format", "json"])
        .args(sub.grade_args("grade-ha"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["task"], "ha");
    assert_eq!(json["rows"], 3);
    assert_eq!(json["scores"]["f1"]["HadHeartAttack"], 0.8);
    assert!(json["output_path"].as_str().unwrap().ends_with("run42.csv"));
}

#[test]
fn test_grade_quiet_suppresses_stdout() {
    let sub = Submission::new(HA_PREDICTIONS, HA_LABELS);

    hackgrade()
        .arg("--quiet")
        .args(sub.grade_args("grade-ha"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(sub.output_dir.join("run42.csv").is_file());
}

#[test]
fn test_grade_overwrites_previous_report() {
    let sub = Submission::new(HA_PREDICTIONS, HA_LABELS);
    fs::create_dir_all(&sub.output_dir).unwrap();
    fs::write(sub.output_dir.join("run42.csv"), "stale").unwrap();

    hackgrade()
        .args(sub.grade_args("grade-ha"))
        .assert()
        .success();

    assert_eq!(sub.report(), "metric_name,HadHeartAttack\nf1,0.8\n");
}

// ============================================================================
// grade-synthbank
// ============================================================================

#[test]
fn test_grade_synthbank_reports_each_window_and_average() {
    let sub = Submission::new(SYNTHBANK_PREDICTIONS, SYNTHBANK_LABELS);

    hackgrade()
        .args(sub.grade_args("grade-synthbank"))
        .assert()
        .success()
        .stdout(predicate::str::contains("f1 for 3 months: 1.0"))
        .stdout(predicate::str::contains("f1 for 12 months: 0.666"))
        .stdout(predicate::str::contains(
            "Average f1 score across prediction windows: 0.91666",
        ));

    let report = sub.report();
    let mut lines = report.lines();
    assert_eq!(
        lines.next().unwrap(),
        "metric_name,charge_off_within_3_months,charge_off_within_6_months,charge_off_within_9_months,charge_off_within_12_months,avg"
    );
    let values: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(values[0], "f1");
    assert_eq!(&values[1..4], ["1.0", "1.0", "1.0"]);
    let avg: f64 = values[5].parse().unwrap();
    assert!((avg - 11.0 / 12.0).abs() < 1e-9);
}

#[test]
fn test_grade_synthbank_uses_configured_windows() {
    let sub = Submission::new(
        "agent_id,charge_off_within_1_months\na1,1\na2,0\n",
        "agent_id,charge_off_within_1_months\na1,1\na2,0\n",
    );
    let config = sub.dir.path().join("hackgrade.toml");
    fs::write(&config, "[synthbank]\nprediction_windows_months = [1]\n").unwrap();

    hackgrade()
        .arg("--config")
        .arg(&config)
        .args(sub.grade_args("grade-synthbank"))
        .assert()
        .success();

    assert_eq!(
        sub.report(),
        "metric_name,charge_off_within_1_months,avg\nf1,1.0,1.0\n"
    );
}

#[test]
fn test_grade_from_inside_results_dir() {
    let sub = Submission::new(HA_PREDICTIONS, HA_LABELS);

    hackgrade()
        .current_dir(&sub.results_dir)
        .args(["grade-ha", "--results_dir", "."])
        .arg("--test_labels_path")
        .arg(&sub.labels)
        .arg("--grading_output_dir")
        .arg(&sub.output_dir)
        .assert()
        .success();

    assert_eq!(sub.report(), "metric_name,HadHeartAttack\nf1,0.8\n");
}

#[test]
fn test_perfect_score_is_written_as_float() {
    let sub = Submission::new(HA_LABELS, HA_LABELS);

    hackgrade()
        .args(sub.grade_args("grade-ha"))
        .assert()
        .success()
        .stdout(predicate::str::contains("f1 for HadHeartAttack: 1.0"));

    assert_eq!(sub.report(), "metric_name,HadHeartAttack\nf1,1.0\n");
}
