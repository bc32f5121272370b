use crate::support::{hackgrade, path_arg, synthcc_test_set, Submission, HA_LABELS};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_baseline_ha_feeds_grader() {
    let sub = Submission::new("unused", HA_LABELS);
    let test_set = sub.dir.path().join("test_set");
    fs::create_dir_all(&test_set).unwrap();
    fs::write(
        test_set.join("inputs.csv"),
        "PatientID,Age\n1,54\n2,61\n3,47\n",
    )
    .unwrap();

    hackgrade()
        .args(["baseline-ha", "--seed", "7", "--bth_test_set"])
        .arg(&test_set)
        .arg("--bth_results")
        .arg(&sub.results_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("results.csv"));

    let results = fs::read_to_string(sub.results_dir.join("results.csv")).unwrap();
    assert!(results.starts_with("PatientID,HadHeartAttack\n"));
    assert_eq!(results.lines().count(), 4);

    hackgrade()
        .args(sub.grade_args("grade-ha"))
        .assert()
        .success();
}

#[test]
fn test_baseline_synthcc_feeds_grader() {
    let dir = tempdir().unwrap();
    let test_set = dir.path().join("test_set");
    synthcc_test_set(&test_set);
    let results_dir = dir.path().join("baseline");

    hackgrade()
        .args(["baseline-synthcc", "--seed", "11", "--bth_test_set"])
        .arg(&test_set)
        .arg("--bth_results")
        .arg(&results_dir)
        .assert()
        .success();

    let results = fs::read_to_string(results_dir.join("results.csv")).unwrap();
    let lines: Vec<&str> = results.lines().collect();
    assert_eq!(
        lines[0],
        "agent_id,charge_off_within_3_months,charge_off_within_6_months,charge_off_within_9_months,charge_off_within_12_months"
    );
    // union of agents across the three logs, sorted
    let agents: Vec<&str> = lines[1..]
        .iter()
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(agents, ["a1", "a2", "a3"]);

    let labels = dir.path().join("labels.csv");
    fs::write(
        &labels,
        "agent_id,charge_off_within_3_months,charge_off_within_6_months,charge_off_within_9_months,charge_off_within_12_months\n\
a1,0,0,0,0\na2,1,1,1,1\na3,0,0,0,1\n",
    )
    .unwrap();
    let grades = dir.path().join("grades");

    hackgrade()
        .args(["grade-synthbank", "--results_dir", &path_arg(&results_dir)])
        .args(["--test_labels_path", &path_arg(&labels)])
        .args(["--grading_output_dir", &path_arg(&grades)])
        .assert()
        .success();

    assert!(grades.join("baseline.csv").is_file());
}

#[test]
fn test_baseline_seed_is_reproducible() {
    let dir = tempdir().unwrap();
    let test_set = dir.path().join("test_set");
    fs::create_dir_all(&test_set).unwrap();
    let inputs: String = std::iter::once("PatientID\n".to_string())
        .chain((0..50).map(|i| format!("{}\n", i)))
        .collect();
    fs::write(test_set.join("inputs.csv"), inputs).unwrap();

    let mut outputs = Vec::new();
    for run in ["first", "second"] {
        let results_dir = dir.path().join(run);
        hackgrade()
            .args(["baseline-ha", "--seed", "42", "--bth_test_set"])
            .arg(&test_set)
            .arg("--bth_results")
            .arg(&results_dir)
            .assert()
            .success();
        outputs.push(fs::read_to_string(results_dir.join("results.csv")).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_baseline_missing_test_set_input() {
    let dir = tempdir().unwrap();

    hackgrade()
        .args(["baseline-ha", "--bth_test_set"])
        .arg(dir.path())
        .arg("--bth_results")
        .arg(dir.path().join("out"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("inputs.csv"));
}
