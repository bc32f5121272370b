//! Integration tests for the hackgrade binary

mod baseline;
mod grade;
mod inspect;
mod logging;
mod support;

use predicates::prelude::*;
use support::hackgrade;

#[test]
fn test_help_flag() {
    hackgrade()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: hackgrade"))
        .stdout(predicate::str::contains("grade-ha"))
        .stdout(predicate::str::contains("grade-synthbank"))
        .stdout(predicate::str::contains("baseline-synthcc"));
}

#[test]
fn test_version_flag() {
    hackgrade()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hackgrade"));
}

#[test]
fn test_no_command_prints_banner() {
    hackgrade()
        .assert()
        .success()
        .stdout(predicate::str::contains("Run `hackgrade --help`"));
}

#[test]
fn test_grade_help_lists_underscore_flags() {
    hackgrade()
        .args(["grade-ha", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--results_dir"))
        .stdout(predicate::str::contains("--test_labels_path"))
        .stdout(predicate::str::contains("--grading_output_dir"));
}
