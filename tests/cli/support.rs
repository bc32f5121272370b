use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::TempDir;

/// Get a Command for hackgrade with a clean logging/config environment
pub fn hackgrade() -> Command {
    let mut cmd = cargo_bin_cmd!("hackgrade");
    cmd.env_remove("RUST_LOG")
        .env_remove("HACKGRADE_LOG")
        .env_remove("HACKGRADE_CONFIG");
    cmd
}

/// Scratch layout for one grading run
pub struct Submission {
    pub dir: TempDir,
    pub results_dir: PathBuf,
    pub labels: PathBuf,
    pub output_dir: PathBuf,
}

impl Submission {
    /// `<tmp>/run42/results.csv`, `<tmp>/labels.csv`, output to `<tmp>/grades`
    pub fn new(predictions: &str, labels: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let results_dir = dir.path().join("run42");
        fs::create_dir_all(&results_dir).unwrap();
        fs::write(results_dir.join("results.csv"), predictions).unwrap();
        let labels_path = dir.path().join("labels.csv");
        fs::write(&labels_path, labels).unwrap();
        let output_dir = dir.path().join("grades");
        Self {
            results_dir,
            labels: labels_path,
            output_dir,
            dir,
        }
    }

    /// Flag list for `grade-ha` / `grade-synthbank`
    pub fn grade_args(&self, command: &str) -> Vec<String> {
        vec![
            command.to_string(),
            "--results_dir".to_string(),
            path_arg(&self.results_dir),
            "--test_labels_path".to_string(),
            path_arg(&self.labels),
            "--grading_output_dir".to_string(),
            path_arg(&self.output_dir),
        ]
    }

    pub fn report(&self) -> String {
        fs::read_to_string(self.output_dir.join("run42.csv")).unwrap()
    }
}

pub fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

pub const HA_PREDICTIONS: &str = "PatientID,HadHeartAttack\n1,1\n2,0\n3,1\n";
pub const HA_LABELS: &str = "PatientID,HadHeartAttack\n1,1\n2,1\n3,1\n";

/// Two agents, windows 3/6/9/12; predictions match labels except one cell
pub const SYNTHBANK_PREDICTIONS: &str = "agent_id,charge_off_within_3_months,charge_off_within_6_months,charge_off_within_9_months,charge_off_within_12_months\n\
a1,1,1,1,1\n\
a2,0,0,0,1\n";
pub const SYNTHBANK_LABELS: &str = "agent_id,charge_off_within_3_months,charge_off_within_6_months,charge_off_within_9_months,charge_off_within_12_months\n\
a2,0,0,0,0\n\
a1,1,1,1,1\n";

/// Minimal SynthCC test set with the three logs
pub fn synthcc_test_set(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("account_state_log.csv"),
        "agent_id,timestamp,status\na1,2024-01-01,good\na2,2024-01-01,delinquent\na2,2024-02-01,charge off\n",
    )
    .unwrap();
    fs::write(
        dir.join("payments_log.csv"),
        "agent_id,timestamp,amount\na1,2024-01-05,100\na3,2024-01-06,20\n",
    )
    .unwrap();
    fs::write(
        dir.join("transactions_log.csv"),
        "agent_id,timestamp,amount,merchant_category\na1,2024-01-02,12.5,grocery\na2,2024-01-03,40,travel\na1,2024-01-04,3,grocery\n",
    )
    .unwrap();
}
