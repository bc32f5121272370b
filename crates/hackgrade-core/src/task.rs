//! Grading task definitions
//!
//! A [`Task`] names the join key and the binary target columns a submission
//! must carry. Both graders run the same pipeline with a different task.

use std::fmt;

/// Join key of the heart-attack task
pub const PATIENT_ID: &str = "PatientID";

/// Target column of the heart-attack task
pub const HAD_HEART_ATTACK: &str = "HadHeartAttack";

/// Join key of the SynthBank charge-off task
pub const AGENT_ID: &str = "agent_id";

/// Name of the averaged column in multi-window grading tables
pub const AVG_COLUMN: &str = "avg";

/// Target column for a charge-off prediction window
pub fn charge_off_column(months: u32) -> String {
    format!("charge_off_within_{}_months", months)
}

/// A target column and, for windowed tasks, its horizon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub column: String,
    pub window_months: Option<u32>,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.window_months {
            Some(months) => write!(f, "{} months", months),
            None => write!(f, "{}", self.column),
        }
    }
}

/// Schema and scoring shape of one grading task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: &'static str,
    pub key_column: String,
    pub targets: Vec<Target>,
    /// Add an `avg` column averaging every target's score
    pub average: bool,
}

impl Task {
    /// Single-column heart-attack task joined on `PatientID`
    pub fn heart_attack() -> Self {
        Self {
            name: "ha",
            key_column: PATIENT_ID.to_string(),
            targets: vec![Target {
                column: HAD_HEART_ATTACK.to_string(),
                window_months: None,
            }],
            average: false,
        }
    }

    /// Charge-off task with one target per prediction window, joined on `agent_id`
    pub fn synthbank(prediction_windows_months: &[u32]) -> Self {
        Self {
            name: "synthbank",
            key_column: AGENT_ID.to_string(),
            targets: prediction_windows_months
                .iter()
                .map(|&months| Target {
                    column: charge_off_column(months),
                    window_months: Some(months),
                })
                .collect(),
            average: true,
        }
    }

    pub fn target_columns(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(|t| t.column.as_str())
    }
}
