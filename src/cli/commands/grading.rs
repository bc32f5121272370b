//! Grading command argument structures

use std::path::PathBuf;

use clap::Args;

/// Arguments shared by both graders.
#[derive(Args, Debug)]
pub struct GradeArgs {
    /// Directory containing the submission's results.csv (the directory, not the CSV)
    #[arg(long = "results_dir")]
    pub results_dir: PathBuf,

    /// Path to the ground-truth labels CSV
    #[arg(long = "test_labels_path")]
    pub test_labels_path: PathBuf,

    /// Directory in which the grading output CSV is written
    #[arg(long = "grading_output_dir")]
    pub grading_output_dir: PathBuf,
}
