//! End-to-end grading of one submission
//!
//! Stages run strictly in order: load/validate predictions, load labels,
//! reconcile keys, join, score, write. Any failure aborts the run before the
//! report is written.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::Result;
use crate::join::inner_join;
use crate::reconcile::reconcile_keys;
use crate::report::{output_file_name, write_named_report};
use crate::score::{score, GradingTable};
use crate::task::Task;
use crate::trace_time;
use crate::validate::{load_labels, load_predictions};

/// File a submission must write into its results directory
pub const RESULTS_FILE: &str = "results.csv";

/// Inputs of a grading run
#[derive(Debug, Clone)]
pub struct GradeRequest {
    /// Directory containing the submission's `results.csv`
    pub results_dir: PathBuf,
    /// Ground-truth labels CSV
    pub test_labels_path: PathBuf,
    /// Directory the grading CSV is written to
    pub grading_output_dir: PathBuf,
}

impl GradeRequest {
    pub fn predictions_path(&self) -> PathBuf {
        self.results_dir.join(RESULTS_FILE)
    }
}

/// Result of a successful grading run
#[derive(Debug, Clone)]
pub struct GradeOutcome {
    pub task: Task,
    pub table: GradingTable,
    pub output_path: PathBuf,
    /// Number of merged rows scored
    pub rows: usize,
}

/// Grade one submission for `task`
#[tracing::instrument(skip(request, task), fields(task = task.name, results_dir = %request.results_dir.display()))]
pub fn grade(request: &GradeRequest, task: &Task) -> Result<GradeOutcome> {
    let start = Instant::now();
    let report_name = output_file_name(&request.results_dir)?;

    let predictions = load_predictions(&request.predictions_path(), task)?;
    trace_time!(start, "load_predictions", rows = predictions.len());

    let labels = load_labels(&request.test_labels_path, task)?;
    trace_time!(start, "load_labels", rows = labels.len());

    reconcile_keys(&predictions, &labels)?;

    let merged = inner_join(&predictions, &labels)?;
    trace_time!(start, "inner_join", rows = merged.len());

    let table = score(&merged, task)?;
    let output_path = write_named_report(&table, &request.grading_output_dir, &report_name)?;
    trace_time!(start, "write_report");

    Ok(GradeOutcome {
        task: task.clone(),
        table,
        output_path,
        rows: merged.len(),
    })
}

/// Convenience wrapper building the request from paths
pub fn grade_paths(
    results_dir: &Path,
    test_labels_path: &Path,
    grading_output_dir: &Path,
    task: &Task,
) -> Result<GradeOutcome> {
    grade(
        &GradeRequest {
            results_dir: results_dir.to_path_buf(),
            test_labels_path: test_labels_path.to_path_buf(),
            grading_output_dir: grading_output_dir.to_path_buf(),
        },
        task,
    )
}
