//! Grading report output

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::bail_invalid;
use crate::error::{GradeError, Result};
use crate::score::GradingTable;
use crate::table::Table;

/// Header of the index column in grading CSVs
pub const METRIC_NAME_COLUMN: &str = "metric_name";

/// Name of the grading CSV for a results directory: its base name plus `.csv`.
///
/// `/tmp/run42` and `/tmp/run42/` both yield `run42.csv`. Paths without a
/// base name of their own (`.`, `sub/..`) are resolved against the
/// filesystem first.
pub fn output_file_name(results_dir: &Path) -> Result<String> {
    if let Some(Component::Normal(name)) = results_dir.components().next_back() {
        return Ok(format!("{}.csv", name.to_string_lossy()));
    }

    let resolved = match results_dir.canonicalize() {
        Ok(resolved) => resolved,
        Err(e) => bail_invalid!(
            "results directory",
            format!("{} ({})", results_dir.display(), e)
        ),
    };
    match resolved.file_name() {
        Some(name) => Ok(format!("{}.csv", name.to_string_lossy())),
        None => bail_invalid!(
            "results directory",
            format!("{} (no base name to derive a report name from)", results_dir.display())
        ),
    }
}

/// Render the grading table as CSV rows, index column first
pub fn to_table(grading: &GradingTable) -> Table {
    let mut headers = vec![METRIC_NAME_COLUMN.to_string()];
    headers.extend(grading.columns.iter().cloned());

    let rows = grading
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.metric.clone()];
            cells.extend(row.values.iter().map(|v| format_score(*v)));
            cells
        })
        .collect();

    Table::new(headers, rows)
}

/// Scores always carry a fractional part (`1.0`, not `1`)
pub fn format_score(value: f64) -> String {
    format!("{value:?}")
}

/// Write the grading table under `output_dir`, named after `results_dir`.
///
/// Creates `output_dir` when missing and overwrites an existing report.
pub fn write_report(
    grading: &GradingTable,
    results_dir: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let file_name = output_file_name(results_dir)?;
    write_named_report(grading, output_dir, &file_name)
}

/// Write the grading table as `output_dir/file_name`
#[tracing::instrument(skip(grading, output_dir), fields(output_dir = %output_dir.display()))]
pub fn write_named_report(
    grading: &GradingTable,
    output_dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        fs::create_dir_all(output_dir).map_err(|e| {
            GradeError::io_operation("create grading output directory", output_dir.display(), e)
        })?;
    }

    let path = output_dir.join(file_name);
    to_table(grading).write_csv(&path)?;
    tracing::debug!(path = %path.display(), "write_report");
    Ok(path)
}
