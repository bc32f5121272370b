//! Per-target scoring of a merged table

use serde::Serialize;

use crate::error::{GradeError, Result};
use crate::join::MergedTable;
use crate::metrics::Metric;
use crate::task::{Task, AVG_COLUMN};

/// One metric's scores, aligned with [`GradingTable::columns`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: String,
    pub values: Vec<f64>,
}

/// Scores indexed by metric name (rows) and target column (columns)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradingTable {
    pub columns: Vec<String>,
    pub rows: Vec<MetricRow>,
}

impl GradingTable {
    /// Score for a metric/column pair
    pub fn value(&self, metric: &str, column: &str) -> Option<f64> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows
            .iter()
            .find(|row| row.metric == metric)
            .and_then(|row| row.values.get(col).copied())
    }
}

/// Compute every metric for every target of `task`.
///
/// When the task averages, an `avg` column holds the mean of the target
/// scores for each metric.
pub fn score(merged: &MergedTable, task: &Task) -> Result<GradingTable> {
    let mut columns: Vec<String> = task.target_columns().map(str::to_string).collect();
    if task.average {
        columns.push(AVG_COLUMN.to_string());
    }

    let mut rows = Vec::with_capacity(Metric::ALL.len());
    for metric in Metric::ALL {
        let mut values = Vec::with_capacity(columns.len());
        let mut average = 0.0;
        for target in &task.targets {
            let preds = merged
                .predictions(&target.column)
                .ok_or_else(|| missing_merged_column(&target.column))?;
            let labels = merged
                .labels(&target.column)
                .ok_or_else(|| missing_merged_column(&target.column))?;

            let value = metric.compute(labels, preds);
            tracing::info!(metric = metric.name(), target = %target, score = value, "score");

            values.push(value);
            average += value / task.targets.len() as f64;
        }

        if task.average {
            tracing::info!(
                metric = metric.name(),
                score = average,
                "average score across prediction windows"
            );
            values.push(average);
        }

        rows.push(MetricRow {
            metric: metric.name().to_string(),
            values,
        });
    }

    Ok(GradingTable { columns, rows })
}

fn missing_merged_column(target: &str) -> GradeError {
    GradeError::Other(format!(
        "merged table has no prediction/label pair for `{}`",
        target
    ))
}
