//! Submission loading and validation
//!
//! A predictions (or labels) file is accepted only when it carries the task's
//! join key and every target column holds integral 0/1 values. Checks run
//! column by column, in task order, and stop at the first violation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{GradeError, Result, ValueSample};
use crate::table::Table;
use crate::task::Task;
use crate::trace_time;

/// Number of leading values quoted in domain errors
const SAMPLE_LEN: usize = 5;

/// A validated binary target column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryColumn {
    pub name: String,
    pub values: Vec<u8>,
}

/// Join keys plus validated target columns, in file row order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTable {
    pub path: PathBuf,
    pub key_column: String,
    pub keys: Vec<String>,
    pub columns: Vec<BinaryColumn>,
}

impl BinaryTable {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&[u8]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }
}

/// Load and validate a submission's predictions file
pub fn load_predictions(path: &Path, task: &Task) -> Result<BinaryTable> {
    load_binary_table(path, task, "predictions file")
}

/// Load and validate a ground-truth labels file
pub fn load_labels(path: &Path, task: &Task) -> Result<BinaryTable> {
    load_binary_table(path, task, "labels file")
}

fn load_binary_table(path: &Path, task: &Task, role: &str) -> Result<BinaryTable> {
    let start = Instant::now();
    let table = Table::read_csv(path, role)?;
    let validated = validate_table(&table, task)?;
    trace_time!(start, "load_binary_table", rows = validated.len());
    Ok(validated)
}

/// Check a loaded table against a task's schema and coerce its targets
pub fn validate_table(table: &Table, task: &Task) -> Result<BinaryTable> {
    let keys = table
        .column(&task.key_column)?
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut columns = Vec::with_capacity(task.targets.len());
    for name in task.target_columns() {
        let values = coerce_binary_column(table, name)?;
        columns.push(BinaryColumn {
            name: name.to_string(),
            values,
        });
    }

    Ok(BinaryTable {
        path: table.path().to_path_buf(),
        key_column: task.key_column.clone(),
        keys,
        columns,
    })
}

/// Validate one target column and coerce it to 0/1 integers.
///
/// Domain checks run over the whole column in order: numeric, integral,
/// binary. The first failing check names the column and quotes its values.
pub fn coerce_binary_column(table: &Table, name: &str) -> Result<Vec<u8>> {
    let cells = table.column(name)?;
    let head = sample(cells.iter().copied());

    let parsed: Vec<Option<f64>> = cells.iter().map(|c| parse_numeric(c)).collect();
    let non_numeric = offending(&cells, &parsed, |v| v.is_some());
    if !non_numeric.0.is_empty() {
        return Err(GradeError::NonNumeric {
            column: name.to_string(),
            path: table.path().to_path_buf(),
            head,
            offending: non_numeric,
        });
    }

    let numbers: Vec<f64> = parsed.into_iter().flatten().collect();
    let non_integral = offending_values(&cells, &numbers, is_integral);
    if !non_integral.0.is_empty() {
        return Err(GradeError::NonIntegral {
            column: name.to_string(),
            path: table.path().to_path_buf(),
            head,
            offending: non_integral,
        });
    }

    let non_binary = offending_values(&cells, &numbers, |v| v == 0.0 || v == 1.0);
    if !non_binary.0.is_empty() {
        return Err(GradeError::NotBinary {
            column: name.to_string(),
            path: table.path().to_path_buf(),
            head,
            offending: non_binary,
        });
    }

    Ok(numbers.into_iter().map(|v| u8::from(v == 1.0)).collect())
}

/// Parse a cell the way a numeric CSV column is read.
///
/// Empty cells are missing values (NaN); boolean literals count as 1/0.
fn parse_numeric(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(f64::NAN);
    }
    if cell.eq_ignore_ascii_case("true") {
        return Some(1.0);
    }
    if cell.eq_ignore_ascii_case("false") {
        return Some(0.0);
    }
    cell.parse::<f64>().ok()
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

fn sample<'a>(cells: impl Iterator<Item = &'a str>) -> ValueSample {
    ValueSample(cells.take(SAMPLE_LEN).map(str::to_string).collect())
}

fn offending(
    cells: &[&str],
    parsed: &[Option<f64>],
    ok: impl Fn(&Option<f64>) -> bool,
) -> ValueSample {
    sample(
        cells
            .iter()
            .zip(parsed)
            .filter(|(_, value)| !ok(*value))
            .map(|(cell, _)| *cell),
    )
}

fn offending_values(cells: &[&str], numbers: &[f64], ok: impl Fn(f64) -> bool) -> ValueSample {
    sample(
        cells
            .iter()
            .zip(numbers)
            .filter(|(_, value)| !ok(**value))
            .map(|(cell, _)| *cell),
    )
}
