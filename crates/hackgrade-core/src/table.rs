//! In-memory CSV tables
//!
//! Every input this toolkit reads is small enough to materialize fully, so a
//! table is a header row plus string cells. Typing happens later, per column,
//! in the validators that need it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GradeError, Result};

/// A fully-loaded CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from in-memory parts (for generated output)
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            path: PathBuf::new(),
            headers,
            rows,
        }
    }

    /// Read a CSV file with a header row.
    ///
    /// `role` names the file in the error raised when it does not exist,
    /// e.g. "predictions file".
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn read_csv(path: &Path, role: &str) -> Result<Self> {
        if !path.is_file() {
            return Err(GradeError::input_missing(role, path));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| GradeError::from_csv(path, e))?;

        let headers = reader
            .headers()
            .map_err(|e| GradeError::from_csv(path, e))?
            .iter()
            .map(str::to_string)
            .collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| GradeError::from_csv(path, e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(rows = rows.len(), "read_csv");

        Ok(Self {
            path: path.to_path_buf(),
            headers,
            rows,
        })
    }

    /// Write the table to `path`, replacing any existing file
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| GradeError::io_operation("create directory", parent.display(), e))?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Source path (empty for generated tables)
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// All values of a column, or a schema error naming this table's file
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| GradeError::missing_column(name, &self.path))?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
            .collect())
    }

    /// Rows whose `column` equals `value`, keeping headers and source path
    pub fn filter_eq(&self, column: &str, value: &str) -> Result<Table> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| GradeError::missing_column(column, &self.path))?;
        let rows = self
            .rows
            .iter()
            .filter(|row| row.get(idx).is_some_and(|cell| cell == value))
            .cloned()
            .collect();
        Ok(Table {
            path: self.path.clone(),
            headers: self.headers.clone(),
            rows,
        })
    }
}
