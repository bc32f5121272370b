//! Error types and exit codes for hackgrade
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args/config values)
//! - 3: Submission/data error (missing input, schema, domain or key mismatch)

mod macros;

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the hackgrade binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - the submission or labels were rejected (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Failure class of a [`GradeError`].
///
/// Callers branch on this instead of matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced file or directory does not exist
    InputMissing,
    /// A required column is absent
    Schema,
    /// A column is present but holds non-numeric, non-integral or non-binary values
    Domain,
    /// Prediction and label keys (or row counts) disagree
    KeyMismatch,
    /// Bad flags, arguments or configuration values
    Usage,
    /// Anything else (I/O, parse failures of auxiliary files)
    Failure,
}

/// A sorted set of join-key values, rendered as `{A, B}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet(pub BTreeSet<String>);

impl KeySet {
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeySet(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "}}")
    }
}

/// A short excerpt of column values embedded in domain errors, rendered as `[a, b]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSample(pub Vec<String>);

impl fmt::Display for ValueSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", value)?;
        }
        write!(f, "]")
    }
}

/// Disagreement between the prediction and label key sets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyMismatch {
    #[error("predictions have more keys than labels. Keys in predictions but not in labels: {extra}")]
    ExtraKeys { extra: KeySet },

    #[error("labels have more keys than predictions. Keys in labels but not in predictions: {missing}")]
    MissingKeys { missing: KeySet },

    #[error(
        "labels and predictions have different sets of keys. Keys in labels but not in predictions: {missing}. Keys in predictions but not in labels: {extra}"
    )]
    DisjointKeys { missing: KeySet, extra: KeySet },

    #[error(
        "labels and predictions have different numbers of rows. There should be one row per test set example in need of a prediction. predictions={predictions}; labels={labels}"
    )]
    RowCount { predictions: usize, labels: usize },

    #[error("joining predictions to labels produced {merged} rows, expected {expected}; keys must be unique")]
    JoinCardinality { merged: usize, expected: usize },
}

/// Errors that can occur while grading or generating submissions
#[derive(Error, Debug)]
pub enum GradeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Submission/data errors (exit code 3)
    #[error("{role} {} is not a file", .path.display())]
    InputMissing { role: String, path: PathBuf },

    #[error("`{column}` must be a column name in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("{}: line {line} has {found} fields, expected {expected}", .path.display())]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: u64,
        found: u64,
    },

    #[error("column `{column}` in {} does not consist of numbers: head={head}, offending={offending}", .path.display())]
    NonNumeric {
        column: String,
        path: PathBuf,
        head: ValueSample,
        offending: ValueSample,
    },

    #[error("column `{column}` in {} does not consist of integers: head={head}, offending={offending}", .path.display())]
    NonIntegral {
        column: String,
        path: PathBuf,
        head: ValueSample,
        offending: ValueSample,
    },

    #[error("column `{column}` in {} does not consist of 0s and 1s: head={head}, offending={offending}", .path.display())]
    NotBinary {
        column: String,
        path: PathBuf,
        head: ValueSample,
        offending: ValueSample,
    },

    #[error(transparent)]
    KeyMismatch(#[from] KeyMismatch),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GradeError {
    /// Create an error for a file or directory that does not exist
    pub fn input_missing(role: &str, path: impl Into<PathBuf>) -> Self {
        GradeError::InputMissing {
            role: role.to_string(),
            path: path.into(),
        }
    }

    /// Create an error for a required column that is absent
    pub fn missing_column(column: &str, path: impl Into<PathBuf>) -> Self {
        GradeError::MissingColumn {
            column: column.to_string(),
            path: path.into(),
        }
    }

    /// Attribute a CSV read failure to `path`; ragged rows become schema errors
    pub fn from_csv(path: &std::path::Path, error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => GradeError::RaggedRow {
                path: path.to_path_buf(),
                line: pos.as_ref().map_or(0, |p| p.line()),
                expected: *expected_len,
                found: *len,
            },
            _ => GradeError::Csv(error),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GradeError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GradeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GradeError::UnknownFormat(_)
            | GradeError::UsageError(_)
            | GradeError::InvalidValue { .. } => ErrorKind::Usage,

            GradeError::InputMissing { .. } => ErrorKind::InputMissing,
            GradeError::MissingColumn { .. } | GradeError::RaggedRow { .. } => ErrorKind::Schema,
            GradeError::NonNumeric { .. }
            | GradeError::NonIntegral { .. }
            | GradeError::NotBinary { .. } => ErrorKind::Domain,
            GradeError::KeyMismatch(_) => ErrorKind::KeyMismatch,

            GradeError::Io(_)
            | GradeError::Csv(_)
            | GradeError::Json(_)
            | GradeError::Toml(_)
            | GradeError::FailedOperationWithTarget { .. }
            | GradeError::Other(_) => ErrorKind::Failure,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ErrorKind::Usage => ExitCode::Usage,
            ErrorKind::InputMissing
            | ErrorKind::Schema
            | ErrorKind::Domain
            | ErrorKind::KeyMismatch => ExitCode::Data,
            ErrorKind::Failure => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GradeError::UnknownFormat(_) => "unknown_format",
            GradeError::UsageError(_) => "usage_error",
            GradeError::InvalidValue { .. } => "invalid_value",
            GradeError::InputMissing { .. } => "input_missing",
            GradeError::MissingColumn { .. } => "missing_column",
            GradeError::RaggedRow { .. } => "ragged_row",
            GradeError::NonNumeric { .. } => "non_numeric",
            GradeError::NonIntegral { .. } => "non_integral",
            GradeError::NotBinary { .. } => "not_binary",
            GradeError::KeyMismatch(mismatch) => match mismatch {
                KeyMismatch::ExtraKeys { .. } => "extra_keys",
                KeyMismatch::MissingKeys { .. } => "missing_keys",
                KeyMismatch::DisjointKeys { .. } => "disjoint_keys",
                KeyMismatch::RowCount { .. } => "row_count_mismatch",
                KeyMismatch::JoinCardinality { .. } => "join_cardinality",
            },
            GradeError::Io(_) => "io_error",
            GradeError::Csv(_) => "csv_error",
            GradeError::Json(_) => "json_error",
            GradeError::Toml(_) => "toml_error",
            GradeError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GradeError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for hackgrade operations
pub type Result<T> = std::result::Result<T, GradeError>;
