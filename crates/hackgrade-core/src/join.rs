//! Inner join of predictions onto labels

use std::collections::HashMap;

use crate::error::{KeyMismatch, Result};
use crate::validate::BinaryTable;

/// Suffix applied to prediction-side target columns
pub const PRED_SUFFIX: &str = "_pred";

/// Suffix applied to label-side target columns
pub const LABEL_SUFFIX: &str = "_label";

/// Predictions and labels aligned row by row on the join key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTable {
    pub key_column: String,
    pub keys: Vec<String>,
    columns: Vec<(String, Vec<u8>)>,
}

impl MergedTable {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Column names in output order (`<col>_pred`, then `<col>_label`)
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Values of a suffixed column
    pub fn column(&self, name: &str) -> Option<&[u8]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Prediction-side values for a target column
    pub fn predictions(&self, target: &str) -> Option<&[u8]> {
        self.column(&format!("{target}{PRED_SUFFIX}"))
    }

    /// Label-side values for a target column
    pub fn labels(&self, target: &str) -> Option<&[u8]> {
        self.column(&format!("{target}{LABEL_SUFFIX}"))
    }
}

/// Inner-join `predictions` to `labels` on their key column.
///
/// Output rows follow prediction order. Target columns present on both sides
/// are suffixed `_pred`/`_label`; a target present on only one side keeps its
/// name. The merged row count must equal the prediction row count, which
/// only fails when both sides repeat a key.
pub fn inner_join(predictions: &BinaryTable, labels: &BinaryTable) -> Result<MergedTable> {
    let mut label_rows: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, key) in labels.keys.iter().enumerate() {
        label_rows.entry(key.as_str()).or_default().push(idx);
    }

    let mut pairs = Vec::with_capacity(predictions.len());
    for (pred_idx, key) in predictions.keys.iter().enumerate() {
        if let Some(rows) = label_rows.get(key.as_str()) {
            pairs.extend(rows.iter().map(|&label_idx| (pred_idx, label_idx)));
        }
    }

    if pairs.len() != predictions.len() {
        return Err(KeyMismatch::JoinCardinality {
            merged: pairs.len(),
            expected: predictions.len(),
        }
        .into());
    }

    let mut columns = Vec::new();
    for column in &predictions.columns {
        let name = if labels.column(&column.name).is_some() {
            format!("{}{PRED_SUFFIX}", column.name)
        } else {
            column.name.clone()
        };
        let values = pairs.iter().map(|&(p, _)| column.values[p]).collect();
        columns.push((name, values));
    }
    for column in &labels.columns {
        let name = if predictions.column(&column.name).is_some() {
            format!("{}{LABEL_SUFFIX}", column.name)
        } else {
            column.name.clone()
        };
        let values = pairs.iter().map(|&(_, l)| column.values[l]).collect();
        columns.push((name, values));
    }

    let merged = MergedTable {
        key_column: predictions.key_column.clone(),
        keys: pairs
            .iter()
            .map(|&(p, _)| predictions.keys[p].clone())
            .collect(),
        columns,
    };

    tracing::debug!(
        rows = merged.len(),
        columns = ?merged.column_names().collect::<Vec<_>>(),
        "inner_join"
    );

    Ok(merged)
}
