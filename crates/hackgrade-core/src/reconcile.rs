//! Key-set reconciliation between predictions and labels
//!
//! The superset checks run before the generic symmetric-difference check so
//! a submission that merely adds or drops entities gets the more specific
//! message.

use std::collections::BTreeSet;

use crate::error::{KeyMismatch, KeySet, Result};
use crate::validate::BinaryTable;

/// Fail unless predictions and labels cover exactly the same keys with the
/// same number of rows.
pub fn reconcile_keys(predictions: &BinaryTable, labels: &BinaryTable) -> Result<()> {
    check_key_sets(&predictions.keys, &labels.keys)?;
    tracing::debug!(
        keys = predictions.len(),
        key_column = %predictions.key_column,
        "reconcile_keys"
    );
    Ok(())
}

/// Compare raw key columns; split out of [`reconcile_keys`] so callers with
/// plain key lists can reuse it.
pub fn check_key_sets<S: AsRef<str>>(
    prediction_keys: &[S],
    label_keys: &[S],
) -> std::result::Result<(), KeyMismatch> {
    let pred: BTreeSet<&str> = prediction_keys.iter().map(|key| key.as_ref()).collect();
    let label: BTreeSet<&str> = label_keys.iter().map(|key| key.as_ref()).collect();

    let extra: KeySet = pred.difference(&label).copied().collect();
    let missing: KeySet = label.difference(&pred).copied().collect();

    if missing.is_empty() && !extra.is_empty() {
        return Err(KeyMismatch::ExtraKeys { extra });
    }
    if extra.is_empty() && !missing.is_empty() {
        return Err(KeyMismatch::MissingKeys { missing });
    }
    if !extra.is_empty() || !missing.is_empty() {
        return Err(KeyMismatch::DisjointKeys { missing, extra });
    }

    if prediction_keys.len() != label_keys.len() {
        return Err(KeyMismatch::RowCount {
            predictions: prediction_keys.len(),
            labels: label_keys.len(),
        });
    }

    Ok(())
}
