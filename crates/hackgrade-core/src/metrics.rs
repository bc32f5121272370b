//! Binary classification metrics
//!
//! Arguments are always `(labels, predictions)` and the positive class is 1.

use std::fmt;

/// Confusion-matrix counts for a binary classifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub true_negatives: usize,
}

impl ConfusionCounts {
    /// Tally counts over aligned label/prediction slices
    pub fn from_slices(labels: &[u8], predictions: &[u8]) -> Self {
        debug_assert_eq!(labels.len(), predictions.len());
        let mut counts = Self::default();
        for (&label, &pred) in labels.iter().zip(predictions) {
            match (label == 1, pred == 1) {
                (true, true) => counts.true_positives += 1,
                (false, true) => counts.false_positives += 1,
                (true, false) => counts.false_negatives += 1,
                (false, false) => counts.true_negatives += 1,
            }
        }
        counts
    }

    pub fn precision(&self) -> f64 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }

    pub fn recall(&self) -> f64 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }

    /// `2·TP / (2·TP + FP + FN)`; 0.0 when there are no positives at all
    pub fn f1(&self) -> f64 {
        let tp2 = 2 * self.true_positives;
        ratio(tp2, tp2 + self.false_positives + self.false_negatives)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Metrics reported in a grading table, one row each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    F1,
}

impl Metric {
    /// Every metric a grading run reports, in row order
    pub const ALL: [Metric; 1] = [Metric::F1];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::F1 => "f1",
        }
    }

    /// Score `predictions` against `labels`
    pub fn compute(&self, labels: &[u8], predictions: &[u8]) -> f64 {
        let counts = ConfusionCounts::from_slices(labels, predictions);
        match self {
            Metric::F1 => {
                if counts.true_positives + counts.false_positives + counts.false_negatives == 0 {
                    tracing::warn!(
                        metric = self.name(),
                        "no positive labels or predictions; score set to 0.0"
                    );
                }
                counts.f1()
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// F1 score of `predictions` against `labels`
pub fn f1_score(labels: &[u8], predictions: &[u8]) -> f64 {
    Metric::F1.compute(labels, predictions)
}
