//! Confusion matrices and derived metrics.

use serde::{Deserialize, Serialize};

use breachscan_core::types::BreachCategory;

/// Binary confusion counts for one category (or pooled across all).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
    pub true_negatives: u64,
}

impl ConfusionCounts {
    /// Record one (predicted, actual) cell.
    pub fn record(&mut self, predicted: bool, actual: bool) {
        match (predicted, actual) {
            (true, true) => self.true_positives += 1,
            (true, false) => self.false_positives += 1,
            (false, true) => self.false_negatives += 1,
            (false, false) => self.true_negatives += 1,
        }
    }

    /// Pool another matrix into this one.
    pub fn merge(&mut self, other: &ConfusionCounts) {
        self.true_positives += other.true_positives;
        self.false_positives += other.false_positives;
        self.false_negatives += other.false_negatives;
        self.true_negatives += other.true_negatives;
    }

    pub fn total(&self) -> u64 {
        self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
    }

    /// TP / (TP + FP). `None` when nothing was predicted positive.
    pub fn precision(&self) -> Option<f64> {
        let denom = self.true_positives + self.false_positives;
        (denom > 0).then(|| self.true_positives as f64 / denom as f64)
    }

    /// TP / (TP + FN). `None` when no actual positives exist.
    pub fn recall(&self) -> Option<f64> {
        let denom = self.true_positives + self.false_negatives;
        (denom > 0).then(|| self.true_positives as f64 / denom as f64)
    }

    /// Harmonic mean of precision and recall. `None` when either is
    /// undefined; 0 when both are defined but the classifier found no
    /// true positives.
    pub fn f1(&self) -> Option<f64> {
        match (self.precision(), self.recall()) {
            (Some(p), Some(r)) if p + r > 0.0 => Some(2.0 * p * r / (p + r)),
            (Some(_), Some(_)) => Some(0.0),
            _ => None,
        }
    }

    /// (TP + TN) / total. `None` for an empty matrix.
    pub fn accuracy(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| (self.true_positives + self.true_negatives) as f64 / total as f64)
    }
}

/// Confusion matrix and derived metrics for one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMetrics {
    pub category: BreachCategory,
    pub counts: ConfusionCounts,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

impl CategoryMetrics {
    pub fn from_counts(category: BreachCategory, counts: ConfusionCounts) -> Self {
        Self {
            category,
            precision: counts.precision(),
            recall: counts.recall(),
            f1: counts.f1(),
            counts,
        }
    }
}
