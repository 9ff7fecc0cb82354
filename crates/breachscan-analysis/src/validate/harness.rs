//! Metrics harness: join predictions to manual labels and score them.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::{info, warn};

use breachscan_core::config::ValidationConfig;
use breachscan_core::constants::CATEGORY_COUNT;
use breachscan_core::errors::ValidationError;
use breachscan_core::types::{BreachCategory, Classification, ManualLabels};

use super::confusion::{CategoryMetrics, ConfusionCounts};

/// Verdict for one configured acceptance threshold.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdVerdict {
    /// Threshold identifier, kebab-case.
    pub name: &'static str,
    pub threshold: f64,
    /// The value the threshold was checked against.
    pub observed: Option<f64>,
    pub passed: bool,
    pub summary: String,
}

/// Aggregate validation metrics over the joined rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationMetrics {
    /// Rows scored (id present on both sides of the join).
    pub scored_rows: usize,
    /// Prediction ids with no manual label.
    pub predictions_only: usize,
    /// Label ids with no prediction.
    pub labels_only: usize,
    pub per_category: Vec<CategoryMetrics>,
    /// Averages over categories whose metric is defined.
    pub macro_precision: Option<f64>,
    pub macro_recall: Option<f64>,
    pub macro_f1: Option<f64>,
    /// Counts pooled across all category cells.
    pub micro: ConfusionCounts,
    pub micro_precision: Option<f64>,
    pub micro_recall: Option<f64>,
    pub micro_f1: Option<f64>,
    /// Pooled cell accuracy.
    pub accuracy: Option<f64>,
    /// One verdict per configured threshold; empty without thresholds.
    pub verdicts: Vec<ThresholdVerdict>,
}

impl ValidationMetrics {
    /// True when every configured threshold passed. Vacuously true
    /// without thresholds.
    pub fn all_passed(&self) -> bool {
        self.verdicts.iter().all(|v| v.passed)
    }
}

/// Score classifier output against manual labels.
///
/// Ids present on only one side are counted, not scored; duplicate ids
/// were already rejected by the readers.
pub fn evaluate(
    predictions: &[Classification],
    labels: &[ManualLabels],
    config: &ValidationConfig,
) -> Result<ValidationMetrics, ValidationError> {
    if predictions.is_empty() || labels.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let by_id: FxHashMap<&str, &ManualLabels> =
        labels.iter().map(|l| (l.id.as_str(), l)).collect();

    let mut matrices = [ConfusionCounts::default(); CATEGORY_COUNT];
    let mut scored_rows = 0usize;
    let mut predictions_only = 0usize;
    for prediction in predictions {
        match by_id.get(prediction.id.as_str()) {
            Some(label) => {
                scored_rows += 1;
                for cat in BreachCategory::all() {
                    matrices[cat.index()]
                        .record(prediction.flags.get(*cat), label.flags.get(*cat));
                }
            }
            None => predictions_only += 1,
        }
    }

    let predicted_ids: FxHashSet<&str> =
        predictions.iter().map(|p| p.id.as_str()).collect();
    let labels_only = labels
        .iter()
        .filter(|l| !predicted_ids.contains(l.id.as_str()))
        .count();

    if scored_rows == 0 {
        return Err(ValidationError::EmptyJoin);
    }
    if predictions_only > 0 || labels_only > 0 {
        warn!(
            predictions_only,
            labels_only, "ids present on only one side of the validation join"
        );
    }

    let per_category: Vec<CategoryMetrics> = BreachCategory::all()
        .iter()
        .map(|cat| CategoryMetrics::from_counts(*cat, matrices[cat.index()]))
        .collect();

    let macro_precision = mean_defined(per_category.iter().map(|m| m.precision));
    let macro_recall = mean_defined(per_category.iter().map(|m| m.recall));
    let macro_f1 = mean_defined(per_category.iter().map(|m| m.f1));

    let mut micro = ConfusionCounts::default();
    for matrix in &matrices {
        micro.merge(matrix);
    }

    let verdicts = build_verdicts(&per_category, macro_f1, config);

    info!(
        scored_rows,
        predictions_only,
        labels_only,
        macro_f1 = macro_f1.unwrap_or(f64::NAN),
        "validation metrics computed"
    );

    Ok(ValidationMetrics {
        scored_rows,
        predictions_only,
        labels_only,
        per_category,
        macro_precision,
        macro_recall,
        macro_f1,
        micro_precision: micro.precision(),
        micro_recall: micro.recall(),
        micro_f1: micro.f1(),
        accuracy: micro.accuracy(),
        micro,
        verdicts,
    })
}

/// Mean over the defined values; `None` when none are defined.
fn mean_defined(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let defined: Vec<f64> = values.flatten().collect();
    (!defined.is_empty()).then(|| defined.iter().sum::<f64>() / defined.len() as f64)
}

fn build_verdicts(
    per_category: &[CategoryMetrics],
    macro_f1: Option<f64>,
    config: &ValidationConfig,
) -> Vec<ThresholdVerdict> {
    let mut verdicts = Vec::new();

    if let Some(threshold) = config.min_macro_f1 {
        let passed = macro_f1.is_some_and(|f| f >= threshold);
        let summary = match macro_f1 {
            Some(f) => format!("macro F1 {f:.3} vs minimum {threshold:.3}"),
            None => "macro F1 undefined".to_string(),
        };
        verdicts.push(ThresholdVerdict {
            name: "min-macro-f1",
            threshold,
            observed: macro_f1,
            passed,
            summary,
        });
    }

    if let Some(threshold) = config.min_category_recall {
        let defined: Vec<(&'static str, f64)> = per_category
            .iter()
            .filter_map(|m| m.recall.map(|r| (m.category.name(), r)))
            .collect();
        let failing: Vec<&str> = defined
            .iter()
            .filter(|(_, r)| *r < threshold)
            .map(|(name, _)| *name)
            .collect();
        let observed = defined.iter().map(|(_, r)| *r).reduce(f64::min);
        let passed = !defined.is_empty() && failing.is_empty();
        let summary = if defined.is_empty() {
            "no category has defined recall".to_string()
        } else if failing.is_empty() {
            format!(
                "all {} categories with defined recall at or above {threshold:.3}",
                defined.len()
            )
        } else {
            format!("below {threshold:.3}: {}", failing.join(", "))
        };
        verdicts.push(ThresholdVerdict {
            name: "min-category-recall",
            threshold,
            observed,
            passed,
            summary,
        });
    }

    verdicts
}
