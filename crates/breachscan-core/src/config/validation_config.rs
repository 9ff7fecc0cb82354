//! Validation harness configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SAMPLE_SEED, DEFAULT_SAMPLE_SIZE};

/// Configuration for the validation harness.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// Sample size for manual coding. Default: 100.
    pub sample_size: Option<usize>,
    /// Deterministic sampling seed. Default: 42.
    pub sample_seed: Option<u64>,
    /// Acceptance threshold: minimum macro-averaged F1 over defined
    /// categories. Default: no threshold.
    pub min_macro_f1: Option<f64>,
    /// Acceptance threshold: minimum recall for every category with
    /// defined recall. Default: no threshold.
    pub min_category_recall: Option<f64>,
}

impl ValidationConfig {
    /// Returns the effective sample size, defaulting to 100.
    pub fn effective_sample_size(&self) -> usize {
        self.sample_size.unwrap_or(DEFAULT_SAMPLE_SIZE)
    }

    /// Returns the effective sampling seed, defaulting to 42.
    pub fn effective_sample_seed(&self) -> u64 {
        self.sample_seed.unwrap_or(DEFAULT_SAMPLE_SEED)
    }

    /// True when at least one acceptance threshold is configured.
    pub fn has_thresholds(&self) -> bool {
        self.min_macro_f1.is_some() || self.min_category_recall.is_some()
    }
}
