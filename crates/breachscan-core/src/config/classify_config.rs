//! Classifier configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_COMPLEX_MIN_CATEGORIES;

/// Configuration for the keyword classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Path to a TOML keyword dictionary that replaces the builtin
    /// table. Default: builtin dictionary.
    pub dictionary_path: Option<String>,
    /// Minimum set category flags for a breach to count as complex.
    /// Default: 2.
    pub complex_min_categories: Option<u32>,
}

impl ClassifyConfig {
    /// Returns the effective complex-breach threshold, defaulting to 2.
    pub fn effective_complex_min(&self) -> u32 {
        self.complex_min_categories.unwrap_or(DEFAULT_COMPLEX_MIN_CATEGORIES)
    }
}
