//! Severity score banded from affected-record counts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{SEVERITY_BANDS, SEVERITY_MAX};

/// Severity score in [0, 5].
///
/// 0 means the record count is unknown or zero; 1 through 5 are the
/// magnitude bands with lower bounds 1 / 1,000 / 10,000 / 100,000 /
/// 1,000,000 affected records. Monotone in the count by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(u8);

impl Severity {
    /// Create a severity, clamped to [0, 5].
    pub fn new(value: u8) -> Self {
        Self(value.min(SEVERITY_MAX))
    }

    /// Band a record count into a severity score.
    pub fn from_records(records: Option<u64>) -> Self {
        let count = match records {
            Some(c) if c > 0 => c,
            _ => return Self(0),
        };
        let band = SEVERITY_BANDS.iter().filter(|&&lo| count >= lo).count() as u8;
        Self(band)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// True for the top two bands (100,000+ affected records).
    pub fn is_high(&self) -> bool {
        self.0 >= 4
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
