//! Breach record and manual label row types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::flags::CategoryFlags;

/// A single breach disclosure row after ingestion and sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachRecord {
    /// Stable row identifier from the source data.
    pub id: String,
    /// Ticker of the breached firm, when the breach maps to a listed firm.
    pub firm: Option<String>,
    /// Date the breach was publicly disclosed.
    pub disclosed: Option<NaiveDate>,
    /// Date the breach was discovered internally.
    pub discovered: Option<NaiveDate>,
    /// Free-text incident description.
    pub description: Option<String>,
    /// Number of records affected, when reported and parseable.
    pub records_affected: Option<u64>,
}

impl BreachRecord {
    /// Days between discovery and disclosure, when both dates are known.
    /// Negative when the disclosure predates the recorded discovery.
    pub fn disclosure_lag_days(&self) -> Option<i64> {
        match (self.discovered, self.disclosed) {
            (Some(found), Some(told)) => Some((told - found).num_days()),
            _ => None,
        }
    }
}

/// Human-coded ground-truth flags for one breach, keyed by row id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualLabels {
    pub id: String,
    pub flags: CategoryFlags,
}
