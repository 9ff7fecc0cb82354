//! Classifier output types.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::category::BreachCategory;
use super::flags::CategoryFlags;
use super::severity::Severity;

/// A keyword hit recorded for audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedKeyword {
    pub category: BreachCategory,
    pub keyword: String,
}

/// The label vector produced for one breach record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Row id of the classified record.
    pub id: String,
    /// One flag per category.
    pub flags: CategoryFlags,
    /// Severity band of the affected-record count.
    pub severity: Severity,
    /// True when the flag count reaches the complex-breach threshold.
    pub complex: bool,
    /// Keywords that fired, in match order. Usually short.
    pub matched: SmallVec<[MatchedKeyword; 4]>,
}

impl Classification {
    /// An all-zero classification for a record with no matchable text.
    pub fn empty(id: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: id.into(),
            flags: CategoryFlags::none(),
            severity,
            complex: false,
            matched: SmallVec::new(),
        }
    }
}
