//! Event study errors.

use super::error_code::{self, BreachScanErrorCode};

/// Errors raised by the event study and asymmetry analyses.
///
/// Per-event attrition (missing market link, short estimation window)
/// is accounted, not raised; these are whole-run failures.
#[derive(Debug, thiserror::Error)]
pub enum StudyError {
    #[error("No events with usable market data (of {total} candidates)")]
    NoUsableEvents { total: usize },

    #[error("Market data contains no rows for any event firm")]
    NoMarketOverlap,

    #[error("Invalid event window [{start}, {end}]")]
    InvalidWindow { start: i64, end: i64 },

    #[error("Estimation window [{start}, {end}] must end before the event")]
    InvalidEstimationWindow { start: i64, end: i64 },
}

impl BreachScanErrorCode for StudyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoUsableEvents { .. } => error_code::NO_USABLE_EVENTS,
            _ => error_code::STUDY_ERROR,
        }
    }
}
