//! Validation harness errors.

use super::error_code::{self, BreachScanErrorCode};

/// Errors raised by the validation harness.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No overlapping ids between predictions and manual labels")]
    EmptyJoin,

    #[error("Sample size {requested} exceeds available rows ({available})")]
    SampleTooLarge { requested: usize, available: usize },

    #[error("Sample size must be greater than 0")]
    ZeroSample,

    #[error("Metrics requested for empty input")]
    EmptyInput,
}

impl BreachScanErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyJoin => error_code::EMPTY_JOIN,
            _ => error_code::VALIDATION_ERROR,
        }
    }
}
