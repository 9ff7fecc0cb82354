//! BreachScanErrorCode trait for CLI-facing error codes.

/// Trait for converting breachscan errors to stable error code strings.
/// Every error enum must implement this so the CLI can print a
/// structured `[ERROR_CODE] message` line and exit.
pub trait BreachScanErrorCode {
    /// Returns the error code string (e.g., "INGEST_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants surfaced at the CLI boundary.
pub const INGEST_ERROR: &str = "INGEST_ERROR";
pub const MISSING_COLUMN: &str = "MISSING_COLUMN";
pub const DICTIONARY_ERROR: &str = "DICTIONARY_ERROR";
pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const EMPTY_JOIN: &str = "EMPTY_JOIN";
pub const STUDY_ERROR: &str = "STUDY_ERROR";
pub const NO_USABLE_EVENTS: &str = "NO_USABLE_EVENTS";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const UNKNOWN_FORMAT: &str = "UNKNOWN_FORMAT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PIPELINE_ERROR: &str = "PIPELINE_ERROR";
