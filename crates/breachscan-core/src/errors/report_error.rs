//! Report generation errors.

use std::path::PathBuf;

use super::error_code::{self, BreachScanErrorCode};

/// Errors raised while rendering or writing reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Unknown report format '{format}' (available: {available})")]
    UnknownFormat { format: String, available: String },

    #[error("Report rendering failed ({format}): {message}")]
    RenderFailed { format: String, message: String },

    #[error("IO error writing report {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl BreachScanErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownFormat { .. } => error_code::UNKNOWN_FORMAT,
            _ => error_code::REPORT_ERROR,
        }
    }
}
