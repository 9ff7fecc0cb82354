//! Ingestion errors.

use std::path::PathBuf;

use super::error_code::{self, BreachScanErrorCode};

/// Errors that can occur while reading breach, label, or market CSVs.
///
/// Per-row data problems are not errors; they become data-quality
/// issues on the ingest result. These variants are the hard failures.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("IO error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {message}")]
    CsvError { path: PathBuf, message: String },

    #[error("JSON error in {path}: {message}")]
    JsonError { path: PathBuf, message: String },

    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Empty input: {path} has a header but no data rows")]
    EmptyInput { path: PathBuf },

    #[error("Duplicate row id '{id}' in {path}")]
    DuplicateId { path: PathBuf, id: String },
}

impl BreachScanErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingColumn { .. } => error_code::MISSING_COLUMN,
            _ => error_code::INGEST_ERROR,
        }
    }
}
