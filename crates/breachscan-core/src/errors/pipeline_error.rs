//! Pipeline errors and non-fatal data-quality accumulation.

use serde::{Deserialize, Serialize};

use super::error_code::BreachScanErrorCode;
use super::{
    ConfigError, DictionaryError, IngestError, ReportError, StudyError, ValidationError,
};

/// Errors that can occur during a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Study error: {0}")]
    Study(#[from] StudyError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BreachScanErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Ingest(e) => e.error_code(),
            Self::Dictionary(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Study(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// A non-fatal data-quality problem found in one input row.
///
/// Dirty rows never abort a run: the bad value is dropped to `None`
/// (or the row is skipped, for issues that leave no usable key) and
/// the issue is recorded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataIssue {
    /// 1-based line in the source file, when the reader knows it.
    pub line: Option<u64>,
    /// Row id, when the row had one.
    pub row_id: Option<String>,
    pub kind: DataIssueKind,
    /// The offending raw value.
    pub value: String,
}

/// What went wrong with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataIssueKind {
    /// Record count did not parse even after coercion; stored as `None`.
    BadRecordCount,
    /// Date did not parse with the configured format; stored as `None`.
    BadDate,
    /// Row skipped: blank or missing id.
    BlankId,
    /// Market row skipped: a return column did not parse as a number.
    BadReturn,
    /// Label row skipped: a flag column was not 0 or 1.
    BadFlag,
    /// Classified row skipped: severity or complex cell did not parse.
    BadSeverity,
}

impl DataIssueKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BadRecordCount => "bad_record_count",
            Self::BadDate => "bad_date",
            Self::BlankId => "blank_id",
            Self::BadReturn => "bad_return",
            Self::BadFlag => "bad_flag",
            Self::BadSeverity => "bad_severity",
        }
    }
}

/// Result of a pipeline stage that accumulates non-fatal issues.
/// Lets a stage return partial data even when some rows are dirty.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal data-quality issues collected during the stage.
    pub issues: Vec<DataIssue>,
}

impl<T: Default> PipelineResult<T> {
    /// Create a new result with no issues.
    pub fn new(data: T) -> Self {
        Self {
            data,
            issues: Vec::new(),
        }
    }

    /// Record a non-fatal issue.
    pub fn add_issue(&mut self, issue: DataIssue) {
        self.issues.push(issue);
    }

    /// Returns true if no issues were recorded.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the number of recorded issues.
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}
