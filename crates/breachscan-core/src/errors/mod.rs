//! Error handling for breachscan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod dictionary_error;
pub mod error_code;
pub mod ingest_error;
pub mod pipeline_error;
pub mod report_error;
pub mod study_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use dictionary_error::DictionaryError;
pub use error_code::BreachScanErrorCode;
pub use ingest_error::IngestError;
pub use pipeline_error::{DataIssue, DataIssueKind, PipelineError, PipelineResult};
pub use report_error::ReportError;
pub use study_error::StudyError;
pub use validation_error::ValidationError;
