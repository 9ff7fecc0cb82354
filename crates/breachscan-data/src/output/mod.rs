//! Writers and readers for the augmented classification output.
//!
//! The augmented layout is one row per breach: the identifying columns,
//! one 0/1 column per category in canonical order, then severity,
//! complex_breach, and the matched keywords for audit. Column order is
//! fixed so diffs between runs stay meaningful.

pub mod csv;
pub mod json;
pub mod sample;

pub use csv::{read_classified_csv, write_classified_csv};
pub use json::{read_classified_json, write_classified_json};
pub use sample::write_sample_csv;

use std::path::Path;

use breachscan_core::errors::{IngestError, PipelineResult};
use breachscan_core::types::Classification;

/// Identifying columns ahead of the ten category flag columns.
pub const AUGMENTED_LEAD_COLUMNS: [&str; 5] = [
    "id",
    "ticker",
    "disclosure_date",
    "discovery_date",
    "records_affected",
];

/// Columns after the flags.
pub const AUGMENTED_TAIL_COLUMNS: [&str; 3] = ["severity", "complex_breach", "matched_keywords"];

/// Read classifier output, choosing the reader by file extension
/// (`.json` for the JSON layout, anything else reads as CSV).
pub fn read_classified(path: &Path) -> Result<PipelineResult<Vec<Classification>>, IngestError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        read_classified_json(path)
    } else {
        read_classified_csv(path)
    }
}
