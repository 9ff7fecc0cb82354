//! CSV readers for breach, manual-label, and market data.
//!
//! All three readers follow the same contract: structural problems
//! (missing file, missing required column, unreadable CSV, duplicate
//! keys, empty body) are hard `IngestError`s; per-row data problems
//! drop the bad value or skip the row and are recorded as issues on
//! the returned `PipelineResult`.

pub mod breaches;
pub mod labels;
pub mod market;
pub mod sanitize;

pub use breaches::read_breaches;
pub use labels::read_labels;
pub use market::read_market;

use std::fs::File;
use std::path::Path;

use breachscan_core::errors::IngestError;

/// Open a CSV reader over a file, trimming cells and tolerating
/// ragged rows (missing trailing cells read as absent).
pub(crate) fn open_reader(path: &Path) -> Result<csv::Reader<File>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file))
}

/// Resolve a column name to its header position, case-insensitively.
pub(crate) fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Resolve a required column or fail with `MissingColumn`.
pub(crate) fn require_column(
    headers: &csv::StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, IngestError> {
    find_column(headers, name).ok_or_else(|| IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: name.to_string(),
    })
}

/// Read the header row, mapping CSV failures to `CsvError`.
pub(crate) fn read_headers(
    reader: &mut csv::Reader<File>,
    path: &Path,
) -> Result<csv::StringRecord, IngestError> {
    reader
        .headers()
        .map(|h| h.clone())
        .map_err(|e| IngestError::CsvError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
