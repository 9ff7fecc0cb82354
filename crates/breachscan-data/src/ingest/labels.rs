//! Manual-label CSV reader for the validation harness.

use std::path::Path;

use tracing::{info, warn};

use breachscan_core::constants::{CATEGORY_COUNT, DEFAULT_ID_COLUMN};
use breachscan_core::errors::{DataIssue, DataIssueKind, IngestError, PipelineResult};
use breachscan_core::types::{BreachCategory, CategoryFlags, FxHashSet, ManualLabels};

use super::sanitize::{clean_cell, parse_flag};
use super::{open_reader, read_headers, require_column};

/// Read a human-coded label sheet: an `id` column plus one 0/1 column
/// per category, named by the canonical category names.
///
/// Blank flag cells read as 0 (coders usually leave negatives empty).
/// A flag cell that is anything other than 0, 1, or blank skips the row
/// with a `BadFlag` issue. All eleven columns are required.
pub fn read_labels(path: &Path) -> Result<PipelineResult<Vec<ManualLabels>>, IngestError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;

    let id_idx = require_column(&headers, DEFAULT_ID_COLUMN, path)?;
    let mut flag_idx = [0usize; CATEGORY_COUNT];
    for cat in BreachCategory::all() {
        flag_idx[cat.index()] = require_column(&headers, cat.name(), path)?;
    }

    let mut result: PipelineResult<Vec<ManualLabels>> = PipelineResult::default();
    let mut seen_ids: FxHashSet<String> = FxHashSet::default();
    let mut rows_seen = 0u64;

    'rows: for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        rows_seen += 1;
        let line = record.position().map(|p| p.line());

        let id = match clean_cell(record.get(id_idx)) {
            Some(id) => id.to_string(),
            None => {
                result.add_issue(DataIssue {
                    line,
                    row_id: None,
                    kind: DataIssueKind::BlankId,
                    value: String::new(),
                });
                continue;
            }
        };
        if !seen_ids.insert(id.clone()) {
            return Err(IngestError::DuplicateId {
                path: path.to_path_buf(),
                id,
            });
        }

        let mut flags = CategoryFlags::none();
        for cat in BreachCategory::all() {
            match clean_cell(record.get(flag_idx[cat.index()])) {
                None => {} // blank counts as 0
                Some(raw) => match parse_flag(raw) {
                    Some(false) => {}
                    Some(true) => flags.set(*cat),
                    None => {
                        result.add_issue(DataIssue {
                            line,
                            row_id: Some(id),
                            kind: DataIssueKind::BadFlag,
                            value: raw.to_string(),
                        });
                        continue 'rows;
                    }
                },
            }
        }

        result.data.push(ManualLabels { id, flags });
    }

    if rows_seen == 0 {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    if !result.is_clean() {
        warn!(
            issues = result.issue_count(),
            "data-quality issues while reading {}",
            path.display()
        );
    }
    info!(
        rows = result.data.len(),
        "read manual labels from {}",
        path.display()
    );
    Ok(result)
}
