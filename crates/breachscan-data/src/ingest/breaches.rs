//! Breach disclosure CSV reader.

use std::path::Path;

use tracing::{debug, info, warn};

use breachscan_core::config::IngestConfig;
use breachscan_core::errors::{DataIssue, DataIssueKind, IngestError, PipelineResult};
use breachscan_core::types::{BreachRecord, FxHashSet};

use super::sanitize::{clean_cell, parse_date, parse_record_count};
use super::{find_column, open_reader, read_headers, require_column};

/// Header positions resolved for the configured column names.
/// Only the id column must exist; the rest degrade to absent fields.
struct ColumnMap {
    id: usize,
    firm: Option<usize>,
    disclosed: Option<usize>,
    discovered: Option<usize>,
    description: Option<usize>,
    records: Option<usize>,
}

/// Read and sanitize a breach disclosure CSV.
///
/// Dirty rows never abort the read: unparseable dates and record counts
/// drop to `None`, rows without an id are skipped, and each such case is
/// recorded as an issue on the result. Hard failures are a missing file,
/// an unreadable CSV, a missing id column, a duplicate id, or a file
/// with no data rows at all.
pub fn read_breaches(
    path: &Path,
    config: &IngestConfig,
) -> Result<PipelineResult<Vec<BreachRecord>>, IngestError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;

    let columns = ColumnMap {
        id: require_column(&headers, config.effective_id_column(), path)?,
        firm: find_column(&headers, config.effective_firm_column()),
        disclosed: find_column(&headers, config.effective_disclosed_column()),
        discovered: find_column(&headers, config.effective_discovered_column()),
        description: find_column(&headers, config.effective_description_column()),
        records: find_column(&headers, config.effective_records_column()),
    };
    let date_format = config.effective_date_format();
    debug!(
        firm = columns.firm.is_some(),
        disclosed = columns.disclosed.is_some(),
        discovered = columns.discovered.is_some(),
        description = columns.description.is_some(),
        records = columns.records.is_some(),
        "resolved breach columns in {}",
        path.display()
    );

    let mut result: PipelineResult<Vec<BreachRecord>> = PipelineResult::default();
    let mut seen_ids: FxHashSet<String> = FxHashSet::default();
    let mut rows_seen = 0u64;

    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        rows_seen += 1;
        let line = record.position().map(|p| p.line());
        let cell = |idx: Option<usize>| idx.and_then(|i| clean_cell(record.get(i)));

        let id = match clean_cell(record.get(columns.id)) {
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

        let date_field = |idx: Option<usize>, issues: &mut Vec<DataIssue>| match cell(idx) {
            Some(raw) => match parse_date(raw, date_format) {
                Some(d) => Some(d),
                None => {
                    issues.push(DataIssue {
                        line,
                        row_id: Some(id.clone()),
                        kind: DataIssueKind::BadDate,
                        value: raw.to_string(),
                    });
                    None
                }
            },
            None => None,
        };
        let disclosed = date_field(columns.disclosed, &mut result.issues);
        let discovered = date_field(columns.discovered, &mut result.issues);

        let records_affected = match cell(columns.records) {
            Some(raw) => match parse_record_count(raw) {
                Some(n) => Some(n),
                None => {
                    result.add_issue(DataIssue {
                        line,
                        row_id: Some(id.clone()),
                        kind: DataIssueKind::BadRecordCount,
                        value: raw.to_string(),
                    });
                    None
                }
            },
            None => None,
        };

        result.data.push(BreachRecord {
            firm: cell(columns.firm).map(|s| s.to_string()),
            description: cell(columns.description).map(|s| s.to_string()),
            id,
            disclosed,
            discovered,
            records_affected,
        });
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
        skipped = rows_seen as usize - result.data.len(),
        "read breach records from {}",
        path.display()
    );
    Ok(result)
}
