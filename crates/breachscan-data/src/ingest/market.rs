//! Market-data CSV reader.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{info, warn};

use breachscan_core::constants::{
    MARKET_DATE_COLUMN, MARKET_FIRM_COLUMN, MARKET_INDEX_COLUMN, MARKET_RETURN_COLUMN,
    MARKET_VOLUME_COLUMN,
};
use breachscan_core::errors::{DataIssue, DataIssueKind, IngestError, PipelineResult};
use breachscan_core::types::{FxHashSet, MarketRow};

use super::sanitize::{clean_cell, parse_date, parse_return};
use super::{find_column, open_reader, read_headers, require_column};

/// Read a firm-day market data CSV: ticker, date, daily return, index
/// return, and optional share volume.
///
/// Rows missing a ticker, a parseable date, or a parseable return are
/// skipped with an issue; a bad volume cell drops to `None` but keeps
/// the row. A repeated (ticker, date) pair is a hard failure since it
/// would silently bias the estimation windows.
pub fn read_market(
    path: &Path,
    date_format: &str,
) -> Result<PipelineResult<Vec<MarketRow>>, IngestError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;

    let firm_idx = require_column(&headers, MARKET_FIRM_COLUMN, path)?;
    let date_idx = require_column(&headers, MARKET_DATE_COLUMN, path)?;
    let ret_idx = require_column(&headers, MARKET_RETURN_COLUMN, path)?;
    let mkt_idx = require_column(&headers, MARKET_INDEX_COLUMN, path)?;
    let volume_idx = find_column(&headers, MARKET_VOLUME_COLUMN);

    let mut result: PipelineResult<Vec<MarketRow>> = PipelineResult::default();
    let mut seen: FxHashSet<(String, NaiveDate)> = FxHashSet::default();
    let mut rows_seen = 0u64;

    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        rows_seen += 1;
        let line = record.position().map(|p| p.line());

        let firm = match clean_cell(record.get(firm_idx)) {
            Some(f) => f.to_string(),
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

        let raw_date = clean_cell(record.get(date_idx)).unwrap_or("");
        let date = match parse_date(raw_date, date_format) {
            Some(d) => d,
            None => {
                result.add_issue(DataIssue {
                    line,
                    row_id: Some(firm),
                    kind: DataIssueKind::BadDate,
                    value: raw_date.to_string(),
                });
                continue;
            }
        };

        let ret_field = |idx: usize, issues: &mut Vec<DataIssue>| -> Option<f64> {
            let raw = clean_cell(record.get(idx)).unwrap_or("");
            match parse_return(raw) {
                Some(v) => Some(v),
                None => {
                    issues.push(DataIssue {
                        line,
                        row_id: Some(firm.clone()),
                        kind: DataIssueKind::BadReturn,
                        value: raw.to_string(),
                    });
                    None
                }
            }
        };
        let ret = match ret_field(ret_idx, &mut result.issues) {
            Some(v) => v,
            None => continue,
        };
        let mkt_ret = match ret_field(mkt_idx, &mut result.issues) {
            Some(v) => v,
            None => continue,
        };
        // Volume is optional per file and per cell; a present but
        // unparseable cell is an issue, not a skip.
        let volume = match volume_idx.and_then(|i| clean_cell(record.get(i))) {
            Some(raw) => {
                let parsed = parse_return(raw);
                if parsed.is_none() {
                    result.add_issue(DataIssue {
                        line,
                        row_id: Some(firm.clone()),
                        kind: DataIssueKind::BadReturn,
                        value: raw.to_string(),
                    });
                }
                parsed
            }
            None => None,
        };

        if !seen.insert((firm.clone(), date)) {
            return Err(IngestError::DuplicateId {
                path: path.to_path_buf(),
                id: format!("{firm}:{date}"),
            });
        }

        result.data.push(MarketRow {
            firm,
            date,
            ret,
            mkt_ret,
            volume,
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
        "read market rows from {}",
        path.display()
    );
    Ok(result)
}
