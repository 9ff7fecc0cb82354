//! Augmented CSV writer and reader.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use breachscan_core::constants::CATEGORY_COUNT;
use breachscan_core::errors::{DataIssue, DataIssueKind, IngestError, PipelineResult};
use breachscan_core::types::collections::SmallVec4;
use breachscan_core::types::{
    BreachCategory, BreachRecord, CategoryFlags, Classification, FxHashSet, MatchedKeyword,
    Severity,
};

use crate::ingest::sanitize::{clean_cell, parse_flag};
use crate::ingest::{find_column, open_reader, read_headers, require_column};

use super::{AUGMENTED_LEAD_COLUMNS, AUGMENTED_TAIL_COLUMNS};

/// Write records and their classifications side by side as the
/// augmented CSV. The two slices must be parallel (same order, same
/// length), which is what the classifier produces.
pub fn write_classified_csv(
    path: &Path,
    records: &[BreachRecord],
    classifications: &[Classification],
    date_format: &str,
) -> Result<(), IngestError> {
    debug_assert_eq!(records.len(), classifications.len());
    let file = File::create(path).map_err(|source| IngestError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);
    let csv_err = |e: csv::Error| IngestError::CsvError {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut header: Vec<String> = AUGMENTED_LEAD_COLUMNS
        .iter()
        .map(|s| s.to_string())
        .collect();
    header.extend(BreachCategory::all().iter().map(|c| c.name().to_string()));
    header.extend(AUGMENTED_TAIL_COLUMNS.iter().map(|s| s.to_string()));
    writer.write_record(&header).map_err(csv_err)?;

    for (record, classified) in records.iter().zip(classifications) {
        let mut row: Vec<String> = Vec::with_capacity(header.len());
        row.push(record.id.clone());
        row.push(record.firm.clone().unwrap_or_default());
        row.push(format_date(record.disclosed, date_format));
        row.push(format_date(record.discovered, date_format));
        row.push(
            record
                .records_affected
                .map(|n| n.to_string())
                .unwrap_or_default(),
        );
        for (_, flag) in classified.flags.iter() {
            row.push(if flag { "1" } else { "0" }.to_string());
        }
        row.push(classified.severity.value().to_string());
        row.push(if classified.complex { "1" } else { "0" }.to_string());
        row.push(join_matched(&classified.matched));
        writer.write_record(&row).map_err(csv_err)?;
    }

    writer.flush().map_err(|source| IngestError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        rows = records.len(),
        "wrote augmented CSV to {}",
        path.display()
    );
    Ok(())
}

/// Read an augmented CSV back into classifications, for the validation
/// harness. The identifying columns are ignored; only id, the ten flag
/// columns, severity, and complex_breach are required.
///
/// The matched_keywords column is audit output: it is parsed back when
/// present and well-formed, and read as empty otherwise.
pub fn read_classified_csv(
    path: &Path,
) -> Result<PipelineResult<Vec<Classification>>, IngestError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;

    let id_idx = require_column(&headers, "id", path)?;
    let mut flag_idx = [0usize; CATEGORY_COUNT];
    for cat in BreachCategory::all() {
        flag_idx[cat.index()] = require_column(&headers, cat.name(), path)?;
    }
    let severity_idx = require_column(&headers, "severity", path)?;
    let complex_idx = require_column(&headers, "complex_breach", path)?;
    let matched_idx = find_column(&headers, "matched_keywords");

    let mut result: PipelineResult<Vec<Classification>> = PipelineResult::default();
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
                None => {}
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

        let severity = match clean_cell(record.get(severity_idx))
            .and_then(|raw| raw.parse::<u8>().ok())
        {
            Some(v) => Severity::new(v),
            None => {
                result.add_issue(DataIssue {
                    line,
                    row_id: Some(id),
                    kind: DataIssueKind::BadSeverity,
                    value: clean_cell(record.get(severity_idx)).unwrap_or("").to_string(),
                });
                continue;
            }
        };
        let complex = match clean_cell(record.get(complex_idx)).map(parse_flag) {
            Some(Some(v)) => v,
            Some(None) => {
                result.add_issue(DataIssue {
                    line,
                    row_id: Some(id),
                    kind: DataIssueKind::BadFlag,
                    value: clean_cell(record.get(complex_idx)).unwrap_or("").to_string(),
                });
                continue;
            }
            None => false,
        };

        let matched = matched_idx
            .and_then(|i| clean_cell(record.get(i)))
            .and_then(parse_matched)
            .unwrap_or_default();

        result.data.push(Classification {
            id,
            flags,
            severity,
            complex,
            matched,
        });
    }

    if rows_seen == 0 {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    info!(
        rows = result.data.len(),
        issues = result.issue_count(),
        "read classified rows from {}",
        path.display()
    );
    Ok(result)
}

fn format_date(date: Option<NaiveDate>, format: &str) -> String {
    date.map(|d| d.format(format).to_string()).unwrap_or_default()
}

/// Render matched keywords as `category:keyword` pairs joined by `|`.
fn join_matched(matched: &[MatchedKeyword]) -> String {
    matched
        .iter()
        .map(|m| format!("{}:{}", m.category.name(), m.keyword))
        .collect::<Vec<_>>()
        .join("|")
}

/// Inverse of `join_matched`. Returns `None` when any entry fails to
/// parse, so a hand-edited cell degrades to "no audit trail" instead
/// of a partial one.
fn parse_matched(cell: &str) -> Option<SmallVec4<MatchedKeyword>> {
    let mut out = SmallVec4::new();
    for entry in cell.split('|') {
        let (cat, keyword) = entry.split_once(':')?;
        let category = BreachCategory::parse_str(cat.trim())?;
        out.push(MatchedKeyword {
            category,
            keyword: keyword.trim().to_string(),
        });
    }
    Some(out)
}
