//! Augmented JSON writer and reader.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::json;
use tracing::info;

use breachscan_core::errors::{IngestError, PipelineResult};
use breachscan_core::types::collections::SmallVec4;
use breachscan_core::types::{
    BreachCategory, BreachRecord, CategoryFlags, Classification, FxHashMap, FxHashSet,
    MatchedKeyword, Severity,
};

/// Write records and their classifications as a pretty-printed JSON
/// array, one object per breach. Same content as the augmented CSV but
/// with flags as a named object instead of positional columns.
pub fn write_classified_json(
    path: &Path,
    records: &[BreachRecord],
    classifications: &[Classification],
) -> Result<(), IngestError> {
    debug_assert_eq!(records.len(), classifications.len());

    let rows: Vec<serde_json::Value> = records
        .iter()
        .zip(classifications)
        .map(|(record, classified)| {
            let flags: serde_json::Map<String, serde_json::Value> = classified
                .flags
                .iter()
                .map(|(cat, flag)| (cat.name().to_string(), json!(flag)))
                .collect();
            let matched: Vec<serde_json::Value> = classified
                .matched
                .iter()
                .map(|m| json!({ "category": m.category.name(), "keyword": m.keyword }))
                .collect();
            json!({
                "id": record.id,
                "ticker": record.firm,
                "disclosure_date": record.disclosed,
                "discovery_date": record.discovered,
                "records_affected": record.records_affected,
                "flags": flags,
                "severity": classified.severity.value(),
                "complex_breach": classified.complex,
                "matched_keywords": matched,
            })
        })
        .collect();

    let text = serde_json::to_string_pretty(&rows).map_err(|e| IngestError::JsonError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, text).map_err(|source| IngestError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        rows = records.len(),
        "wrote augmented JSON to {}",
        path.display()
    );
    Ok(())
}

/// One row of the JSON layout, as read back for validation.
#[derive(Debug, Deserialize)]
struct ClassifiedJsonRow {
    id: String,
    #[serde(default)]
    flags: FxHashMap<String, bool>,
    severity: u8,
    complex_breach: bool,
    #[serde(default)]
    matched_keywords: SmallVec4<MatchedKeyword>,
}

/// Read classifier output from the JSON layout. The file is machine
/// written, so malformed JSON is a hard error rather than an issue.
pub fn read_classified_json(
    path: &Path,
) -> Result<PipelineResult<Vec<Classification>>, IngestError> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<ClassifiedJsonRow> =
        serde_json::from_str(&text).map_err(|e| IngestError::JsonError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    if rows.is_empty() {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let mut result: PipelineResult<Vec<Classification>> = PipelineResult::default();
    let mut seen_ids: FxHashSet<String> = FxHashSet::default();
    for row in rows {
        if !seen_ids.insert(row.id.clone()) {
            return Err(IngestError::DuplicateId {
                path: path.to_path_buf(),
                id: row.id,
            });
        }
        let mut flags = CategoryFlags::none();
        for cat in BreachCategory::all() {
            if row.flags.get(cat.name()).copied().unwrap_or(false) {
                flags.set(*cat);
            }
        }
        result.data.push(Classification {
            id: row.id,
            flags,
            severity: Severity::new(row.severity),
            complex: row.complex_breach,
            matched: row.matched_keywords,
        });
    }

    info!(
        rows = result.data.len(),
        "read classified rows from {}",
        path.display()
    );
    Ok(result)
}
