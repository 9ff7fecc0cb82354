//! Coding-sheet writer for the validation sample.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use breachscan_core::errors::IngestError;
use breachscan_core::types::{BreachCategory, BreachRecord};

/// Context columns ahead of the category columns in a coding sheet.
pub const SAMPLE_LEAD_COLUMNS: [&str; 4] = ["id", "ticker", "disclosure_date", "description"];

/// Write sampled records as a coding sheet: context columns for the
/// human coder, then one blank column per category to be filled with
/// 0/1. The filled-in sheet reads back through `read_labels`, which
/// treats blank cells as 0 and ignores the context columns.
pub fn write_sample_csv(
    path: &Path,
    sample: &[&BreachRecord],
    date_format: &str,
) -> Result<(), IngestError> {
    let file = File::create(path).map_err(|source| IngestError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);
    let csv_err = |e: csv::Error| IngestError::CsvError {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut header: Vec<String> = SAMPLE_LEAD_COLUMNS
        .iter()
        .map(|s| s.to_string())
        .collect();
    header.extend(BreachCategory::all().iter().map(|c| c.name().to_string()));
    writer.write_record(&header).map_err(csv_err)?;

    for record in sample {
        let mut row: Vec<String> = Vec::with_capacity(header.len());
        row.push(record.id.clone());
        row.push(record.firm.clone().unwrap_or_default());
        row.push(format_date(record.disclosed, date_format));
        row.push(record.description.clone().unwrap_or_default());
        for _ in BreachCategory::all() {
            row.push(String::new());
        }
        writer.write_record(&row).map_err(csv_err)?;
    }

    writer.flush().map_err(|source| IngestError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        rows = sample.len(),
        "wrote coding sheet to {}",
        path.display()
    );
    Ok(())
}

fn format_date(date: Option<NaiveDate>, format: &str) -> String {
    date.map(|d| d.format(format).to_string()).unwrap_or_default()
}
