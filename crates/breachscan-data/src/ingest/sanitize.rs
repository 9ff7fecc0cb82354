//! Cell-level sanitization shared by the CSV readers.

use chrono::NaiveDate;

/// Trim a raw cell, mapping absent and blank cells to `None`.
pub fn clean_cell(raw: Option<&str>) -> Option<&str> {
    match raw {
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        None => None,
    }
}

/// Coerce a raw record count into a u64.
///
/// Strips surrounding whitespace, a leading approximation marker (`~`),
/// and thousands separators. Anything that still does not read as a
/// plain non-negative integer is `None`.
pub fn parse_record_count(raw: &str) -> Option<u64> {
    let stripped = raw.trim().trim_start_matches('~').trim();
    if stripped.is_empty() {
        return None;
    }
    let digits: String = stripped.chars().filter(|c| *c != ',').collect();
    digits.parse::<u64>().ok()
}

/// Parse a date cell with the configured strftime format.
pub fn parse_date(raw: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), format).ok()
}

/// Parse a manual 0/1 flag cell.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

/// Parse a return or volume cell as a finite float.
pub fn parse_return(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
