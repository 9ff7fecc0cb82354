//! Augmented output tests: column order, CSV and JSON round trips,
//! and the classified readers used by the validation harness.

use std::path::PathBuf;

use breachscan_core::errors::DataIssueKind;
use breachscan_core::types::collections::SmallVec4;
use breachscan_core::types::{
    BreachCategory, BreachRecord, CategoryFlags, Classification, MatchedKeyword, Severity,
};
use breachscan_data::ingest::read_labels;
use breachscan_data::output::{
    read_classified, read_classified_csv, read_classified_json, write_classified_csv,
    write_classified_json, write_sample_csv,
};
use chrono::NaiveDate;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_rows() -> (Vec<BreachRecord>, Vec<Classification>) {
    let records = vec![
        BreachRecord {
            id: "prc-1".into(),
            firm: Some("TGT".into()),
            disclosed: Some(date(2013, 12, 19)),
            discovered: Some(date(2013, 12, 13)),
            description: Some("Point-of-sale malware exposed payment cards".into()),
            records_affected: Some(40_000_000),
        },
        BreachRecord {
            id: "prc-2".into(),
            firm: None,
            disclosed: None,
            discovered: None,
            description: None,
            records_affected: None,
        },
    ];

    let mut matched: SmallVec4<MatchedKeyword> = SmallVec4::new();
    matched.push(MatchedKeyword {
        category: BreachCategory::Malware,
        keyword: "malware".into(),
    });
    matched.push(MatchedKeyword {
        category: BreachCategory::PaymentCard,
        keyword: "payment card".into(),
    });
    let flags: CategoryFlags = [BreachCategory::Malware, BreachCategory::PaymentCard]
        .into_iter()
        .collect();
    let classifications = vec![
        Classification {
            id: "prc-1".into(),
            flags,
            severity: Severity::new(5),
            complex: true,
            matched,
        },
        Classification::empty("prc-2", Severity::new(0)),
    ];
    (records, classifications)
}

fn expected_header() -> String {
    let mut cols = vec![
        "id".to_string(),
        "ticker".to_string(),
        "disclosure_date".to_string(),
        "discovery_date".to_string(),
        "records_affected".to_string(),
    ];
    cols.extend(BreachCategory::all().iter().map(|c| c.name().to_string()));
    cols.extend(["severity", "complex_breach", "matched_keywords"].map(String::from));
    cols.join(",")
}

// ---- CSV ----

#[test]
fn csv_header_follows_canonical_column_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let (records, classifications) = sample_rows();
    write_classified_csv(&path, &records, &classifications, "%Y-%m-%d").unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let first_line = text.lines().next().unwrap();
    assert_eq!(first_line, expected_header());
}

#[test]
fn csv_round_trip_preserves_classifications() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let (records, classifications) = sample_rows();
    write_classified_csv(&path, &records, &classifications, "%Y-%m-%d").unwrap();

    let result = read_classified_csv(&path).unwrap();
    assert!(result.is_clean());
    assert_eq!(result.data, classifications);
}

#[test]
fn csv_matched_keywords_use_pipe_joined_pairs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let (records, classifications) = sample_rows();
    write_classified_csv(&path, &records, &classifications, "%Y-%m-%d").unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(
        text.contains("malware:malware|payment_card:payment card"),
        "matched cell missing from:\n{text}"
    );
}

#[test]
fn csv_empty_fields_stay_blank() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let (records, classifications) = sample_rows();
    write_classified_csv(&path, &records, &classifications, "%Y-%m-%d").unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let second_row = text.lines().nth(2).unwrap();
    assert!(
        second_row.starts_with("prc-2,,,,,"),
        "absent fields should serialize blank: {second_row}"
    );
}

#[test]
fn classified_reader_flags_bad_severity() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edited.csv");
    let mut content = format!("{}\n", expected_header());
    content.push_str("b1,TGT,,,,0,0,0,0,0,0,0,0,0,0,high,0,\n");
    content.push_str("b2,TGT,,,,0,0,0,0,0,0,0,0,0,0,2,0,\n");
    std::fs::write(&path, content).unwrap();

    let result = read_classified_csv(&path).unwrap();
    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].id, "b2");
    assert_eq!(result.data[0].severity.value(), 2);
    assert_eq!(result.issue_count(), 1);
    assert_eq!(result.issues[0].kind, DataIssueKind::BadSeverity);
    assert_eq!(result.issues[0].value, "high");
}

#[test]
fn classified_reader_drops_unparseable_matched_cell() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edited.csv");
    let mut content = format!("{}\n", expected_header());
    content.push_str("b1,TGT,,,,1,0,0,0,0,0,0,0,0,0,2,0,not-a-pair\n");
    std::fs::write(&path, content).unwrap();

    let result = read_classified_csv(&path).unwrap();
    assert!(result.data[0].matched.is_empty());
    assert!(result.data[0].flags.get(BreachCategory::Hacking));
}

// ---- JSON ----

#[test]
fn json_round_trip_preserves_classifications() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");
    let (records, classifications) = sample_rows();
    write_classified_json(&path, &records, &classifications).unwrap();

    let result = read_classified_json(&path).unwrap();
    assert!(result.is_clean());
    assert_eq!(result.data, classifications);
}

#[test]
fn json_rows_carry_named_flags() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");
    let (records, classifications) = sample_rows();
    write_classified_json(&path, &records, &classifications).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "prc-1");
    assert_eq!(rows[0]["ticker"], "TGT");
    assert_eq!(rows[0]["disclosure_date"], "2013-12-19");
    assert_eq!(rows[0]["flags"]["payment_card"], true);
    assert_eq!(rows[0]["flags"]["hacking"], false);
    assert_eq!(rows[0]["severity"], 5);
    assert_eq!(rows[0]["complex_breach"], true);
    assert_eq!(rows[0]["matched_keywords"][0]["category"], "malware");
    assert_eq!(rows[1]["ticker"], serde_json::Value::Null);
}

// ---- Dispatch ----

#[test]
fn read_classified_dispatches_on_extension() {
    let dir = TempDir::new().unwrap();
    let (records, classifications) = sample_rows();

    let csv_path: PathBuf = dir.path().join("out.csv");
    write_classified_csv(&csv_path, &records, &classifications, "%Y-%m-%d").unwrap();
    let json_path: PathBuf = dir.path().join("out.json");
    write_classified_json(&json_path, &records, &classifications).unwrap();

    let from_csv = read_classified(&csv_path).unwrap();
    let from_json = read_classified(&json_path).unwrap();
    assert_eq!(from_csv.data, from_json.data);
}

// ---- Coding sheet ----

#[test]
fn sample_sheet_has_context_then_blank_category_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.csv");
    let (records, _) = sample_rows();
    let sample: Vec<&BreachRecord> = records.iter().collect();
    write_sample_csv(&path, &sample, "%Y-%m-%d").unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut expected = String::from("id,ticker,disclosure_date,description");
    for cat in BreachCategory::all() {
        expected.push(',');
        expected.push_str(cat.name());
    }
    assert_eq!(text.lines().next().unwrap(), expected);
    let first_row = text.lines().nth(1).unwrap();
    assert!(first_row.starts_with("prc-1,TGT,2013-12-19,"));
    assert!(first_row.ends_with(",,,,,,,,,"), "flag cells should be blank: {first_row}");
}

#[test]
fn fresh_sample_sheet_reads_back_as_all_negative_labels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.csv");
    let (records, _) = sample_rows();
    let sample: Vec<&BreachRecord> = records.iter().collect();
    write_sample_csv(&path, &sample, "%Y-%m-%d").unwrap();

    let result = read_labels(&path).unwrap();
    assert!(result.is_clean());
    assert_eq!(result.data.len(), 2);
    assert!(result.data.iter().all(|l| l.flags.count_set() == 0));
}
