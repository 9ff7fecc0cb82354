//! End-to-end classifier tests: builtin taxonomy coverage, TOML
//! dictionary overrides, severity banding, and batch parity.

use breachscan_analysis::classify::KeywordClassifier;
use breachscan_core::config::ClassifyConfig;
use breachscan_core::errors::DictionaryError;
use breachscan_core::types::BreachCategory;
use breachscan_core::types::BreachRecord;
use tempfile::TempDir;

fn record(id: &str, description: &str, records_affected: Option<u64>) -> BreachRecord {
    BreachRecord {
        id: id.to_string(),
        firm: None,
        disclosed: None,
        discovered: None,
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
        records_affected,
    }
}

#[test]
fn builtin_covers_every_category() {
    let cases: &[(&str, BreachCategory)] = &[
        (
            "Attackers used SQL injection against the web backend.",
            BreachCategory::Hacking,
        ),
        (
            "Forensics found malware on two registration kiosks.",
            BreachCategory::Malware,
        ),
        (
            "A phishing email harvested VPN credentials from staff.",
            BreachCategory::Phishing,
        ),
        (
            "Ransomware locked the claims processing system.",
            BreachCategory::Ransomware,
        ),
        (
            "A rogue employee exported member lists before resigning.",
            BreachCategory::Insider,
        ),
        (
            "Boxes of paper records were found in a public dumpster.",
            BreachCategory::PhysicalTheft,
        ),
        (
            "An unencrypted laptop was taken from a parked car.",
            BreachCategory::PortableDevice,
        ),
        (
            "Statements were misdirected to the wrong households.",
            BreachCategory::UnintendedDisclosure,
        ),
        (
            "A billing vendor reported the exposure to the firm.",
            BreachCategory::ThirdParty,
        ),
        (
            "Skimming devices captured card number data at the pumps.",
            BreachCategory::PaymentCard,
        ),
    ];

    let classifier = KeywordClassifier::builtin(2).unwrap();
    for (i, (description, expected)) in cases.iter().enumerate() {
        let c = classifier.classify_record(&record(&format!("c{i}"), description, None));
        assert!(
            c.flags.get(*expected),
            "{expected:?} not flagged for: {description}"
        );
    }
}

#[test]
fn matching_ignores_case() {
    let classifier = KeywordClassifier::builtin(2).unwrap();
    let c = classifier.classify_record(&record("u1", "RANSOMWARE OUTBREAK REPORTED", None));
    assert!(c.flags.get(BreachCategory::Ransomware));
    assert_eq!(c.matched[0].keyword, "ransomware");
}

#[test]
fn multi_category_description_is_complex() {
    let classifier = KeywordClassifier::builtin(2).unwrap();
    let c = classifier.classify_record(&record(
        "m1",
        "Hackers installed malware that scraped credit card numbers.",
        Some(50_000),
    ));
    assert!(c.flags.get(BreachCategory::Hacking));
    assert!(c.flags.get(BreachCategory::Malware));
    assert!(c.flags.get(BreachCategory::PaymentCard));
    assert_eq!(c.flags.count_set(), 3);
    assert!(c.complex);
    assert_eq!(c.severity.value(), 3);
}

#[test]
fn complex_threshold_comes_from_config() {
    let config = ClassifyConfig {
        dictionary_path: None,
        complex_min_categories: Some(3),
    };
    let classifier = KeywordClassifier::from_config(&config).unwrap();

    let two = classifier.classify_record(&record(
        "t2",
        "Phishing led to unauthorized access of the portal.",
        None,
    ));
    assert_eq!(two.flags.count_set(), 2);
    assert!(!two.complex);

    let three = classifier.classify_record(&record(
        "t3",
        "Phishing led to unauthorized access and a ransomware payload.",
        None,
    ));
    assert_eq!(three.flags.count_set(), 3);
    assert!(three.complex);
}

#[test]
fn missing_description_still_gets_severity() {
    let classifier = KeywordClassifier::builtin(2).unwrap();
    let c = classifier.classify_record(&record("e1", "", Some(2_000_000)));
    assert!(!c.flags.any());
    assert!(c.matched.is_empty());
    assert!(!c.complex);
    assert_eq!(c.severity.value(), 5);
}

#[test]
fn toml_dictionary_replaces_builtin() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keywords.toml");
    std::fs::write(
        &path,
        r#"
[[categories]]
name = "hacking"
keywords = ["perimeter compromise"]

[[categories]]
name = "insider"
keywords = ["badge misuse"]
"#,
    )
    .unwrap();

    let config = ClassifyConfig {
        dictionary_path: Some(path.to_string_lossy().into_owned()),
        complex_min_categories: None,
    };
    let classifier = KeywordClassifier::from_config(&config).unwrap();

    // Builtin keywords no longer match.
    let builtin_hit = classifier.classify_record(&record("d1", "ransomware everywhere", None));
    assert!(!builtin_hit.flags.any());

    let custom_hit =
        classifier.classify_record(&record("d2", "Logs show a perimeter compromise.", None));
    assert!(custom_hit.flags.get(BreachCategory::Hacking));
    assert!(!custom_hit.flags.get(BreachCategory::Insider));
}

#[test]
fn unknown_category_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        r#"
[[categories]]
name = "cyber-badness"
keywords = ["oops"]
"#,
    )
    .unwrap();

    let config = ClassifyConfig {
        dictionary_path: Some(path.to_string_lossy().into_owned()),
        complex_min_categories: None,
    };
    let err = KeywordClassifier::from_config(&config).unwrap_err();
    assert!(matches!(err, DictionaryError::UnknownCategory { .. }));
}

#[test]
fn missing_dictionary_file_is_reported() {
    let config = ClassifyConfig {
        dictionary_path: Some("/nonexistent/keywords.toml".to_string()),
        complex_min_categories: None,
    };
    let err = KeywordClassifier::from_config(&config).unwrap_err();
    assert!(matches!(err, DictionaryError::FileNotFound { .. }));
}

#[test]
fn batch_matches_single_classification() {
    let classifier = KeywordClassifier::builtin(2).unwrap();
    let descriptions = [
        "malware on the point of sale system",
        "",
        "stolen laptop recovered by police",
        "no incident details recorded",
        "phishing and social engineering campaign",
    ];
    let records: Vec<BreachRecord> = (0..40)
        .map(|i| {
            record(
                &format!("b{i}"),
                descriptions[i % descriptions.len()],
                Some(i as u64 * 700),
            )
        })
        .collect();

    let batch = classifier.classify_batch(&records);
    assert_eq!(batch.len(), records.len());
    for (record, from_batch) in records.iter().zip(&batch) {
        let single = classifier.classify_record(record);
        assert_eq!(single, *from_batch);
    }
}
