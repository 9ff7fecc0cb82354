//! Report document types.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use breachscan_core::constants::VERSION;
use breachscan_core::types::{BreachCategory, Classification, InputFingerprint};

use crate::asymmetry::AsymmetryOutcome;
use crate::stats::{CategoryPrevalence, DatasetSummary};
use crate::study::EventStudyOutcome;
use crate::validate::ValidationMetrics;

/// Summary of a classification run.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationSection {
    pub rows: usize,
    /// Rows with at least one category flag set.
    pub flagged_rows: usize,
    pub complex_rows: usize,
    /// Non-fatal data-quality issues hit during ingestion.
    pub data_issues: usize,
    pub category_counts: Vec<CategoryPrevalence>,
}

impl ClassificationSection {
    pub fn from_classifications(classifications: &[Classification], data_issues: usize) -> Self {
        let rows = classifications.len();
        let category_counts = BreachCategory::all()
            .iter()
            .map(|&category| {
                let count = classifications.iter().filter(|c| c.flags.get(category)).count();
                CategoryPrevalence {
                    category,
                    count,
                    share: if rows == 0 { 0.0 } else { count as f64 / rows as f64 },
                }
            })
            .collect();
        Self {
            rows,
            flagged_rows: classifications.iter().filter(|c| c.flags.any()).count(),
            complex_rows: classifications.iter().filter(|c| c.complex).count(),
            data_issues,
            category_counts,
        }
    }
}

/// The document every reporter renders.
///
/// Sections are optional; a report carries whichever analyses actually
/// ran. Every report records the tool version, the UTC generation
/// time, and the fingerprints of its input files.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub title: String,
    pub version: String,
    /// RFC 3339, UTC.
    pub generated_at: String,
    pub inputs: Vec<InputFingerprint>,
    pub classification: Option<ClassificationSection>,
    pub validation: Option<ValidationMetrics>,
    pub descriptive: Option<DatasetSummary>,
    pub event_study: Option<EventStudyOutcome>,
    pub asymmetry: Option<AsymmetryOutcome>,
}

impl AnalysisReport {
    /// Start an empty report stamped with the current UTC time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            inputs: Vec::new(),
            classification: None,
            validation: None,
            descriptive: None,
            event_study: None,
            asymmetry: None,
        }
    }

    pub fn with_input(mut self, fingerprint: InputFingerprint) -> Self {
        self.inputs.push(fingerprint);
        self
    }

    pub fn with_classification(mut self, section: ClassificationSection) -> Self {
        self.classification = Some(section);
        self
    }

    pub fn with_validation(mut self, metrics: ValidationMetrics) -> Self {
        self.validation = Some(metrics);
        self
    }

    pub fn with_descriptive(mut self, summary: DatasetSummary) -> Self {
        self.descriptive = Some(summary);
        self
    }

    pub fn with_event_study(mut self, outcome: EventStudyOutcome) -> Self {
        self.event_study = Some(outcome);
        self
    }

    pub fn with_asymmetry(mut self, outcome: AsymmetryOutcome) -> Self {
        self.asymmetry = Some(outcome);
        self
    }

    /// Names of the sections present, in render order.
    pub fn section_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.classification.is_some() {
            names.push("classification");
        }
        if self.validation.is_some() {
            names.push("validation");
        }
        if self.descriptive.is_some() {
            names.push("descriptive");
        }
        if self.event_study.is_some() {
            names.push("event_study");
        }
        if self.asymmetry.is_some() {
            names.push("asymmetry");
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breachscan_core::types::{CategoryFlags, Severity};

    #[test]
    fn section_names_track_attachments() {
        let report = AnalysisReport::new("t");
        assert!(report.section_names().is_empty());

        let classification = ClassificationSection::from_classifications(&[], 0);
        let report = report.with_classification(classification);
        assert_eq!(report.section_names(), vec!["classification"]);
    }

    #[test]
    fn classification_section_counts() {
        let mut flags = CategoryFlags::none();
        flags.set(BreachCategory::Hacking);
        flags.set(BreachCategory::Malware);
        let classifications = vec![
            Classification {
                id: "a".into(),
                flags,
                severity: Severity::new(3),
                complex: true,
                matched: Default::default(),
            },
            Classification::empty("b", Severity::new(0)),
        ];
        let section = ClassificationSection::from_classifications(&classifications, 4);
        assert_eq!(section.rows, 2);
        assert_eq!(section.flagged_rows, 1);
        assert_eq!(section.complex_rows, 1);
        assert_eq!(section.data_issues, 4);
        assert_eq!(section.category_counts[BreachCategory::Hacking.index()].count, 1);
        assert_eq!(section.category_counts[BreachCategory::Phishing.index()].count, 0);
    }

    #[test]
    fn report_stamps_version_and_time() {
        let report = AnalysisReport::new("Quarterly run");
        assert_eq!(report.title, "Quarterly run");
        assert_eq!(report.version, VERSION);
        assert!(report.generated_at.ends_with('Z'));
    }
}
