//! Aho-Corasick classifier engine.
//!
//! All keywords from all categories compile into one automaton, so each
//! description is scanned in a single pass regardless of dictionary
//! size. Overlapping matches are kept: "ransomware" must fire even when
//! a shorter keyword matched inside the same span.

use aho_corasick::AhoCorasick;
use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::debug;

use breachscan_core::config::ClassifyConfig;
use breachscan_core::errors::DictionaryError;
use breachscan_core::types::{
    BreachRecord, CategoryFlags, Classification, MatchedKeyword, Severity,
};

use super::dictionary::{DictionaryEntry, KeywordDictionary};

/// A compiled keyword classifier.
#[derive(Debug)]
pub struct KeywordClassifier {
    /// Single-pass automaton over every keyword in the dictionary.
    automaton: AhoCorasick,
    /// Ordered entries (index matches the automaton's pattern index).
    entries: Vec<DictionaryEntry>,
    /// Minimum set flags for a row to count as a complex breach.
    complex_min: u32,
}

impl KeywordClassifier {
    /// Compile a dictionary into a classifier.
    pub fn new(dictionary: KeywordDictionary, complex_min: u32) -> Result<Self, DictionaryError> {
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }
        let entries = dictionary.entries().to_vec();
        let patterns: Vec<&str> = entries.iter().map(|e| e.keyword.as_str()).collect();
        let automaton =
            AhoCorasick::new(&patterns).map_err(|e| DictionaryError::CompileFailed {
                message: e.to_string(),
            })?;

        debug!(keywords = entries.len(), complex_min, "keyword classifier compiled");
        Ok(Self {
            automaton,
            entries,
            complex_min,
        })
    }

    /// Compile the builtin dictionary.
    pub fn builtin(complex_min: u32) -> Result<Self, DictionaryError> {
        Self::new(KeywordDictionary::builtin(), complex_min)
    }

    /// Build a classifier from configuration: a configured TOML
    /// dictionary replaces the builtin table.
    pub fn from_config(config: &ClassifyConfig) -> Result<Self, DictionaryError> {
        let dictionary = match &config.dictionary_path {
            Some(path) => KeywordDictionary::load_from_file(std::path::Path::new(path))?,
            None => KeywordDictionary::builtin(),
        };
        Self::new(dictionary, config.effective_complex_min())
    }

    /// Number of compiled keywords.
    pub fn keyword_count(&self) -> usize {
        self.entries.len()
    }

    /// Classify one breach record.
    ///
    /// The description is lowercased once and scanned once. Every
    /// category owning a matched keyword gets its flag set; each
    /// distinct keyword is recorded once for the audit trail, in first
    /// match order. A missing or blank description sets no flags.
    pub fn classify_record(&self, record: &BreachRecord) -> Classification {
        let severity = Severity::from_records(record.records_affected);
        let text = match record.description.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return Classification::empty(record.id.clone(), severity),
        };

        let mut flags = CategoryFlags::none();
        let mut matched: SmallVec<[MatchedKeyword; 4]> = SmallVec::new();
        let mut seen = vec![false; self.entries.len()];
        for m in self.automaton.find_overlapping_iter(&text) {
            let idx = m.pattern().as_usize();
            if seen[idx] {
                continue;
            }
            seen[idx] = true;
            let entry = &self.entries[idx];
            flags.set(entry.category);
            matched.push(MatchedKeyword {
                category: entry.category,
                keyword: entry.keyword.clone(),
            });
        }

        let complex = flags.count_set() >= self.complex_min;
        Classification {
            id: record.id.clone(),
            flags,
            severity,
            complex,
            matched,
        }
    }

    /// Classify a batch of records in parallel, preserving input order.
    /// Equal to classifying row by row.
    pub fn classify_batch(&self, records: &[BreachRecord]) -> Vec<Classification> {
        debug!(rows = records.len(), "classifying batch");
        records.par_iter().map(|r| self.classify_record(r)).collect()
    }
}
