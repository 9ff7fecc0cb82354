//! Keyword dictionary and its TOML loader.
//!
//! TOML dictionaries are user-extensible without recompiling:
//!
//! ```toml
//! [[categories]]
//! name = "ransomware"
//! keywords = ["ransomware", "ransom demand", "extortion"]
//! ```
//!
//! A file that fails validation is rejected whole; classification never
//! runs against a partially loaded table.

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use breachscan_core::errors::DictionaryError;
use breachscan_core::types::BreachCategory;

use super::builtin::builtin_keywords;

/// One keyword owned by one category. Keywords are lowercase by the
/// time they reach an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub category: BreachCategory,
    pub keyword: String,
}

/// A TOML-defined category block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlCategoryDef {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// The root of a TOML dictionary file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlDictionaryFile {
    #[serde(default)]
    pub categories: Vec<TomlCategoryDef>,
}

/// A validated keyword table ready for compilation.
#[derive(Debug, Clone)]
pub struct KeywordDictionary {
    entries: Vec<DictionaryEntry>,
}

impl KeywordDictionary {
    /// The builtin table.
    pub fn builtin() -> Self {
        let entries = builtin_keywords()
            .into_iter()
            .map(|(category, keyword)| DictionaryEntry {
                category,
                keyword: keyword.to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Load and validate a dictionary from a TOML string.
    pub fn load_from_str(toml_str: &str) -> Result<Self, DictionaryError> {
        let file: TomlDictionaryFile =
            toml::from_str(toml_str).map_err(|e| DictionaryError::ParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        if file.categories.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut seen_categories = FxHashSet::default();
        let mut entries = Vec::new();
        for def in &file.categories {
            let category = BreachCategory::parse_str(def.name.trim()).ok_or_else(|| {
                DictionaryError::UnknownCategory {
                    category: def.name.clone(),
                }
            })?;
            if !seen_categories.insert(category) {
                return Err(DictionaryError::DuplicateCategory {
                    category: def.name.clone(),
                });
            }
            if def.keywords.is_empty() {
                return Err(DictionaryError::EmptyCategory {
                    category: def.name.clone(),
                });
            }

            let mut seen_keywords = FxHashSet::default();
            for raw in &def.keywords {
                let keyword = raw.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(DictionaryError::BlankKeyword {
                        category: def.name.clone(),
                    });
                }
                if !seen_keywords.insert(keyword.clone()) {
                    return Err(DictionaryError::DuplicateKeyword {
                        category: def.name.clone(),
                        keyword,
                    });
                }
                entries.push(DictionaryEntry { category, keyword });
            }
        }

        debug!(
            categories = seen_categories.len(),
            keywords = entries.len(),
            "keyword dictionary loaded"
        );
        Ok(Self { entries })
    }

    /// Load and validate a dictionary from a file path.
    pub fn load_from_file(path: &Path) -> Result<Self, DictionaryError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| DictionaryError::FileNotFound {
                path: path.display().to_string(),
            })?;
        Self::load_from_str(&content).map_err(|e| match e {
            DictionaryError::ParseError { message, .. } => DictionaryError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Entries in dictionary order (index matches the automaton's
    /// pattern index after compilation).
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Number of keywords across all categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords owned by one category, in dictionary order.
    pub fn keywords_for(&self, category: BreachCategory) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.keyword.as_str())
            .collect()
    }
}
