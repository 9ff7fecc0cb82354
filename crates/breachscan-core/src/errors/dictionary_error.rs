//! Keyword dictionary errors.

use super::error_code::{self, BreachScanErrorCode};

/// Errors raised when loading or validating a keyword dictionary.
/// A dictionary that fails validation is never used for classification.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {path}")]
    FileNotFound { path: String },

    #[error("Dictionary parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Unknown category '{category}' in dictionary")]
    UnknownCategory { category: String },

    #[error("Category '{category}' defined more than once")]
    DuplicateCategory { category: String },

    #[error("Category '{category}' has no keywords")]
    EmptyCategory { category: String },

    #[error("Blank keyword in category '{category}'")]
    BlankKeyword { category: String },

    #[error("Duplicate keyword '{keyword}' in category '{category}'")]
    DuplicateKeyword { category: String, keyword: String },

    #[error("Dictionary defines no categories")]
    Empty,

    #[error("Keyword matcher failed to compile: {message}")]
    CompileFailed { message: String },
}

impl BreachScanErrorCode for DictionaryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCategory { .. } => error_code::UNKNOWN_CATEGORY,
            _ => error_code::DICTIONARY_ERROR,
        }
    }
}
