//! Keyword classification.
//!
//! A `KeywordDictionary` maps lowercase keywords to breach categories;
//! the builtin table ships compiled in and a TOML file can replace it.
//! The `KeywordClassifier` compiles the dictionary into a single
//! Aho-Corasick automaton so every description is scanned once, no
//! matter how many keywords the dictionary holds.

mod builtin;
mod dictionary;
mod engine;

pub use dictionary::{DictionaryEntry, KeywordDictionary};
pub use engine::KeywordClassifier;
