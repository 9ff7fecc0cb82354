//! # breachscan-analysis
//!
//! Analysis engine for the breachscan pipeline.
//!
//! Architecture:
//! - `classify` — keyword dictionary (builtin + TOML) and the
//!   Aho-Corasick classifier engine
//! - `validate` — deterministic sampling, confusion matrices, and the
//!   precision/recall/F1 harness against manual labels
//! - `stats` — descriptive statistics and attrition accounting
//! - `study` — market-model event study (alignment, OLS, CAR inference)
//! - `asymmetry` — pre/post information-asymmetry ratios
//! - `report` — `Reporter` trait and the json/markdown/html/console formats

pub mod asymmetry;
pub mod classify;
pub mod report;
pub mod stats;
pub mod study;
pub mod validate;
