//! Validation harness.
//!
//! Deterministic sampling for manual coding, per-category confusion
//! matrices against the coded labels, and the aggregate
//! precision/recall/F1 metrics with optional acceptance thresholds.

mod confusion;
mod harness;
mod sampling;

pub use confusion::{CategoryMetrics, ConfusionCounts};
pub use harness::{evaluate, ThresholdVerdict, ValidationMetrics};
pub use sampling::sample_records;
