//! Configuration system for breachscan.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod breachscan_config;
pub mod classify_config;
pub mod ingest_config;
pub mod report_config;
pub mod study_config;
pub mod validation_config;

pub use breachscan_config::{BreachScanConfig, CliOverrides};
pub use classify_config::ClassifyConfig;
pub use ingest_config::IngestConfig;
pub use report_config::ReportConfig;
pub use study_config::StudyConfig;
pub use validation_config::ValidationConfig;
