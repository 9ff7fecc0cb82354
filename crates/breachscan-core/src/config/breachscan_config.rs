//! Top-level breachscan configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassifyConfig, IngestConfig, ReportConfig, StudyConfig, ValidationConfig};
use crate::constants::{CONFIG_FILE_NAME, KNOWN_REPORT_FORMATS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`BREACHSCAN_*`)
/// 3. Project config (`breachscan.toml` in the project root)
/// 4. Compiled defaults
///
/// A research pipeline is run per-project, so there is no user-level
/// config layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BreachScanConfig {
    pub ingest: IngestConfig,
    pub classify: ClassifyConfig,
    pub validation: ValidationConfig,
    pub study: StudyConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dictionary_path: Option<String>,
    pub sample_size: Option<usize>,
    pub sample_seed: Option<u64>,
    pub report_formats: Option<Vec<String>>,
    pub report_dir: Option<String>,
    pub report_title: Option<String>,
}

impl BreachScanConfig {
    /// Load configuration with layered resolution, reading
    /// `breachscan.toml` from `root` when it exists.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILE_NAME);
        let mut config = Self::default();

        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from an explicit config file path.
    /// The file must exist; env and CLI layers still apply on top.
    pub fn load_file(
        path: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        Self::apply_env_overrides(&mut config);
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BreachScanConfig) -> Result<(), ConfigError> {
        let columns = [
            ("ingest.id_column", &config.ingest.id_column),
            ("ingest.firm_column", &config.ingest.firm_column),
            ("ingest.disclosed_column", &config.ingest.disclosed_column),
            ("ingest.discovered_column", &config.ingest.discovered_column),
            ("ingest.description_column", &config.ingest.description_column),
            ("ingest.records_column", &config.ingest.records_column),
        ];
        for (field, value) in columns {
            if let Some(name) = value {
                if name.trim().is_empty() {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "column name must not be blank".to_string(),
                    });
                }
            }
        }
        if let Some(ref fmt) = config.ingest.date_format {
            if fmt.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "ingest.date_format".to_string(),
                    message: "date format must not be blank".to_string(),
                });
            }
        }

        if let Some(min) = config.classify.complex_min_categories {
            if min == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "classify.complex_min_categories".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }

        if let Some(size) = config.validation.sample_size {
            if size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "validation.sample_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        for (field, value) in [
            ("validation.min_macro_f1", config.validation.min_macro_f1),
            (
                "validation.min_category_recall",
                config.validation.min_category_recall,
            ),
        ] {
            if let Some(threshold) = value {
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }

        let est_start = config.study.effective_estimation_start();
        let est_end = config.study.effective_estimation_end();
        if est_start >= est_end {
            return Err(ConfigError::ValidationFailed {
                field: "study.estimation_start".to_string(),
                message: "estimation window is inverted".to_string(),
            });
        }
        if est_end >= 0 {
            return Err(ConfigError::ValidationFailed {
                field: "study.estimation_end".to_string(),
                message: "estimation window must end before the event".to_string(),
            });
        }
        if let Some(obs) = config.study.min_estimation_obs {
            if obs < 2 {
                return Err(ConfigError::ValidationFailed {
                    field: "study.min_estimation_obs".to_string(),
                    message: "regression needs at least 2 observations".to_string(),
                });
            }
        }
        for window in &config.study.event_windows {
            if window[0] > window[1] {
                return Err(ConfigError::ValidationFailed {
                    field: "study.event_windows".to_string(),
                    message: format!("window [{}, {}] is inverted", window[0], window[1]),
                });
            }
        }
        if let Some(days) = config.study.asymmetry_window_days {
            if days < 1 {
                return Err(ConfigError::ValidationFailed {
                    field: "study.asymmetry_window_days".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }

        for format in &config.report.formats {
            if !KNOWN_REPORT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "report.formats".to_string(),
                    message: format!(
                        "unknown format '{}' (available: {})",
                        format,
                        KNOWN_REPORT_FORMATS.join(", ")
                    ),
                });
            }
        }
        if let Some(ref dir) = config.report.output_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "report.output_dir".to_string(),
                    message: "output directory must not be blank".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BreachScanConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: BreachScanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut BreachScanConfig, other: &BreachScanConfig) {
        // Ingest
        if other.ingest.id_column.is_some() {
            base.ingest.id_column = other.ingest.id_column.clone();
        }
        if other.ingest.firm_column.is_some() {
            base.ingest.firm_column = other.ingest.firm_column.clone();
        }
        if other.ingest.disclosed_column.is_some() {
            base.ingest.disclosed_column = other.ingest.disclosed_column.clone();
        }
        if other.ingest.discovered_column.is_some() {
            base.ingest.discovered_column = other.ingest.discovered_column.clone();
        }
        if other.ingest.description_column.is_some() {
            base.ingest.description_column = other.ingest.description_column.clone();
        }
        if other.ingest.records_column.is_some() {
            base.ingest.records_column = other.ingest.records_column.clone();
        }
        if other.ingest.date_format.is_some() {
            base.ingest.date_format = other.ingest.date_format.clone();
        }

        // Classify
        if other.classify.dictionary_path.is_some() {
            base.classify.dictionary_path = other.classify.dictionary_path.clone();
        }
        if other.classify.complex_min_categories.is_some() {
            base.classify.complex_min_categories = other.classify.complex_min_categories;
        }

        // Validation
        if other.validation.sample_size.is_some() {
            base.validation.sample_size = other.validation.sample_size;
        }
        if other.validation.sample_seed.is_some() {
            base.validation.sample_seed = other.validation.sample_seed;
        }
        if other.validation.min_macro_f1.is_some() {
            base.validation.min_macro_f1 = other.validation.min_macro_f1;
        }
        if other.validation.min_category_recall.is_some() {
            base.validation.min_category_recall = other.validation.min_category_recall;
        }

        // Study
        if other.study.estimation_start.is_some() {
            base.study.estimation_start = other.study.estimation_start;
        }
        if other.study.estimation_end.is_some() {
            base.study.estimation_end = other.study.estimation_end;
        }
        if other.study.min_estimation_obs.is_some() {
            base.study.min_estimation_obs = other.study.min_estimation_obs;
        }
        if !other.study.event_windows.is_empty() {
            base.study.event_windows = other.study.event_windows.clone();
        }
        if other.study.asymmetry_window_days.is_some() {
            base.study.asymmetry_window_days = other.study.asymmetry_window_days;
        }

        // Report
        if !other.report.formats.is_empty() {
            base.report.formats = other.report.formats.clone();
        }
        if other.report.output_dir.is_some() {
            base.report.output_dir = other.report.output_dir.clone();
        }
        if other.report.title.is_some() {
            base.report.title = other.report.title.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BREACHSCAN_DICTIONARY`, `BREACHSCAN_SAMPLE_SIZE`, etc.
    fn apply_env_overrides(config: &mut BreachScanConfig) {
        if let Ok(val) = std::env::var("BREACHSCAN_DICTIONARY") {
            config.classify.dictionary_path = Some(val);
        }
        if let Ok(val) = std::env::var("BREACHSCAN_COMPLEX_MIN") {
            if let Ok(v) = val.parse::<u32>() {
                config.classify.complex_min_categories = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BREACHSCAN_SAMPLE_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.validation.sample_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BREACHSCAN_SAMPLE_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.validation.sample_seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BREACHSCAN_MIN_ESTIMATION_OBS") {
            if let Ok(v) = val.parse::<usize>() {
                config.study.min_estimation_obs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BREACHSCAN_DATE_FORMAT") {
            config.ingest.date_format = Some(val);
        }
        if let Ok(val) = std::env::var("BREACHSCAN_REPORT_DIR") {
            config.report.output_dir = Some(val);
        }
        if let Ok(val) = std::env::var("BREACHSCAN_REPORT_FORMATS") {
            let formats: Vec<String> = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !formats.is_empty() {
                config.report.formats = formats;
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut BreachScanConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.dictionary_path {
            config.classify.dictionary_path = Some(v.clone());
        }
        if let Some(v) = cli.sample_size {
            config.validation.sample_size = Some(v);
        }
        if let Some(v) = cli.sample_seed {
            config.validation.sample_seed = Some(v);
        }
        if let Some(ref v) = cli.report_formats {
            config.report.formats = v.clone();
        }
        if let Some(ref v) = cli.report_dir {
            config.report.output_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.report_title {
            config.report.title = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
