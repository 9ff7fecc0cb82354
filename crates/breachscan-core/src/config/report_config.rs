//! Report output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REPORT_DIR, DEFAULT_REPORT_FORMATS, DEFAULT_REPORT_TITLE};

/// Configuration for report rendering and output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Formats to render. Default: ["json", "markdown"].
    #[serde(default)]
    pub formats: Vec<String>,
    /// Directory reports are written to. Default: "reports".
    pub output_dir: Option<String>,
    /// Title placed at the top of rendered reports.
    pub title: Option<String>,
}

impl ReportConfig {
    /// Returns the effective formats, defaulting to json + markdown.
    pub fn effective_formats(&self) -> Vec<String> {
        if self.formats.is_empty() {
            DEFAULT_REPORT_FORMATS.iter().map(|s| s.to_string()).collect()
        } else {
            self.formats.clone()
        }
    }

    pub fn effective_output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(DEFAULT_REPORT_DIR)
    }

    pub fn effective_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_REPORT_TITLE)
    }
}
