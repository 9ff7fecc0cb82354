//! JSON reporter — structured JSON output.

use breachscan_core::errors::ReportError;

use super::types::AnalysisReport;
use super::Reporter;

/// JSON reporter for machine-readable output.
#[derive(Debug)]
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        serde_json::to_string_pretty(report)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| ReportError::RenderFailed {
                format: "json".to_string(),
                message: e.to_string(),
            })
    }
}
