//! Reporters — output formats for analysis reports.
//!
//! 4 reporter formats: JSON, Markdown, HTML, console.

pub mod console;
pub mod html;
pub mod json;
pub mod markdown;
pub mod types;

pub use types::{AnalysisReport, ClassificationSection};

use breachscan_core::constants::KNOWN_REPORT_FORMATS;
use breachscan_core::errors::ReportError;

/// Trait for report generation.
pub trait Reporter: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Result<Box<dyn Reporter>, ReportError> {
    match format {
        "json" => Ok(Box::new(json::JsonReporter)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownReporter)),
        "html" => Ok(Box::new(html::HtmlReporter::new())),
        "console" => Ok(Box::new(console::ConsoleReporter::default())),
        other => Err(ReportError::UnknownFormat {
            format: other.to_string(),
            available: available_formats().join(", "),
        }),
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &KNOWN_REPORT_FORMATS
}

/// File extension for a format name; console output has none.
pub fn file_extension(format: &str) -> Option<&'static str> {
    match format {
        "json" => Some("json"),
        "markdown" | "md" => Some("md"),
        "html" => Some("html"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_builds_every_known_format() {
        for format in available_formats() {
            let reporter = create_reporter(format);
            assert!(reporter.is_ok(), "no reporter for {format}");
        }
    }

    #[test]
    fn factory_accepts_md_alias() {
        let reporter = create_reporter("md").unwrap();
        assert_eq!(reporter.name(), "markdown");
    }

    #[test]
    fn unknown_format_lists_available() {
        let err = create_reporter("pdf").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("pdf"));
        assert!(message.contains("markdown"));
    }

    #[test]
    fn extensions_cover_file_formats() {
        assert_eq!(file_extension("json"), Some("json"));
        assert_eq!(file_extension("md"), Some("md"));
        assert_eq!(file_extension("console"), None);
    }
}
