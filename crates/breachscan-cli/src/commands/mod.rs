//! Subcommand implementations for the breachscan binary.
//!
//! Each command composes the library crates: read inputs, run the
//! relevant analysis, render reports. Subsystem errors are lifted into
//! `PipelineError` before `anyhow` erases the concrete type, so the
//! binary can still print the stable error code on the way out.

mod classify;
mod describe;
mod sample;
mod study;
mod validate;

pub use classify::cmd_classify;
pub use describe::cmd_describe;
pub use sample::cmd_sample;
pub use study::cmd_study;
pub use validate::cmd_validate;

use std::path::{Path, PathBuf};

use tracing::debug;

use breachscan_analysis::report::{create_reporter, file_extension, AnalysisReport};
use breachscan_core::config::{BreachScanConfig, CliOverrides, ReportConfig};
use breachscan_core::errors::{
    error_code, BreachScanErrorCode, DataIssue, DataIssueKind, PipelineError, ReportError,
};

/// Global flags shared by every subcommand.
pub struct Globals {
    pub config_path: Option<PathBuf>,
    pub quiet: bool,
}

/// Format an error for the terminal with its stable code.
pub fn coded_line(err: &anyhow::Error) -> String {
    match err.downcast_ref::<PipelineError>() {
        Some(coded) => coded.coded_message(),
        None => format!("[{}] {err:#}", error_code::PIPELINE_ERROR),
    }
}

/// Lift a subsystem error into the coded pipeline error.
fn coded<T, E: Into<PipelineError>>(result: Result<T, E>) -> Result<T, PipelineError> {
    result.map_err(Into::into)
}

/// Resolve configuration: an explicit `--config` file, or layered
/// lookup from the working directory.
fn load_config(
    globals: &Globals,
    overrides: &CliOverrides,
) -> Result<BreachScanConfig, PipelineError> {
    let config = match &globals.config_path {
        Some(path) => BreachScanConfig::load_file(path, Some(overrides))?,
        None => BreachScanConfig::load(Path::new("."), Some(overrides))?,
    };
    Ok(config)
}

/// Log each dirty row and print the count. Dirty rows never abort a
/// run; degraded cells are already recorded on the parsed data.
fn note_issues(issues: &[DataIssue], path: &Path, quiet: bool) {
    if issues.is_empty() {
        return;
    }
    for issue in issues {
        debug!(
            line = issue.line,
            row_id = issue.row_id.as_deref(),
            kind = issue.kind.name(),
            value = %issue.value,
            "dirty row in {}",
            path.display()
        );
    }
    if !quiet {
        println!("{}: {} data-quality issue(s)", path.display(), issues.len());
    }
}

/// Rows the breach reader dropped entirely, as opposed to rows kept
/// with a cell degraded to `None`.
fn skipped_rows(issues: &[DataIssue]) -> usize {
    issues
        .iter()
        .filter(|i| i.kind == DataIssueKind::BlankId)
        .count()
}

/// Render the report in every configured format. File formats land in
/// the report directory under `stem`; the console format prints to
/// stdout.
fn render_reports(
    report: &AnalysisReport,
    config: &ReportConfig,
    stem: &str,
    quiet: bool,
) -> Result<(), PipelineError> {
    let dir = Path::new(config.effective_output_dir());
    for format in config.effective_formats() {
        let reporter = create_reporter(&format)?;
        let rendered = reporter.generate(report)?;
        match file_extension(&format) {
            Some(ext) => {
                std::fs::create_dir_all(dir).map_err(|source| ReportError::IoError {
                    path: dir.to_path_buf(),
                    source,
                })?;
                let path = dir.join(format!("{stem}.{ext}"));
                std::fs::write(&path, &rendered).map_err(|source| ReportError::IoError {
                    path: path.clone(),
                    source,
                })?;
                if !quiet {
                    println!("wrote {}", path.display());
                }
            }
            None => print!("{rendered}"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coded_line_keeps_subsystem_error_codes() {
        let err = anyhow::Error::from(PipelineError::from(ReportError::UnknownFormat {
            format: "yaml".to_string(),
            available: "json, markdown".to_string(),
        }));
        let line = coded_line(&err);
        assert!(line.starts_with("[UNKNOWN_FORMAT]"), "got: {line}");
        assert!(line.contains("yaml"));
    }

    #[test]
    fn coded_line_falls_back_for_untyped_errors() {
        let err = anyhow::anyhow!("something outside the pipeline");
        let line = coded_line(&err);
        assert!(line.starts_with("[PIPELINE_ERROR]"), "got: {line}");
    }

    #[test]
    fn skipped_rows_counts_only_dropped_rows() {
        let issues = vec![
            DataIssue {
                line: Some(2),
                row_id: None,
                kind: DataIssueKind::BlankId,
                value: String::new(),
            },
            DataIssue {
                line: Some(3),
                row_id: Some("r-3".to_string()),
                kind: DataIssueKind::BadDate,
                value: "13/45/2020".to_string(),
            },
        ];
        assert_eq!(skipped_rows(&issues), 1);
    }
}
