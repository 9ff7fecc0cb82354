//! `breachscan validate` - score classifier output against manual codes.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use tracing::info;

use breachscan_analysis::report::AnalysisReport;
use breachscan_analysis::validate::evaluate;
use breachscan_core::config::CliOverrides;
use breachscan_data::{fingerprint_file, read_classified, read_labels};

use super::{coded, load_config, note_issues, render_reports, Globals};

pub fn cmd_validate(
    globals: &Globals,
    labels_path: &Path,
    classified_path: &Path,
    overrides: CliOverrides,
) -> Result<ExitCode> {
    let config = load_config(globals, &overrides)?;

    let labels = coded(read_labels(labels_path))?;
    note_issues(&labels.issues, labels_path, globals.quiet);
    let classified = coded(read_classified(classified_path))?;
    note_issues(&classified.issues, classified_path, globals.quiet);

    let metrics = coded(evaluate(
        &classified.data,
        &labels.data,
        &config.validation,
    ))?;
    let passed = metrics.all_passed();
    info!(
        scored = metrics.scored_rows,
        passed,
        "validation metrics computed"
    );

    let report = AnalysisReport::new(config.report.effective_title())
        .with_input(coded(fingerprint_file(labels_path))?)
        .with_input(coded(fingerprint_file(classified_path))?)
        .with_validation(metrics);
    render_reports(&report, &config.report, "validation", globals.quiet)?;

    if passed {
        Ok(ExitCode::SUCCESS)
    } else {
        if !globals.quiet {
            eprintln!("validation thresholds not met");
        }
        Ok(ExitCode::from(1))
    }
}
