//! `breachscan study` - market-model event study plus asymmetry.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use tracing::info;

use breachscan_analysis::asymmetry::run_asymmetry;
use breachscan_analysis::classify::KeywordClassifier;
use breachscan_analysis::report::AnalysisReport;
use breachscan_analysis::study::run_event_study;
use breachscan_core::config::CliOverrides;
use breachscan_data::{fingerprint_file, read_breaches, read_market};

use super::{coded, load_config, note_issues, render_reports, Globals};

pub fn cmd_study(
    globals: &Globals,
    input: &Path,
    market_path: &Path,
    overrides: CliOverrides,
) -> Result<ExitCode> {
    let config = load_config(globals, &overrides)?;

    let parsed = coded(read_breaches(input, &config.ingest))?;
    note_issues(&parsed.issues, input, globals.quiet);
    let records = parsed.data;

    let market = coded(read_market(
        market_path,
        config.ingest.effective_date_format(),
    ))?;
    note_issues(&market.issues, market_path, globals.quiet);

    let classifier = coded(KeywordClassifier::from_config(&config.classify))?;
    let classifications = classifier.classify_batch(&records);

    let study = coded(run_event_study(
        &records,
        &classifications,
        &market.data,
        &config.study,
    ))?;
    info!(
        events = study.events.len(),
        windows = study.windows.len(),
        "event study complete"
    );
    let asymmetry = coded(run_asymmetry(&records, &market.data, &config.study))?;

    let report = AnalysisReport::new(config.report.effective_title())
        .with_input(coded(fingerprint_file(input))?)
        .with_input(coded(fingerprint_file(market_path))?)
        .with_event_study(study)
        .with_asymmetry(asymmetry);
    render_reports(&report, &config.report, "event-study", globals.quiet)?;
    Ok(ExitCode::SUCCESS)
}
