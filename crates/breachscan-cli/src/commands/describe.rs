//! `breachscan describe` - descriptive statistics and attrition.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use breachscan_analysis::classify::KeywordClassifier;
use breachscan_analysis::report::{AnalysisReport, ClassificationSection};
use breachscan_analysis::stats::summarize;
use breachscan_core::config::CliOverrides;
use breachscan_core::types::FxHashSet;
use breachscan_data::{fingerprint_file, read_breaches, read_market};

use super::{coded, load_config, note_issues, render_reports, skipped_rows, Globals};

pub fn cmd_describe(
    globals: &Globals,
    input: &Path,
    market: Option<&Path>,
    overrides: CliOverrides,
) -> Result<ExitCode> {
    let config = load_config(globals, &overrides)?;

    let parsed = coded(read_breaches(input, &config.ingest))?;
    note_issues(&parsed.issues, input, globals.quiet);
    let records = parsed.data;

    let classifier = coded(KeywordClassifier::from_config(&config.classify))?;
    let classifications = classifier.classify_batch(&records);

    let market_firms: Option<FxHashSet<String>> = match market {
        Some(market_path) => {
            let rows = coded(read_market(
                market_path,
                config.ingest.effective_date_format(),
            ))?;
            note_issues(&rows.issues, market_path, globals.quiet);
            Some(rows.data.into_iter().map(|r| r.firm).collect())
        }
        None => None,
    };

    let summary = summarize(
        &records,
        &classifications,
        skipped_rows(&parsed.issues),
        market_firms.as_ref(),
    );

    let mut report = AnalysisReport::new(config.report.effective_title())
        .with_input(coded(fingerprint_file(input))?)
        .with_classification(ClassificationSection::from_classifications(
            &classifications,
            parsed.issues.len(),
        ))
        .with_descriptive(summary);
    if let Some(market_path) = market {
        report = report.with_input(coded(fingerprint_file(market_path))?);
    }
    render_reports(&report, &config.report, "descriptive", globals.quiet)?;
    Ok(ExitCode::SUCCESS)
}
