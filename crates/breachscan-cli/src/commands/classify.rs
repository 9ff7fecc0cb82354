//! `breachscan classify` - category flags, severity, augmented output.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use tracing::info;

use breachscan_analysis::classify::KeywordClassifier;
use breachscan_core::config::CliOverrides;
use breachscan_data::{read_breaches, write_classified_csv, write_classified_json};

use super::{coded, load_config, note_issues, Globals};

pub fn cmd_classify(
    globals: &Globals,
    input: &Path,
    output: &Path,
    json: Option<&Path>,
    overrides: CliOverrides,
) -> Result<ExitCode> {
    let config = load_config(globals, &overrides)?;

    let parsed = coded(read_breaches(input, &config.ingest))?;
    note_issues(&parsed.issues, input, globals.quiet);
    let records = parsed.data;

    let classifier = coded(KeywordClassifier::from_config(&config.classify))?;
    info!(
        keywords = classifier.keyword_count(),
        rows = records.len(),
        "classifying"
    );
    let classifications = classifier.classify_batch(&records);

    let date_format = config.ingest.effective_date_format();
    coded(write_classified_csv(
        output,
        &records,
        &classifications,
        date_format,
    ))?;
    if let Some(json_path) = json {
        coded(write_classified_json(json_path, &records, &classifications))?;
    }

    if !globals.quiet {
        let flagged = classifications
            .iter()
            .filter(|c| c.flags.count_set() > 0)
            .count();
        let complex = classifications.iter().filter(|c| c.complex).count();
        println!(
            "{} rows classified: {} flagged, {} complex, {} data-quality issue(s)",
            records.len(),
            flagged,
            complex,
            parsed.issues.len()
        );
        println!("wrote {}", output.display());
        if let Some(json_path) = json {
            println!("wrote {}", json_path.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}
