//! `breachscan sample` - deterministic coding sheet for manual labels.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use breachscan_analysis::validate::sample_records;
use breachscan_core::config::CliOverrides;
use breachscan_data::{read_breaches, write_sample_csv};

use super::{coded, load_config, note_issues, Globals};

pub fn cmd_sample(
    globals: &Globals,
    input: &Path,
    output: &Path,
    overrides: CliOverrides,
) -> Result<ExitCode> {
    let config = load_config(globals, &overrides)?;

    let parsed = coded(read_breaches(input, &config.ingest))?;
    note_issues(&parsed.issues, input, globals.quiet);

    let size = config.validation.effective_sample_size();
    let seed = config.validation.effective_sample_seed();
    let sample = coded(sample_records(&parsed.data, size, seed))?;
    coded(write_sample_csv(
        output,
        &sample,
        config.ingest.effective_date_format(),
    ))?;

    if !globals.quiet {
        println!(
            "sampled {} of {} rows (seed {}) into {}",
            sample.len(),
            parsed.data.len(),
            seed,
            output.display()
        );
    }
    Ok(ExitCode::SUCCESS)
}
