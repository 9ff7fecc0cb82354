//! breachscan CLI - breach classification and market-reaction reports.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

mod commands;

use breachscan_core::config::CliOverrides;
use commands::{cmd_classify, cmd_describe, cmd_sample, cmd_study, cmd_validate, Globals};

#[derive(Parser)]
#[command(name = "breachscan")]
#[command(version)]
#[command(about = "Classify breach disclosures and measure market reactions")]
#[command(after_help = "\
QUICK START:
  breachscan classify breaches.csv            # Category flags + severity
  breachscan sample breaches.csv              # Coding sheet for manual labels
  breachscan validate labels.csv              # Score against the manual codes
  breachscan describe breaches.csv            # Descriptive statistics
  breachscan study breaches.csv market.csv    # Event study + asymmetry")]
struct Cli {
    /// Config file (default: breachscan.toml in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Suppress logs and progress lines
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify breach descriptions into category flags and severity
    Classify {
        /// Breach disclosure CSV
        input: PathBuf,
        /// Augmented CSV output path
        #[arg(short, long, default_value = "classified.csv")]
        output: PathBuf,
        /// Also write the augmented rows as JSON
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,
        /// Keyword dictionary TOML (replaces the builtin table)
        #[arg(long, value_name = "PATH")]
        dictionary: Option<String>,
    },
    /// Draw a deterministic validation sample for manual coding
    Sample {
        /// Breach disclosure CSV
        input: PathBuf,
        /// Coding sheet output path
        #[arg(short, long, default_value = "sample.csv")]
        output: PathBuf,
        /// Sample size
        #[arg(long)]
        size: Option<usize>,
        /// Sampling seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score classifier output against manual labels
    Validate {
        /// Filled-in coding sheet (id + one 0/1 column per category)
        labels: PathBuf,
        /// Classifier output, augmented CSV or JSON
        #[arg(long, default_value = "classified.csv")]
        classified: PathBuf,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Descriptive statistics over a classified dataset
    Describe {
        /// Breach disclosure CSV
        input: PathBuf,
        /// Market CSV, for attrition accounting
        #[arg(long, value_name = "PATH")]
        market: Option<PathBuf>,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Market-model event study and information-asymmetry analysis
    Study {
        /// Breach disclosure CSV
        input: PathBuf,
        /// Market CSV: ticker, date, ret, mkt_ret and optional volume
        market: PathBuf,
        #[command(flatten)]
        report: ReportArgs,
    },
}

/// Report flags shared by the reporting subcommands.
#[derive(Args)]
struct ReportArgs {
    /// Report formats: json, markdown, html, console
    #[arg(long = "format", value_name = "FMT", value_delimiter = ',')]
    formats: Vec<String>,

    /// Directory rendered reports are written to
    #[arg(long, value_name = "DIR")]
    report_dir: Option<String>,

    /// Title placed at the top of rendered reports
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,
}

impl ReportArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            report_formats: (!self.formats.is_empty()).then(|| self.formats.clone()),
            report_dir: self.report_dir.clone(),
            report_title: self.title.clone(),
            ..Default::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !cli.quiet {
        breachscan_core::tracing::init_tracing();
    }
    let globals = Globals {
        config_path: cli.config,
        quiet: cli.quiet,
    };

    match run(&globals, cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", commands::coded_line(&err));
            ExitCode::from(2)
        }
    }
}

fn run(globals: &Globals, command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Classify {
            input,
            output,
            json,
            dictionary,
        } => {
            let overrides = CliOverrides {
                dictionary_path: dictionary,
                ..Default::default()
            };
            cmd_classify(globals, &input, &output, json.as_deref(), overrides)
        }
        Commands::Sample {
            input,
            output,
            size,
            seed,
        } => {
            let overrides = CliOverrides {
                sample_size: size,
                sample_seed: seed,
                ..Default::default()
            };
            cmd_sample(globals, &input, &output, overrides)
        }
        Commands::Validate {
            labels,
            classified,
            report,
        } => cmd_validate(globals, &labels, &classified, report.overrides()),
        Commands::Describe {
            input,
            market,
            report,
        } => cmd_describe(globals, &input, market.as_deref(), report.overrides()),
        Commands::Study {
            input,
            market,
            report,
        } => cmd_study(globals, &input, &market, report.overrides()),
    }
}
