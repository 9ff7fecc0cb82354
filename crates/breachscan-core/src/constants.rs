//! Shared constants for the breachscan pipeline.

/// Breachscan version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of breach categories.
pub const CATEGORY_COUNT: usize = 10;

/// Maximum severity score.
pub const SEVERITY_MAX: u8 = 5;

/// Lower bounds of the severity bands, ascending. A record count at or
/// above `SEVERITY_BANDS[i]` scores at least `i + 1`.
pub const SEVERITY_BANDS: [u64; 5] = [1, 1_000, 10_000, 100_000, 1_000_000];

/// Default minimum category flags for a breach to count as complex.
pub const DEFAULT_COMPLEX_MIN_CATEGORIES: u32 = 2;

/// Default validation sample size for manual coding.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Default validation sampling seed.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

/// Default date format for CSV date columns.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default estimation window start, in trading days relative to the event.
pub const DEFAULT_ESTIMATION_START: i64 = -120;

/// Default estimation window end, in trading days relative to the event.
pub const DEFAULT_ESTIMATION_END: i64 = -21;

/// Default minimum usable estimation observations per event.
pub const DEFAULT_MIN_ESTIMATION_OBS: usize = 60;

/// Default event windows for cumulative abnormal returns.
pub const DEFAULT_EVENT_WINDOWS: [(i64, i64); 3] = [(-1, 1), (-2, 2), (0, 5)];

/// Severity score at or above which an event counts as high severity
/// in the event-study split.
pub const SEVERITY_SPLIT_MIN: u8 = 3;

/// Default half-width in trading days of the pre/post asymmetry windows.
pub const DEFAULT_ASYMMETRY_WINDOW_DAYS: i64 = 20;

/// Minimum observations on each side of the event for the asymmetry
/// ratios to be computed for an event.
pub const MIN_ASYMMETRY_OBS: usize = 5;

/// Default report output directory.
pub const DEFAULT_REPORT_DIR: &str = "reports";

/// Default report formats.
pub const DEFAULT_REPORT_FORMATS: [&str; 2] = ["json", "markdown"];

/// Default report title.
pub const DEFAULT_REPORT_TITLE: &str = "Breachscan Analysis Report";

/// Report formats the reporter factory knows how to build.
pub const KNOWN_REPORT_FORMATS: [&str; 4] = ["json", "markdown", "html", "console"];

/// Project config file name.
pub const CONFIG_FILE_NAME: &str = "breachscan.toml";

// ---- Default CSV column names ----

pub const DEFAULT_ID_COLUMN: &str = "id";
pub const DEFAULT_FIRM_COLUMN: &str = "ticker";
pub const DEFAULT_DISCLOSED_COLUMN: &str = "disclosure_date";
pub const DEFAULT_DISCOVERED_COLUMN: &str = "discovery_date";
pub const DEFAULT_DESCRIPTION_COLUMN: &str = "description";
pub const DEFAULT_RECORDS_COLUMN: &str = "records_affected";

// ---- Market data column names ----

pub const MARKET_FIRM_COLUMN: &str = "ticker";
pub const MARKET_DATE_COLUMN: &str = "date";
pub const MARKET_RETURN_COLUMN: &str = "ret";
pub const MARKET_INDEX_COLUMN: &str = "mkt_ret";
pub const MARKET_VOLUME_COLUMN: &str = "volume";
