//! Descriptive statistics over a classified dataset.
//!
//! Counts, prevalence, severity histogram, numeric summaries of the
//! affected-record counts and disclosure lags, and the attrition
//! accounting from raw input rows down to market-linked events.

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use breachscan_core::constants::SEVERITY_MAX;
use breachscan_core::types::{BreachCategory, BreachRecord, Classification};

/// Summary of a numeric column.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NumericSummary {
    /// Rows with a present value.
    pub n: usize,
    /// Rows with no value.
    pub missing: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub p90: Option<f64>,
    pub max: Option<f64>,
}

impl NumericSummary {
    /// Summarize the present values; `missing` counts absent rows.
    pub fn from_values(values: &[f64], missing: usize) -> Self {
        if values.is_empty() {
            return Self {
                missing,
                ..Default::default()
            };
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        Self {
            n,
            missing,
            mean: Some(mean),
            median: Some(percentile(&sorted, 50.0)),
            p90: Some(percentile(&sorted, 90.0)),
            max: sorted.last().copied(),
        }
    }
}

/// Compute percentile using linear interpolation.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// Prevalence of one category across classified rows.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPrevalence {
    pub category: BreachCategory,
    pub count: usize,
    pub share: f64,
}

/// Attrition from raw input rows down to market-linked events.
///
/// Each stage is a subset of the one before it; the excluded share is
/// the proportion of raw rows that never reach the last known stage.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AttritionAccounting {
    /// Rows seen in the source file, including skipped ones.
    pub raw_rows: usize,
    /// Rows that survived ingestion.
    pub parseable_rows: usize,
    /// Rows carrying both a firm ticker and a disclosure date.
    pub with_firm_and_date: usize,
    /// Rows whose firm appears in the market data. `None` when no
    /// market data was supplied.
    pub linked_to_market: Option<usize>,
    pub excluded_share: f64,
}

/// Tally attrition stages for a parsed dataset.
///
/// `skipped_rows` is the count of source rows ingestion dropped (blank
/// ids and the like); `market_firms` is the set of tickers present in
/// the market data, when market data was read.
pub fn tally_attrition(
    records: &[BreachRecord],
    skipped_rows: usize,
    market_firms: Option<&FxHashSet<String>>,
) -> AttritionAccounting {
    let raw_rows = records.len() + skipped_rows;
    let with_firm_and_date = records
        .iter()
        .filter(|r| r.firm.is_some() && r.disclosed.is_some())
        .count();
    let linked_to_market = market_firms.map(|firms| {
        records
            .iter()
            .filter(|r| {
                r.disclosed.is_some()
                    && r.firm.as_deref().is_some_and(|f| firms.contains(f))
            })
            .count()
    });

    let surviving = linked_to_market.unwrap_or(with_firm_and_date);
    let excluded_share = if raw_rows == 0 {
        0.0
    } else {
        1.0 - surviving as f64 / raw_rows as f64
    };

    AttritionAccounting {
        raw_rows,
        parseable_rows: records.len(),
        with_firm_and_date,
        linked_to_market,
        excluded_share,
    }
}

/// Descriptive summary of a classified dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub category_prevalence: Vec<CategoryPrevalence>,
    /// Histogram indexed by severity score 0 through 5.
    pub severity_histogram: [usize; SEVERITY_MAX as usize + 1],
    pub complex_rows: usize,
    pub complex_share: f64,
    pub records_affected: NumericSummary,
    pub disclosure_lag_days: NumericSummary,
    pub attrition: AttritionAccounting,
}

/// Summarize a classified dataset.
///
/// `records` and `classifications` are index-aligned, the way
/// `classify_batch` returns them.
pub fn summarize(
    records: &[BreachRecord],
    classifications: &[Classification],
    skipped_rows: usize,
    market_firms: Option<&FxHashSet<String>>,
) -> DatasetSummary {
    debug_assert_eq!(records.len(), classifications.len());
    let rows = classifications.len();

    let category_prevalence = BreachCategory::all()
        .iter()
        .map(|&category| {
            let count = classifications.iter().filter(|c| c.flags.get(category)).count();
            CategoryPrevalence {
                category,
                count,
                share: share_of(count, rows),
            }
        })
        .collect();

    let mut severity_histogram = [0usize; SEVERITY_MAX as usize + 1];
    for c in classifications {
        severity_histogram[c.severity.value() as usize] += 1;
    }

    let complex_rows = classifications.iter().filter(|c| c.complex).count();

    let record_counts: Vec<f64> = records
        .iter()
        .filter_map(|r| r.records_affected)
        .map(|v| v as f64)
        .collect();
    let records_affected =
        NumericSummary::from_values(&record_counts, records.len() - record_counts.len());

    let lags: Vec<f64> = records
        .iter()
        .filter_map(|r| r.disclosure_lag_days())
        .map(|d| d as f64)
        .collect();
    let disclosure_lag_days = NumericSummary::from_values(&lags, records.len() - lags.len());

    let attrition = tally_attrition(records, skipped_rows, market_firms);

    debug!(rows, complex_rows, "dataset summarized");
    DatasetSummary {
        rows,
        category_prevalence,
        severity_histogram,
        complex_rows,
        complex_share: share_of(complex_rows, rows),
        records_affected,
        disclosure_lag_days,
        attrition,
    }
}

fn share_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
