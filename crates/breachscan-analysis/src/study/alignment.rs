//! Trading-day alignment of events to firm return series.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use tracing::debug;

use breachscan_core::types::MarketRow;

/// One firm's return series, sorted by date.
///
/// The series defines the firm's trading calendar: offsets are indices
/// into these vectors, not calendar days.
#[derive(Debug, Clone, Default)]
pub struct FirmSeries {
    pub dates: Vec<NaiveDate>,
    pub rets: Vec<f64>,
    pub mkt_rets: Vec<f64>,
    pub volumes: Vec<Option<f64>>,
}

impl FirmSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Index of the first trading day on or after `date`. `None` when
    /// the series ends before the date.
    pub fn event_index(&self, date: NaiveDate) -> Option<usize> {
        let idx = self.dates.partition_point(|d| *d < date);
        (idx < self.dates.len()).then_some(idx)
    }
}

/// Group market rows into per-firm series sorted by date.
/// Duplicate (firm, date) rows were already rejected by the reader.
pub fn build_firm_series(market: &[MarketRow]) -> FxHashMap<String, FirmSeries> {
    let mut by_firm: FxHashMap<String, Vec<&MarketRow>> = FxHashMap::default();
    for row in market {
        by_firm.entry(row.firm.clone()).or_default().push(row);
    }

    let mut series = FxHashMap::default();
    for (firm, mut rows) in by_firm {
        rows.sort_by_key(|r| r.date);
        series.insert(
            firm,
            FirmSeries {
                dates: rows.iter().map(|r| r.date).collect(),
                rets: rows.iter().map(|r| r.ret).collect(),
                mkt_rets: rows.iter().map(|r| r.mkt_ret).collect(),
                volumes: rows.iter().map(|r| r.volume).collect(),
            },
        );
    }

    debug!(firms = series.len(), rows = market.len(), "firm series built");
    series
}
