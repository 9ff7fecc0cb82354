//! Market data row type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One firm-day of market data.
///
/// Returns are simple daily returns. The market return column carries
/// the index return for the same day; volume is share volume when the
/// source provides it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRow {
    pub firm: String,
    pub date: NaiveDate,
    pub ret: f64,
    pub mkt_ret: f64,
    pub volume: Option<f64>,
}
