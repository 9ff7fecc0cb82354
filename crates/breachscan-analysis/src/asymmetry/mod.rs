//! Information-asymmetry proxies around the event day.
//!
//! For each event, a pre window and a post window of equal width
//! (excluding the event day itself) are compared: the ratio of return
//! volatilities and, when volume data is present, the ratio of mean
//! volumes. Cross-sectionally, a paired t test on the log-ratios asks
//! whether the post-event side is systematically wider.

use serde::Serialize;
use tracing::info;

use breachscan_core::config::StudyConfig;
use breachscan_core::constants::MIN_ASYMMETRY_OBS;
use breachscan_core::errors::StudyError;
use breachscan_core::types::{BreachRecord, MarketRow};

use crate::study::alignment::{build_firm_series, FirmSeries};
use crate::study::inference::one_sample_t;

/// Pre/post ratios for one event.
#[derive(Debug, Clone, Serialize)]
pub struct EventAsymmetry {
    pub id: String,
    pub firm: String,
    /// Post over pre return standard deviation.
    pub volatility_ratio: Option<f64>,
    /// Post over pre mean volume. `None` without enough volume data.
    pub turnover_ratio: Option<f64>,
}

/// Cross-sectional summary of one ratio.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RatioSummary {
    /// Events contributing a usable ratio.
    pub n: usize,
    pub mean_ratio: Option<f64>,
    /// Mean log-ratio; the t statistic tests it against zero (a ratio
    /// of one).
    pub mean_log_ratio: Option<f64>,
    pub t_stat: Option<f64>,
    pub p_value: Option<f64>,
}

/// Full asymmetry outcome.
#[derive(Debug, Clone, Serialize)]
pub struct AsymmetryOutcome {
    /// Half-width of the pre/post windows in trading days.
    pub window_days: i64,
    pub events: Vec<EventAsymmetry>,
    pub volatility: RatioSummary,
    pub turnover: RatioSummary,
}

/// Run the pre/post asymmetry comparison for every event with enough
/// observations on both sides.
pub fn run_asymmetry(
    records: &[BreachRecord],
    market: &[MarketRow],
    config: &StudyConfig,
) -> Result<AsymmetryOutcome, StudyError> {
    let window = config.effective_asymmetry_window();
    if window < 1 {
        return Err(StudyError::InvalidWindow {
            start: -window,
            end: window,
        });
    }

    let series_by_firm = build_firm_series(market);

    let mut events = Vec::new();
    let mut with_firm_and_date = 0usize;
    let mut with_series = 0usize;
    for record in records {
        let (Some(firm), Some(disclosed)) = (record.firm.as_deref(), record.disclosed) else {
            continue;
        };
        with_firm_and_date += 1;
        let Some(series) = series_by_firm.get(firm) else {
            continue;
        };
        with_series += 1;
        let Some(event_idx) = series.event_index(disclosed) else {
            continue;
        };
        if let Some(event) = event_asymmetry(&record.id, firm, series, event_idx, window) {
            events.push(event);
        }
    }

    if events.is_empty() {
        if with_series == 0 && with_firm_and_date > 0 && !market.is_empty() {
            return Err(StudyError::NoMarketOverlap);
        }
        return Err(StudyError::NoUsableEvents {
            total: records.len(),
        });
    }

    let volatility =
        summarize_ratios(&events.iter().filter_map(|e| e.volatility_ratio).collect::<Vec<_>>());
    let turnover =
        summarize_ratios(&events.iter().filter_map(|e| e.turnover_ratio).collect::<Vec<_>>());

    info!(events = events.len(), window, "asymmetry analysis complete");
    Ok(AsymmetryOutcome {
        window_days: window,
        events,
        volatility,
        turnover,
    })
}

/// Ratios for one event, or `None` when either side is too thin.
fn event_asymmetry(
    id: &str,
    firm: &str,
    series: &FirmSeries,
    event_idx: usize,
    window: i64,
) -> Option<EventAsymmetry> {
    let pre = offsets_in_range(series, event_idx, -window, -1);
    let post = offsets_in_range(series, event_idx, 1, window);
    if pre.len() < MIN_ASYMMETRY_OBS || post.len() < MIN_ASYMMETRY_OBS {
        return None;
    }

    let pre_rets: Vec<f64> = pre.iter().map(|&i| series.rets[i]).collect();
    let post_rets: Vec<f64> = post.iter().map(|&i| series.rets[i]).collect();
    let volatility_ratio = match (sample_sd(&pre_rets), sample_sd(&post_rets)) {
        (Some(pre_sd), Some(post_sd)) if pre_sd > 0.0 => Some(post_sd / pre_sd),
        _ => None,
    };

    let pre_volumes: Vec<f64> = pre.iter().filter_map(|&i| series.volumes[i]).collect();
    let post_volumes: Vec<f64> = post.iter().filter_map(|&i| series.volumes[i]).collect();
    let turnover_ratio =
        if pre_volumes.len() >= MIN_ASYMMETRY_OBS && post_volumes.len() >= MIN_ASYMMETRY_OBS {
            let pre_mean = pre_volumes.iter().sum::<f64>() / pre_volumes.len() as f64;
            let post_mean = post_volumes.iter().sum::<f64>() / post_volumes.len() as f64;
            (pre_mean > 0.0).then(|| post_mean / pre_mean)
        } else {
            None
        };

    if volatility_ratio.is_none() && turnover_ratio.is_none() {
        return None;
    }
    Some(EventAsymmetry {
        id: id.to_string(),
        firm: firm.to_string(),
        volatility_ratio,
        turnover_ratio,
    })
}

/// Trading-day indices covered by an offset range, clipped to the
/// series bounds.
fn offsets_in_range(series: &FirmSeries, event_idx: usize, start: i64, end: i64) -> Vec<usize> {
    (start..=end)
        .filter_map(|offset| {
            let idx = event_idx as i64 + offset;
            (idx >= 0 && (idx as usize) < series.len()).then_some(idx as usize)
        })
        .collect()
}

/// Sample standard deviation; `None` below 2 values.
fn sample_sd(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let n_f = n as f64;
    let mean = values.iter().sum::<f64>() / n_f;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n_f - 1.0);
    variance.is_finite().then(|| variance.sqrt())
}

fn summarize_ratios(ratios: &[f64]) -> RatioSummary {
    let usable: Vec<f64> = ratios
        .iter()
        .copied()
        .filter(|r| *r > 0.0 && r.is_finite())
        .collect();
    if usable.is_empty() {
        return RatioSummary::default();
    }
    let logs: Vec<f64> = usable.iter().map(|r| r.ln()).collect();
    let test = one_sample_t(&logs);
    RatioSummary {
        n: usable.len(),
        mean_ratio: Some(usable.iter().sum::<f64>() / usable.len() as f64),
        mean_log_ratio: Some(test.mean),
        t_stat: test.t_stat,
        p_value: test.p_value,
    }
}
