//! Abnormal returns, CARs, and cross-sectional window summaries.

use chrono::NaiveDate;
use serde::Serialize;

use breachscan_core::constants::SEVERITY_SPLIT_MIN;
use breachscan_core::types::Severity;

use super::alignment::FirmSeries;
use super::inference::one_sample_t;
use super::ols::MarketModel;

/// Study results for one event.
#[derive(Debug, Clone, Serialize)]
pub struct EventResult {
    pub id: String,
    pub firm: String,
    /// The event day: first trading day on or after the disclosure.
    pub event_date: NaiveDate,
    pub severity: Severity,
    pub model: MarketModel,
    /// CAR per configured window, in window order. `None` when the
    /// window is not fully inside the firm's series.
    pub cars: Vec<Option<f64>>,
}

/// Cumulative abnormal return over one window of trading-day offsets.
///
/// Requires full coverage: a window reaching past either end of the
/// series yields `None` instead of a partial sum that would understate
/// the reaction.
pub fn car_over_window(
    series: &FirmSeries,
    event_idx: usize,
    model: &MarketModel,
    window: (i64, i64),
) -> Option<f64> {
    let (start, end) = window;
    let mut car = 0.0;
    for offset in start..=end {
        let idx = event_idx as i64 + offset;
        if idx < 0 || idx as usize >= series.len() {
            return None;
        }
        let idx = idx as usize;
        car += model.abnormal_return(series.rets[idx], series.mkt_rets[idx]);
    }
    Some(car)
}

/// Cross-sectional summary of one event window.
#[derive(Debug, Clone, Serialize)]
pub struct WindowSummary {
    pub window: (i64, i64),
    /// Events with full window coverage.
    pub n: usize,
    pub mean_car: Option<f64>,
    pub t_stat: Option<f64>,
    pub p_value: Option<f64>,
    /// Split at severity score 3.
    pub n_high_severity: usize,
    pub mean_car_high_severity: Option<f64>,
    pub n_low_severity: usize,
    pub mean_car_low_severity: Option<f64>,
}

/// Summarize one window across all events with coverage.
pub(crate) fn summarize_window(
    events: &[EventResult],
    window_idx: usize,
    window: (i64, i64),
) -> WindowSummary {
    let cars: Vec<(Severity, f64)> = events
        .iter()
        .filter_map(|e| e.cars[window_idx].map(|car| (e.severity, car)))
        .collect();
    let values: Vec<f64> = cars.iter().map(|(_, car)| *car).collect();
    let test = one_sample_t(&values);

    let high: Vec<f64> = cars
        .iter()
        .filter(|(s, _)| s.value() >= SEVERITY_SPLIT_MIN)
        .map(|(_, car)| *car)
        .collect();
    let low: Vec<f64> = cars
        .iter()
        .filter(|(s, _)| s.value() < SEVERITY_SPLIT_MIN)
        .map(|(_, car)| *car)
        .collect();

    WindowSummary {
        window,
        n: values.len(),
        mean_car: (!values.is_empty()).then_some(test.mean),
        t_stat: test.t_stat,
        p_value: test.p_value,
        n_high_severity: high.len(),
        mean_car_high_severity: mean_of(&high),
        n_low_severity: low.len(),
        mean_car_low_severity: mean_of(&low),
    }
}

fn mean_of(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_series(len: usize, ret: f64) -> FirmSeries {
        let start = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
        FirmSeries {
            dates: (0..len).map(|i| start + chrono::Duration::days(i as i64)).collect(),
            rets: vec![ret; len],
            mkt_rets: vec![0.0; len],
            volumes: vec![None; len],
        }
    }

    fn zero_model() -> MarketModel {
        MarketModel {
            alpha: 0.0,
            beta: 1.0,
            n_obs: 60,
            residual_sd: 0.0,
        }
    }

    #[test]
    fn car_sums_abnormal_returns() {
        let series = flat_series(20, 0.01);
        let car = car_over_window(&series, 10, &zero_model(), (-1, 1)).unwrap();
        assert!((car - 0.03).abs() < 1e-12);
    }

    #[test]
    fn partial_coverage_is_none() {
        let series = flat_series(20, 0.01);
        // Window runs past the end of the series.
        assert_eq!(car_over_window(&series, 18, &zero_model(), (0, 5)), None);
        // Window starts before the series.
        assert_eq!(car_over_window(&series, 1, &zero_model(), (-2, 2)), None);
        // Exactly at the boundary is still full coverage.
        assert!(car_over_window(&series, 2, &zero_model(), (-2, 2)).is_some());
    }

    #[test]
    fn summary_splits_by_severity() {
        let make_event = |id: &str, severity: u8, car: f64| EventResult {
            id: id.to_string(),
            firm: "ACME".to_string(),
            event_date: NaiveDate::from_ymd_opt(2014, 6, 2).unwrap(),
            severity: Severity::new(severity),
            model: zero_model(),
            cars: vec![Some(car)],
        };
        let events = vec![
            make_event("a", 5, -0.04),
            make_event("b", 3, -0.02),
            make_event("c", 1, -0.01),
            make_event("d", 0, 0.01),
        ];
        let summary = summarize_window(&events, 0, (-1, 1));
        assert_eq!(summary.n, 4);
        assert_eq!(summary.n_high_severity, 2);
        assert_eq!(summary.n_low_severity, 2);
        assert!((summary.mean_car_high_severity.unwrap() + 0.03).abs() < 1e-12);
        assert!((summary.mean_car_low_severity.unwrap() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn events_without_coverage_excluded_from_summary() {
        let make_event = |id: &str, car: Option<f64>| EventResult {
            id: id.to_string(),
            firm: "ACME".to_string(),
            event_date: NaiveDate::from_ymd_opt(2014, 6, 2).unwrap(),
            severity: Severity::new(2),
            model: zero_model(),
            cars: vec![car],
        };
        let events = vec![make_event("a", Some(0.02)), make_event("b", None)];
        let summary = summarize_window(&events, 0, (0, 5));
        assert_eq!(summary.n, 1);
        assert_eq!(summary.mean_car, Some(0.02));
        assert_eq!(summary.t_stat, None);
    }
}
