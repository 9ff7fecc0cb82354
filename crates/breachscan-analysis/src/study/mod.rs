//! Market-model event study.
//!
//! Each breach with a firm and disclosure date is aligned to the firm's
//! trading calendar, a market model is fit over a pre-event estimation
//! window, and cumulative abnormal returns are summarized across events
//! per configured window. Events are dropped stage by stage (no firm,
//! no market series, no event day, short estimation window) and every
//! drop is accounted.

pub mod alignment;
mod car;
pub(crate) mod inference;
mod ols;

pub use alignment::{build_firm_series, FirmSeries};
pub use car::{car_over_window, EventResult, WindowSummary};
pub use ols::{fit_market_model, MarketModel};

use serde::Serialize;
use tracing::info;

use breachscan_core::config::StudyConfig;
use breachscan_core::errors::StudyError;
use breachscan_core::types::{BreachRecord, Classification, MarketRow};

/// Per-stage attrition of candidate events. Each stage is a subset of
/// the previous one.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StudyAttrition {
    /// Classified rows considered.
    pub candidates: usize,
    pub with_firm_and_date: usize,
    pub with_market_series: usize,
    pub with_event_day: usize,
    /// Events with enough estimation observations and a non-degenerate
    /// fit. Equals the number of events studied.
    pub with_estimation_fit: usize,
}

/// Full event-study outcome.
#[derive(Debug, Clone, Serialize)]
pub struct EventStudyOutcome {
    pub windows: Vec<(i64, i64)>,
    pub events: Vec<EventResult>,
    /// One summary per window, in window order.
    pub summaries: Vec<WindowSummary>,
    pub attrition: StudyAttrition,
}

/// Run the event study.
///
/// `records` and `classifications` are index-aligned, the way
/// `classify_batch` returns them; classifications supply the severity
/// for the high/low split.
pub fn run_event_study(
    records: &[BreachRecord],
    classifications: &[Classification],
    market: &[MarketRow],
    config: &StudyConfig,
) -> Result<EventStudyOutcome, StudyError> {
    debug_assert_eq!(records.len(), classifications.len());

    let est_start = config.effective_estimation_start();
    let est_end = config.effective_estimation_end();
    if est_start > est_end || est_end >= 0 {
        return Err(StudyError::InvalidEstimationWindow {
            start: est_start,
            end: est_end,
        });
    }
    let windows = config.effective_event_windows();
    for &(start, end) in &windows {
        if start > end {
            return Err(StudyError::InvalidWindow { start, end });
        }
    }
    let min_obs = config.effective_min_estimation_obs();

    let series_by_firm = build_firm_series(market);

    let mut attrition = StudyAttrition {
        candidates: records.len(),
        ..Default::default()
    };
    let mut events = Vec::new();
    for (record, classification) in records.iter().zip(classifications) {
        let (Some(firm), Some(disclosed)) = (record.firm.as_deref(), record.disclosed) else {
            continue;
        };
        attrition.with_firm_and_date += 1;
        let Some(series) = series_by_firm.get(firm) else {
            continue;
        };
        attrition.with_market_series += 1;
        let Some(event_idx) = series.event_index(disclosed) else {
            continue;
        };
        attrition.with_event_day += 1;

        let mut est_rets = Vec::new();
        let mut est_mkts = Vec::new();
        for offset in est_start..=est_end {
            let idx = event_idx as i64 + offset;
            if idx < 0 || idx as usize >= series.len() {
                continue;
            }
            est_rets.push(series.rets[idx as usize]);
            est_mkts.push(series.mkt_rets[idx as usize]);
        }
        if est_rets.len() < min_obs {
            continue;
        }
        let Some(model) = fit_market_model(&est_rets, &est_mkts) else {
            continue;
        };
        attrition.with_estimation_fit += 1;

        let cars = windows
            .iter()
            .map(|&window| car_over_window(series, event_idx, &model, window))
            .collect();
        events.push(EventResult {
            id: record.id.clone(),
            firm: firm.to_string(),
            event_date: series.dates[event_idx],
            severity: classification.severity,
            model,
            cars,
        });
    }

    if events.is_empty() {
        if attrition.with_market_series == 0 && attrition.with_firm_and_date > 0 && !market.is_empty()
        {
            return Err(StudyError::NoMarketOverlap);
        }
        return Err(StudyError::NoUsableEvents {
            total: attrition.candidates,
        });
    }

    let summaries = windows
        .iter()
        .enumerate()
        .map(|(idx, &window)| car::summarize_window(&events, idx, window))
        .collect();

    info!(
        events = events.len(),
        candidates = attrition.candidates,
        windows = windows.len(),
        "event study complete"
    );
    Ok(EventStudyOutcome {
        windows,
        events,
        summaries,
        attrition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use breachscan_core::types::{CategoryFlags, Severity};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Returns follow the market model exactly: alpha 0.001, beta 1.2.
    fn synthetic_market(firm: &str, days: usize) -> Vec<MarketRow> {
        let start = date(2014, 1, 1);
        (0..days)
            .map(|i| {
                let mkt_ret = ((i % 7) as f64 - 3.0) / 500.0;
                MarketRow {
                    firm: firm.to_string(),
                    date: start + chrono::Duration::days(i as i64),
                    ret: 0.001 + 1.2 * mkt_ret,
                    mkt_ret,
                    volume: Some(1_000.0),
                }
            })
            .collect()
    }

    fn make_event_record(id: &str, firm: Option<&str>, disclosed: Option<NaiveDate>) -> BreachRecord {
        BreachRecord {
            id: id.to_string(),
            firm: firm.map(String::from),
            disclosed,
            discovered: None,
            description: None,
            records_affected: None,
        }
    }

    fn make_classification(id: &str, severity: u8) -> Classification {
        Classification {
            id: id.to_string(),
            flags: CategoryFlags::none(),
            severity: Severity::new(severity),
            complex: false,
            matched: Default::default(),
        }
    }

    #[test]
    fn noise_free_events_have_zero_car() {
        let market = synthetic_market("ACME", 200);
        let records = vec![make_event_record("a", Some("ACME"), Some(date(2014, 6, 1)))];
        let classifications = vec![make_classification("a", 4)];
        let outcome =
            run_event_study(&records, &classifications, &market, &StudyConfig::default())
                .unwrap();
        assert_eq!(outcome.events.len(), 1);
        let event = &outcome.events[0];
        assert!((event.model.alpha - 0.001).abs() < 1e-10);
        assert!((event.model.beta - 1.2).abs() < 1e-10);
        for car in event.cars.iter().flatten() {
            assert!(car.abs() < 1e-9, "car = {car}");
        }
    }

    #[test]
    fn short_estimation_window_drops_event() {
        // Event 30 trading days in: far fewer than 60 estimation obs.
        let market = synthetic_market("ACME", 200);
        let records = vec![make_event_record("a", Some("ACME"), Some(date(2014, 1, 31)))];
        let classifications = vec![make_classification("a", 2)];
        let err = run_event_study(&records, &classifications, &market, &StudyConfig::default())
            .unwrap_err();
        assert!(matches!(err, StudyError::NoUsableEvents { total: 1 }));
    }

    #[test]
    fn unknown_firm_is_no_overlap() {
        let market = synthetic_market("ACME", 200);
        let records = vec![make_event_record("a", Some("ZZZZ"), Some(date(2014, 6, 1)))];
        let classifications = vec![make_classification("a", 2)];
        let err = run_event_study(&records, &classifications, &market, &StudyConfig::default())
            .unwrap_err();
        assert!(matches!(err, StudyError::NoMarketOverlap));
    }

    #[test]
    fn attrition_stages_are_nested() {
        let market = synthetic_market("ACME", 200);
        let records = vec![
            make_event_record("a", Some("ACME"), Some(date(2014, 6, 1))),
            make_event_record("b", None, Some(date(2014, 6, 1))),
            make_event_record("c", Some("ZZZZ"), Some(date(2014, 6, 1))),
            make_event_record("d", Some("ACME"), Some(date(2015, 6, 1))),
        ];
        let classifications = vec![
            make_classification("a", 3),
            make_classification("b", 1),
            make_classification("c", 1),
            make_classification("d", 1),
        ];
        let outcome =
            run_event_study(&records, &classifications, &market, &StudyConfig::default())
                .unwrap();
        let attrition = outcome.attrition;
        assert_eq!(attrition.candidates, 4);
        assert_eq!(attrition.with_firm_and_date, 3);
        assert_eq!(attrition.with_market_series, 2);
        assert_eq!(attrition.with_event_day, 1);
        assert_eq!(attrition.with_estimation_fit, 1);
        assert_eq!(outcome.events.len(), 1);
    }

    #[test]
    fn inverted_estimation_window_rejected() {
        let config = StudyConfig {
            estimation_start: Some(-10),
            estimation_end: Some(-50),
            ..Default::default()
        };
        let err = run_event_study(&[], &[], &[], &config).unwrap_err();
        assert!(matches!(err, StudyError::InvalidEstimationWindow { .. }));
    }

    #[test]
    fn inverted_event_window_rejected() {
        let config = StudyConfig {
            event_windows: vec![[2, -2]],
            ..Default::default()
        };
        let err = run_event_study(&[], &[], &[], &config).unwrap_err();
        assert!(matches!(err, StudyError::InvalidWindow { start: 2, end: -2 }));
    }
}
