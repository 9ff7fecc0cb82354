//! Event study tests over synthetic market data with planted
//! abnormal returns.

use breachscan_analysis::study::run_event_study;
use breachscan_core::config::StudyConfig;
use breachscan_core::errors::StudyError;
use breachscan_core::types::{BreachRecord, Classification, MarketRow, Severity};
use chrono::{Duration, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn start_date() -> NaiveDate {
    date(2014, 1, 1)
}

/// Returns track the market exactly (alpha 0.0002, beta 1.1) apart
/// from one planted shock, so abnormal returns are zero off the shock
/// day and the model fit is exact.
fn market_for(firm: &str, days: usize, shock_at: Option<usize>, shock: f64) -> Vec<MarketRow> {
    (0..days)
        .map(|i| {
            let mkt = ((i % 7) as f64 - 3.0) / 500.0;
            let mut ret = 0.0002 + 1.1 * mkt;
            if shock_at == Some(i) {
                ret += shock;
            }
            MarketRow {
                firm: firm.to_string(),
                date: start_date() + Duration::days(i as i64),
                ret,
                mkt_ret: mkt,
                volume: Some(1_000.0),
            }
        })
        .collect()
}

fn event_record(id: &str, firm: &str, disclosed: NaiveDate) -> BreachRecord {
    BreachRecord {
        id: id.to_string(),
        firm: Some(firm.to_string()),
        disclosed: Some(disclosed),
        discovered: None,
        description: None,
        records_affected: None,
    }
}

#[test]
fn planted_shocks_come_back_as_cars() {
    // Day index 150 is 2014-05-31.
    let event_date = date(2014, 5, 31);
    let mut market = market_for("AA", 200, Some(150), 0.04);
    market.extend(market_for("BB", 200, Some(150), -0.02));

    let records = vec![
        event_record("e1", "AA", event_date),
        event_record("e2", "BB", event_date),
    ];
    let classifications = vec![
        Classification::empty("e1", Severity::new(4)),
        Classification::empty("e2", Severity::new(1)),
    ];

    let outcome =
        run_event_study(&records, &classifications, &market, &StudyConfig::default()).unwrap();

    assert_eq!(outcome.windows, vec![(-1, 1), (-2, 2), (0, 5)]);
    assert_eq!(outcome.events.len(), 2);
    assert_eq!(outcome.attrition.candidates, 2);
    assert_eq!(outcome.attrition.with_estimation_fit, 2);

    let first = &outcome.events[0];
    assert_eq!(first.firm, "AA");
    assert_eq!(first.event_date, event_date);
    assert!((first.model.beta - 1.1).abs() < 1e-9);
    assert!((first.model.alpha - 0.0002).abs() < 1e-9);
    assert!((first.cars[0].unwrap() - 0.04).abs() < 1e-9);

    // Every default window contains the shock day, so each event's CAR
    // equals its shock in all three windows.
    let second = &outcome.events[1];
    for w in 0..3 {
        assert!((first.cars[w].unwrap() - 0.04).abs() < 1e-9);
        assert!((second.cars[w].unwrap() + 0.02).abs() < 1e-9);
    }

    let summary = &outcome.summaries[0];
    assert_eq!(summary.n, 2);
    assert!((summary.mean_car.unwrap() - 0.01).abs() < 1e-9);
    assert!((summary.t_stat.unwrap() - 1.0 / 3.0).abs() < 1e-6);
    let p = summary.p_value.unwrap();
    assert!(p > 0.0 && p < 1.0);

    // Severity split: e1 is high (4 >= 3), e2 low.
    assert_eq!(summary.n_high_severity, 1);
    assert!((summary.mean_car_high_severity.unwrap() - 0.04).abs() < 1e-9);
    assert_eq!(summary.n_low_severity, 1);
    assert!((summary.mean_car_low_severity.unwrap() + 0.02).abs() < 1e-9);
}

#[test]
fn model_tracking_returns_yield_zero_cars() {
    // No shock anywhere: abnormal returns vanish and every CAR is zero.
    let market = market_for("DD", 200, None, 0.0);
    let records = vec![event_record("e1", "DD", date(2014, 5, 31))];
    let classifications = vec![Classification::empty("e1", Severity::new(2))];

    let outcome =
        run_event_study(&records, &classifications, &market, &StudyConfig::default()).unwrap();

    let event = &outcome.events[0];
    for w in 0..3 {
        assert!(event.cars[w].unwrap().abs() < 1e-9);
    }
    assert!(outcome.summaries[0].mean_car.unwrap().abs() < 1e-9);
}

#[test]
fn disclosure_on_missing_day_snaps_to_next_trading_day() {
    // Drop 2014-05-31 from the series and plant the shock on the next
    // trading day; a disclosure dated on the gap must land there.
    let market: Vec<MarketRow> = market_for("CC", 200, Some(151), 0.04)
        .into_iter()
        .filter(|row| row.date != date(2014, 5, 31))
        .collect();

    let records = vec![event_record("gap", "CC", date(2014, 5, 31))];
    let classifications = vec![Classification::empty("gap", Severity::new(0))];

    let outcome =
        run_event_study(&records, &classifications, &market, &StudyConfig::default()).unwrap();

    assert_eq!(outcome.events.len(), 1);
    assert_eq!(outcome.events[0].event_date, date(2014, 6, 1));
    assert!((outcome.events[0].cars[0].unwrap() - 0.04).abs() < 1e-9);
}

#[test]
fn attrition_ladder_counts_each_exclusion() {
    let market = market_for("AA", 200, None, 0.0);
    let records = vec![
        event_record("good", "AA", date(2014, 5, 31)),
        BreachRecord {
            firm: None,
            ..event_record("no-firm", "AA", date(2014, 5, 31))
        },
        event_record("no-series", "ZZ", date(2014, 5, 31)),
        event_record("past-end", "AA", date(2015, 6, 1)),
        event_record("thin-estimation", "AA", date(2014, 1, 15)),
    ];
    let classifications: Vec<Classification> = records
        .iter()
        .map(|r| Classification::empty(r.id.as_str(), Severity::new(0)))
        .collect();

    let outcome =
        run_event_study(&records, &classifications, &market, &StudyConfig::default()).unwrap();

    let attrition = outcome.attrition;
    assert_eq!(attrition.candidates, 5);
    assert_eq!(attrition.with_firm_and_date, 4);
    assert_eq!(attrition.with_market_series, 3);
    assert_eq!(attrition.with_event_day, 2);
    assert_eq!(attrition.with_estimation_fit, 1);
    assert_eq!(outcome.events.len(), 1);
    assert_eq!(outcome.events[0].id, "good");
}

#[test]
fn window_past_series_end_yields_no_car() {
    let market = market_for("AA", 200, None, 0.0);
    // Day index 197: [-1, 1] fits, [0, 5] runs past the last row.
    let records = vec![event_record("late", "AA", start_date() + Duration::days(197))];
    let classifications = vec![Classification::empty("late", Severity::new(0))];

    let outcome =
        run_event_study(&records, &classifications, &market, &StudyConfig::default()).unwrap();

    let event = &outcome.events[0];
    assert!(event.cars[0].is_some());
    assert!(event.cars[2].is_none(), "partial window must not produce a CAR");

    let tail_summary = &outcome.summaries[2];
    assert_eq!(tail_summary.n, 0);
    assert!(tail_summary.mean_car.is_none());
    assert!(tail_summary.t_stat.is_none());

    // Single-event window: mean defined, dispersion is not.
    let head_summary = &outcome.summaries[0];
    assert_eq!(head_summary.n, 1);
    assert!(head_summary.mean_car.unwrap().abs() < 1e-9);
    assert!(head_summary.t_stat.is_none());
}

#[test]
fn firms_absent_from_market_error_as_no_overlap() {
    let market = market_for("AA", 200, None, 0.0);
    let records = vec![
        event_record("q1", "QQ", date(2014, 5, 31)),
        event_record("q2", "QR", date(2014, 6, 2)),
    ];
    let classifications = vec![
        Classification::empty("q1", Severity::new(0)),
        Classification::empty("q2", Severity::new(0)),
    ];

    let err =
        run_event_study(&records, &classifications, &market, &StudyConfig::default()).unwrap_err();
    assert!(matches!(err, StudyError::NoMarketOverlap));
}

#[test]
fn empty_market_reports_no_usable_events() {
    let records = vec![event_record("q1", "AA", date(2014, 5, 31))];
    let classifications = vec![Classification::empty("q1", Severity::new(0))];

    let err = run_event_study(&records, &classifications, &[], &StudyConfig::default()).unwrap_err();
    assert!(matches!(err, StudyError::NoUsableEvents { total: 1 }));
}

#[test]
fn malformed_windows_are_rejected() {
    let market = market_for("AA", 200, None, 0.0);
    let records = vec![event_record("e1", "AA", date(2014, 5, 31))];
    let classifications = vec![Classification::empty("e1", Severity::new(0))];

    let backwards = StudyConfig {
        event_windows: vec![[2, -2]],
        ..Default::default()
    };
    let err = run_event_study(&records, &classifications, &market, &backwards).unwrap_err();
    assert!(matches!(err, StudyError::InvalidWindow { start: 2, end: -2 }));

    let estimation_after_event = StudyConfig {
        estimation_start: Some(-10),
        estimation_end: Some(5),
        ..Default::default()
    };
    let err =
        run_event_study(&records, &classifications, &market, &estimation_after_event).unwrap_err();
    assert!(matches!(err, StudyError::InvalidEstimationWindow { .. }));
}
