//! Event study and asymmetry configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ASYMMETRY_WINDOW_DAYS, DEFAULT_ESTIMATION_END, DEFAULT_ESTIMATION_START,
    DEFAULT_EVENT_WINDOWS, DEFAULT_MIN_ESTIMATION_OBS,
};

/// Configuration for the market-model event study.
///
/// All offsets are in trading days relative to the event day (day 0 is
/// the first trading day on or after the disclosure date).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StudyConfig {
    /// Estimation window start offset. Default: -120.
    pub estimation_start: Option<i64>,
    /// Estimation window end offset; must be before the event. Default: -21.
    pub estimation_end: Option<i64>,
    /// Minimum usable estimation observations per event; events below
    /// this are dropped and counted as attrition. Default: 60.
    pub min_estimation_obs: Option<usize>,
    /// Event windows as `[start, end]` offset pairs for cumulative
    /// abnormal returns. Default: [[-1, 1], [-2, 2], [0, 5]].
    #[serde(default)]
    pub event_windows: Vec<[i64; 2]>,
    /// Half-width of the pre/post windows for the information-asymmetry
    /// comparison. Default: 20.
    pub asymmetry_window_days: Option<i64>,
}

impl StudyConfig {
    pub fn effective_estimation_start(&self) -> i64 {
        self.estimation_start.unwrap_or(DEFAULT_ESTIMATION_START)
    }

    pub fn effective_estimation_end(&self) -> i64 {
        self.estimation_end.unwrap_or(DEFAULT_ESTIMATION_END)
    }

    pub fn effective_min_estimation_obs(&self) -> usize {
        self.min_estimation_obs.unwrap_or(DEFAULT_MIN_ESTIMATION_OBS)
    }

    /// Event windows as `(start, end)` pairs, defaulting to the three
    /// standard windows when none are configured.
    pub fn effective_event_windows(&self) -> Vec<(i64, i64)> {
        if self.event_windows.is_empty() {
            DEFAULT_EVENT_WINDOWS.to_vec()
        } else {
            self.event_windows.iter().map(|w| (w[0], w[1])).collect()
        }
    }

    pub fn effective_asymmetry_window(&self) -> i64 {
        self.asymmetry_window_days.unwrap_or(DEFAULT_ASYMMETRY_WINDOW_DAYS)
    }
}
