//! Cross-sectional t inference via the Student-t distribution.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// One-sample t test of the mean against zero.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TTestResult {
    pub mean: f64,
    pub t_stat: Option<f64>,
    pub p_value: Option<f64>,
    pub n: usize,
}

/// t statistic and two-sided p-value for the mean of `values`.
///
/// The statistic is undefined below 2 observations or with zero
/// sample variance; those cases report `None` rather than a spurious
/// certainty.
pub(crate) fn one_sample_t(values: &[f64]) -> TTestResult {
    let n = values.len();
    if n == 0 {
        return TTestResult {
            mean: 0.0,
            t_stat: None,
            p_value: None,
            n,
        };
    }

    let n_f = n as f64;
    let mean = values.iter().sum::<f64>() / n_f;
    if n < 2 {
        return TTestResult {
            mean,
            t_stat: None,
            p_value: None,
            n,
        };
    }

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n_f - 1.0);
    if !variance.is_finite() || variance <= 0.0 {
        return TTestResult {
            mean,
            t_stat: None,
            p_value: None,
            n,
        };
    }

    let se = (variance / n_f).sqrt();
    let t = mean / se;
    TTestResult {
        mean,
        t_stat: Some(t),
        p_value: two_sided_p(t, n_f - 1.0),
        n,
    }
}

/// Two-sided p-value for a t statistic with `df` degrees of freedom.
pub(crate) fn two_sided_p(t: f64, df: f64) -> Option<f64> {
    if df <= 0.0 || !t.is_finite() {
        return None;
    }
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => {
            let p = 2.0 * (1.0 - dist.cdf(t.abs()));
            p.is_finite().then(|| p.clamp(0.0, 1.0))
        }
        Err(_) => None,
    }
}
