//! Simple OLS fit of the market model.

use serde::Serialize;

/// Fitted market model `ret = alpha + beta * mkt_ret` for one event.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarketModel {
    pub alpha: f64,
    pub beta: f64,
    /// Estimation observations the fit used.
    pub n_obs: usize,
    /// Residual standard deviation (df = n - 2); 0 when n <= 2.
    pub residual_sd: f64,
}

impl MarketModel {
    /// Return in excess of the model's prediction.
    pub fn abnormal_return(&self, ret: f64, mkt_ret: f64) -> f64 {
        ret - (self.alpha + self.beta * mkt_ret)
    }
}

/// Fit the market model by least squares.
///
/// `None` with fewer than 2 observations or a constant market column,
/// where the slope is undefined.
pub fn fit_market_model(rets: &[f64], mkt_rets: &[f64]) -> Option<MarketModel> {
    debug_assert_eq!(rets.len(), mkt_rets.len());
    let n = rets.len();
    if n < 2 {
        return None;
    }

    let n_f = n as f64;
    let mean_ret = rets.iter().sum::<f64>() / n_f;
    let mean_mkt = mkt_rets.iter().sum::<f64>() / n_f;

    let mut cov = 0.0;
    let mut var = 0.0;
    for (r, m) in rets.iter().zip(mkt_rets) {
        cov += (r - mean_ret) * (m - mean_mkt);
        var += (m - mean_mkt).powi(2);
    }
    if !var.is_finite() || var <= 0.0 {
        return None;
    }

    let beta = cov / var;
    let alpha = mean_ret - beta * mean_mkt;
    if !beta.is_finite() || !alpha.is_finite() {
        return None;
    }

    let residual_ss: f64 = rets
        .iter()
        .zip(mkt_rets)
        .map(|(r, m)| (r - (alpha + beta * m)).powi(2))
        .sum();
    let residual_sd = if n > 2 {
        (residual_ss / (n_f - 2.0)).sqrt()
    } else {
        0.0
    };

    Some(MarketModel {
        alpha,
        beta,
        n_obs: n,
        residual_sd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_coefficients_on_noise_free_data() {
        let mkt: Vec<f64> = (0..100).map(|i| (i as f64 - 50.0) / 1000.0).collect();
        let rets: Vec<f64> = mkt.iter().map(|m| 0.0005 + 1.3 * m).collect();
        let model = fit_market_model(&rets, &mkt).unwrap();
        assert!((model.alpha - 0.0005).abs() < 1e-12);
        assert!((model.beta - 1.3).abs() < 1e-12);
        assert!(model.residual_sd < 1e-12);
        assert_eq!(model.n_obs, 100);
    }

    #[test]
    fn constant_market_is_degenerate() {
        let mkt = vec![0.01; 50];
        let rets: Vec<f64> = (0..50).map(|i| i as f64 / 100.0).collect();
        assert!(fit_market_model(&rets, &mkt).is_none());
    }

    #[test]
    fn too_few_observations() {
        assert!(fit_market_model(&[0.01], &[0.02]).is_none());
        assert!(fit_market_model(&[], &[]).is_none());
    }

    #[test]
    fn abnormal_return_subtracts_prediction() {
        let model = MarketModel {
            alpha: 0.001,
            beta: 2.0,
            n_obs: 60,
            residual_sd: 0.0,
        };
        let ar = model.abnormal_return(0.05, 0.01);
        assert!((ar - (0.05 - 0.021)).abs() < 1e-12);
    }
}
