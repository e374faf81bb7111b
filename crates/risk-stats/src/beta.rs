//! Market beta estimation - systematic risk exposure.
//!
//! Beta measures the sensitivity of asset returns to market returns:
//! `β = Cov(R_i, R_m) / Var(R_m)`, both moments using the sample (n-1)
//! divisor. Beta = 1 means the asset moves in line with the market;
//! beta > 1 indicates amplified market movements.

use crate::{
    AlignedReturnPair, Result, RiskError, RollingSeries,
    descriptive::{mean_return, sample_variance},
};

/// Sample covariance of two equal-length return slices (`n - 1` divisor).
///
/// Fails with [`RiskError::MisalignedSeries`] on a length mismatch and with
/// [`RiskError::InsufficientData`] when fewer than 2 observations are
/// supplied.
pub fn sample_covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(RiskError::MisalignedSeries(format!(
            "covariance over {} and {} observations",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(RiskError::InsufficientData {
            required: 2,
            available: x.len(),
        });
    }
    let mean_x = mean_return(x)?;
    let mean_y = mean_return(y)?;
    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum();
    Ok(sum / (x.len() - 1) as f64)
}

/// Beta over the full aligned window.
///
/// Fails with [`RiskError::InsufficientData`] when the pair has fewer than
/// 2 points and with [`RiskError::DegenerateMarket`] when the market
/// variance is exactly zero. A zero-variance market never yields ±infinity;
/// the caller always learns which condition occurred.
pub fn beta(pair: &AlignedReturnPair) -> Result<f64> {
    beta_of(pair.asset().values(), pair.market().values())
}

/// Rolling beta over trailing windows of `window` points.
///
/// For each index `i` in `window..n` the value is the beta of the points
/// `[i - window, i)`, keyed by the date of the window's last point. Means,
/// variance, and covariance are recomputed strictly from the current
/// window's data; the global sample mean never enters a windowed sum.
///
/// Fails with [`RiskError::InsufficientData`] when `window < 2` or
/// `n <= window`.
pub fn rolling_beta(pair: &AlignedReturnPair, window: usize) -> Result<RollingSeries> {
    let n = pair.len();
    if window < 2 {
        return Err(RiskError::InsufficientData {
            required: 2,
            available: window,
        });
    }
    if n <= window {
        return Err(RiskError::InsufficientData {
            required: window + 1,
            available: n,
        });
    }

    let asset = pair.asset().values();
    let market = pair.market().values();
    let dates = pair.dates();

    let mut out_dates = Vec::with_capacity(n - window);
    let mut out_values = Vec::with_capacity(n - window);
    for i in window..n {
        let value = beta_of(&asset[i - window..i], &market[i - window..i])?;
        out_dates.push(dates[i - 1]);
        out_values.push(value);
    }

    Ok(RollingSeries::from_parts(out_dates, out_values))
}

fn beta_of(asset: &[f64], market: &[f64]) -> Result<f64> {
    let covariance = sample_covariance(asset, market)?;
    let market_variance = sample_variance(market)?;
    if market_variance == 0.0 {
        return Err(RiskError::DegenerateMarket);
    }
    Ok(covariance / market_variance)
}
