//! Descriptive return statistics - mean, dispersion, and compounded growth.
//!
//! All functions operate on a slice of simple returns in period (daily)
//! units. Annualized variants scale by the number of periods per year,
//! `sqrt(252)` for dispersion and `252` for arithmetic means.

use crate::{Result, RiskError};

/// Arithmetic mean of a return sequence.
///
/// Defined for any non-empty sequence; a single element yields itself.
pub fn mean_return(returns: &[f64]) -> Result<f64> {
    if returns.is_empty() {
        return Err(RiskError::InsufficientData {
            required: 1,
            available: 0,
        });
    }
    Ok(returns.iter().sum::<f64>() / returns.len() as f64)
}

/// Sample variance with Bessel's correction (`n - 1` divisor).
///
/// Fails with [`RiskError::InsufficientData`] when fewer than 2
/// observations are supplied.
pub fn sample_variance(returns: &[f64]) -> Result<f64> {
    if returns.len() < 2 {
        return Err(RiskError::InsufficientData {
            required: 2,
            available: returns.len(),
        });
    }
    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let sum_sq: f64 = returns.iter().map(|r| (r - mean) * (r - mean)).sum();
    Ok(sum_sq / (returns.len() - 1) as f64)
}

/// Sample standard deviation in period units (`n - 1` divisor).
pub fn sample_std_dev(returns: &[f64]) -> Result<f64> {
    Ok(sample_variance(returns)?.sqrt())
}

/// Annualized sample standard deviation.
///
/// `σ_annual = σ_period × sqrt(periods_per_year)`.
pub fn annualized_std_dev(returns: &[f64], periods_per_year: f64) -> Result<f64> {
    Ok(sample_std_dev(returns)? * periods_per_year.sqrt())
}

/// Total compounded return over the full sequence, `∏(1 + r) - 1`.
///
/// When the returns were derived from a price series this equals
/// `last_price / first_price - 1`.
pub fn cumulative_return(returns: &[f64]) -> Result<f64> {
    if returns.is_empty() {
        return Err(RiskError::InsufficientData {
            required: 1,
            available: 0,
        });
    }
    Ok(returns.iter().map(|r| 1.0 + r).product::<f64>() - 1.0)
}

/// Geometric annualized return, `(∏(1 + r))^(periods_per_year / n) - 1`.
pub fn geometric_annual_return(returns: &[f64], periods_per_year: f64) -> Result<f64> {
    if returns.is_empty() {
        return Err(RiskError::InsufficientData {
            required: 1,
            available: 0,
        });
    }
    let growth: f64 = returns.iter().map(|r| 1.0 + r).product();
    Ok(growth.powf(periods_per_year / returns.len() as f64) - 1.0)
}

/// Arithmetic annualized return, `mean × periods_per_year`.
pub fn arithmetic_annual_return(returns: &[f64], periods_per_year: f64) -> Result<f64> {
    Ok(mean_return(returns)? * periods_per_year)
}

/// Annualized Sharpe ratio.
///
/// The per-period excess return uses the arithmetically de-annualized
/// risk-free rate, matching the arithmetic-mean numerator:
/// `sharpe = (mean - rf_annual / periods_per_year) / σ_period ×
/// sqrt(periods_per_year)`.
///
/// Fails with [`RiskError::InsufficientData`] when fewer than 2
/// observations are supplied.
pub fn sharpe_ratio(
    returns: &[f64],
    annual_risk_free: f64,
    periods_per_year: f64,
) -> Result<f64> {
    let mean = mean_return(returns)?;
    let std_dev = sample_std_dev(returns)?;
    let rf_period = annual_risk_free / periods_per_year;
    Ok((mean - rf_period) / std_dev * periods_per_year.sqrt())
}
