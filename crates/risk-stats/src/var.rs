//! Parametric Value-at-Risk - Gaussian loss bound.
//!
//! Under a Gaussian return assumption the one-sided loss bound at a given
//! confidence level is `VaR = z·σ - μ`, expressed as a positive loss
//! fraction. Both terms are kept in the same period units: the daily form
//! combines daily mean and daily deviation, the annualized form scales the
//! deviation by `sqrt(periods_per_year)` and the mean by `periods_per_year`
//! before combining. Mixing scales across the two terms is never done.

use crate::{Result, descriptive};

/// One-sided z-score for 90% confidence.
pub const Z_90: f64 = 1.282;
/// One-sided z-score for 95% confidence.
pub const Z_95: f64 = 1.645;
/// One-sided z-score for 99% confidence.
pub const Z_99: f64 = 2.326;

/// Parametric VaR in period units, `z·σ_period - μ_period`.
///
/// A positive result is the loss fraction not exceeded at the confidence
/// level implied by `z_score`. Fails with
/// [`RiskError::InsufficientData`](crate::RiskError::InsufficientData) when
/// fewer than 2 observations are supplied.
pub fn parametric_var(returns: &[f64], z_score: f64) -> Result<f64> {
    let mean = descriptive::mean_return(returns)?;
    let std_dev = descriptive::sample_std_dev(returns)?;
    Ok(z_score * std_dev - mean)
}

/// Annualized parametric VaR.
///
/// Annualizes each component first and then combines:
/// `z·σ_period·sqrt(periods_per_year) - μ_period·periods_per_year`.
/// This is the single scaling law used throughout the crate; the period
/// VaR is never rescaled wholesale by `sqrt(periods_per_year)`, which
/// would scale the mean term by the wrong factor.
pub fn annualized_parametric_var(returns: &[f64], z_score: f64, periods_per_year: f64) -> Result<f64> {
    let mean = descriptive::mean_return(returns)?;
    let std_dev = descriptive::sample_std_dev(returns)?;
    Ok(z_score * std_dev * periods_per_year.sqrt() - mean * periods_per_year)
}
