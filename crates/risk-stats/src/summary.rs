//! One-call risk summary for an aligned asset/market pair.
//!
//! Bundles the point statistics a dashboard renders in one table: mean and
//! cumulative return, annualized dispersion, beta, annual Value-at-Risk,
//! and CAPM expected returns at the three quoted scales.

use crate::{
    AlignedReturnPair, Result,
    capm::{self, CapmExpectedReturns},
    descriptive, var,
};

/// Configuration for a risk summary.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RiskConfig {
    /// Trading periods per year used for annualization.
    pub periods_per_year: f64,
    /// Default trailing-window size for rolling statistics.
    pub window: usize,
    /// One-sided z-score for parametric VaR.
    pub z_score: f64,
    /// Annual risk-free rate for CAPM.
    pub risk_free_rate: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            periods_per_year: crate::TRADING_DAYS_PER_YEAR,
            window: 60,
            z_score: var::Z_95,
            risk_free_rate: 0.02,
        }
    }
}

/// Immutable result bundle of point risk statistics.
///
/// Every field keeps full precision; rounding happens at presentation time.
/// Return fields are fractions, not percentages.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RiskStatistics {
    /// Mean daily asset return
    pub mean_daily_return: f64,
    /// Annualized sample standard deviation of asset returns
    pub annualized_std_dev: f64,
    /// Total compounded asset return over the window
    pub cumulative_return: f64,
    /// Arithmetic annualized asset return
    pub arithmetic_annual_return: f64,
    /// Geometric annualized asset return
    pub geometric_annual_return: f64,
    /// Beta of the asset against the market
    pub beta: f64,
    /// Annualized Sharpe ratio of asset returns
    pub sharpe_ratio: f64,
    /// Annualized parametric Value-at-Risk, a positive loss fraction
    pub annual_value_at_risk: f64,
    /// CAPM expected returns at daily, quarterly, and annual scale
    pub capm: CapmExpectedReturns,
}

impl RiskStatistics {
    /// Compute the full bundle from an aligned pair.
    ///
    /// Pure and stateless: identical inputs yield identical output, and
    /// every underlying error (insufficient data, degenerate market)
    /// propagates unchanged.
    pub fn compute(pair: &AlignedReturnPair, config: &RiskConfig) -> Result<Self> {
        let asset = pair.asset().values();
        let market = pair.market().values();

        let beta = crate::beta::beta(pair)?;
        let mean_daily_market = descriptive::mean_return(market)?;

        Ok(Self {
            mean_daily_return: descriptive::mean_return(asset)?,
            annualized_std_dev: descriptive::annualized_std_dev(asset, config.periods_per_year)?,
            cumulative_return: descriptive::cumulative_return(asset)?,
            arithmetic_annual_return: descriptive::arithmetic_annual_return(
                asset,
                config.periods_per_year,
            )?,
            geometric_annual_return: descriptive::geometric_annual_return(
                asset,
                config.periods_per_year,
            )?,
            beta,
            sharpe_ratio: descriptive::sharpe_ratio(
                asset,
                config.risk_free_rate,
                config.periods_per_year,
            )?,
            annual_value_at_risk: var::annualized_parametric_var(
                asset,
                config.z_score,
                config.periods_per_year,
            )?,
            capm: capm::capm_across_scales(beta, config.risk_free_rate, mean_daily_market),
        })
    }
}
