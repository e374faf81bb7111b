//! CAPM expected returns - `E(R_i) = Rf + β(E(R_m) - Rf)`.
//!
//! Evaluable at daily, quarterly, or annual scale. The risk-free rate is
//! quoted annually and converted to a period rate by compounding; the
//! market return is a per-period arithmetic figure derived from the mean
//! daily market return.

use derive_more::Display;

/// Period scale at which a CAPM figure is quoted.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PeriodScale {
    /// One trading day
    Daily,
    /// One calendar quarter (63 trading days)
    Quarterly,
    /// One calendar year (252 trading days)
    Annual,
}

impl PeriodScale {
    /// Number of periods of this scale in a year, used for compounding.
    pub const fn periods_per_year(self) -> f64 {
        match self {
            Self::Daily => 252.0,
            Self::Quarterly => 4.0,
            Self::Annual => 1.0,
        }
    }

    /// Trading days contained in one period of this scale.
    pub const fn trading_days(self) -> f64 {
        match self {
            Self::Daily => 1.0,
            Self::Quarterly => 63.0,
            Self::Annual => 252.0,
        }
    }
}

/// CAPM expected return for one period, `rf + β(market - rf)`.
///
/// All three inputs must be quoted at the same period scale.
pub const fn expected_return(beta: f64, risk_free: f64, market_return: f64) -> f64 {
    risk_free + beta * (market_return - risk_free)
}

/// Convert an annual risk-free rate to a per-period rate by compounding:
/// `rf_period = (1 + rf_annual)^(1 / periods_per_year) - 1`.
pub fn risk_free_per_period(annual_risk_free: f64, scale: PeriodScale) -> f64 {
    (1.0 + annual_risk_free).powf(1.0 / scale.periods_per_year()) - 1.0
}

/// Arithmetic market return for one period of `scale`, from the mean daily
/// market return: `mean_daily × trading_days`.
pub const fn market_return_per_period(mean_daily_return: f64, scale: PeriodScale) -> f64 {
    mean_daily_return * scale.trading_days()
}

/// CAPM expected returns at the three scales a dashboard quotes.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CapmExpectedReturns {
    /// Expected return over one trading day
    pub daily: f64,
    /// Expected return over one quarter
    pub quarterly: f64,
    /// Expected return over one year
    pub annual: f64,
}

/// Evaluate CAPM at daily, quarterly, and annual scale from one beta, an
/// annual risk-free rate, and the market's mean daily return.
pub fn capm_across_scales(
    beta: f64,
    annual_risk_free: f64,
    mean_daily_market_return: f64,
) -> CapmExpectedReturns {
    let at = |scale| {
        expected_return(
            beta,
            risk_free_per_period(annual_risk_free, scale),
            market_return_per_period(mean_daily_market_return, scale),
        )
    };
    CapmExpectedReturns {
        daily: at(PeriodScale::Daily),
        quarterly: at(PeriodScale::Quarterly),
        annual: at(PeriodScale::Annual),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn expected_return_formula() {
        // rf 2%, beta 1.2, market 8% annual.
        assert_relative_eq!(
            expected_return(1.2, 0.02, 0.08),
            0.02 + 1.2 * 0.06,
            epsilon = 1e-15
        );
    }

    #[test]
    fn beta_of_one_earns_the_market() {
        assert_relative_eq!(expected_return(1.0, 0.02, 0.08), 0.08, epsilon = 1e-15);
    }

    #[rstest]
    #[case(PeriodScale::Daily, 252.0)]
    #[case(PeriodScale::Quarterly, 4.0)]
    #[case(PeriodScale::Annual, 1.0)]
    fn risk_free_compounds_back_to_annual(#[case] scale: PeriodScale, #[case] periods: f64) {
        let rf_period = risk_free_per_period(0.02, scale);
        assert_relative_eq!((1.0 + rf_period).powf(periods) - 1.0, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn annual_scale_leaves_risk_free_unchanged() {
        assert_relative_eq!(
            risk_free_per_period(0.03, PeriodScale::Annual),
            0.03,
            epsilon = 1e-15
        );
    }

    #[test]
    fn across_scales_matches_per_scale_evaluation() {
        let capm = capm_across_scales(1.1, 0.02, 0.0004);

        let rf_q = risk_free_per_period(0.02, PeriodScale::Quarterly);
        assert_relative_eq!(
            capm.quarterly,
            expected_return(1.1, rf_q, 0.0004 * 63.0),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            capm.annual,
            expected_return(1.1, 0.02, 0.0004 * 252.0),
            epsilon = 1e-15
        );
        // Daily figure is far smaller than the annual one.
        assert!(capm.daily.abs() < capm.annual.abs());
    }
}
