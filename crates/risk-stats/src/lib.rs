#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/riskstats/risk-stats/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod beta;
pub mod capm;
pub mod descriptive;
pub mod error;
pub mod frame;
pub mod rolling;
pub mod series;
pub mod summary;
pub mod traits;
pub mod var;

// Re-export core types
pub use beta::{beta, rolling_beta, sample_covariance};
pub use capm::{CapmExpectedReturns, PeriodScale, capm_across_scales, expected_return};
pub use descriptive::{
    annualized_std_dev, arithmetic_annual_return, cumulative_return, geometric_annual_return,
    mean_return, sharpe_ratio,
};
pub use error::{Result, RiskError};
pub use frame::{price_series_from_frame, rolling_series_to_frame};
pub use rolling::rolling_volatility;
pub use series::{AlignedReturnPair, PriceSeries, ReturnSeries, RollingSeries, align};
pub use summary::{RiskConfig, RiskStatistics};
pub use traits::{MarketDataSource, StatisticsSink};
pub use var::{annualized_parametric_var, parametric_var};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Trading days per year used for annualization defaults.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
