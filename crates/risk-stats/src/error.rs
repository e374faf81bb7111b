//! Error types for return and risk computations.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, RiskError>;

/// Errors that can occur while deriving returns or computing risk statistics.
#[derive(Debug, Error)]
pub enum RiskError {
    /// Fewer observations than a formula's degrees of freedom require
    #[error("Insufficient data: need {required} observations, got {available}")]
    InsufficientData {
        /// Minimum number of observations the computation needs
        required: usize,
        /// Number of observations actually supplied
        available: usize,
    },

    /// Two series do not share a common, orderable date index
    #[error("Misaligned series: {0}")]
    MisalignedSeries(String),

    /// Market return variance is zero, making beta undefined
    #[error("Degenerate market: market returns have zero variance")]
    DegenerateMarket,

    /// A price observation that cannot produce a simple return
    #[error("Non-positive price {price} on {date}")]
    NonPositivePrice {
        /// Date of the offending observation
        date: NaiveDate,
        /// The offending close price
        price: f64,
    },

    /// A date cell that does not parse as an ISO date
    #[error("Unparseable date: {0}")]
    InvalidDate(String),

    /// Missing required column in input data
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Polars DataFrame error
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
