//! Boundary capabilities for data-supplying and result-consuming
//! collaborators.
//!
//! The engine itself never fetches data and never renders anything. A
//! [`MarketDataSource`] hands price series in; a [`StatisticsSink`] takes
//! statistic values out. Both seams live with the caller, so every engine
//! function stays a pure computation over its arguments.

use crate::{PriceSeries, Result, RollingSeries};

/// A collaborator that supplies daily closes for an instrument.
///
/// Implementations decide where prices come from (a CSV file, an HTTP
/// market-data API, a test fixture). Fetch errors surface through the
/// crate's [`Result`]; the engine performs no retries.
pub trait MarketDataSource: Send + Sync {
    /// Fetch the daily close series for `symbol`.
    fn fetch(&self, symbol: &str) -> Result<PriceSeries>;
}

/// A collaborator that consumes computed statistics.
///
/// Implementations decide how values are presented (a table, a chart, a
/// JSON document). The engine never calls into a sink; the driver does,
/// after computation succeeds.
pub trait StatisticsSink {
    /// Receive a named scalar statistic.
    fn scalar(&mut self, name: &str, value: f64) -> Result<()>;

    /// Receive a named rolling series.
    fn series(&mut self, name: &str, series: &RollingSeries) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug)]
    struct FixtureSource;

    impl MarketDataSource for FixtureSource {
        fn fetch(&self, _symbol: &str) -> Result<PriceSeries> {
            let obs = (1..=4)
                .map(|day| {
                    (
                        NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                        100.0 + day as f64,
                    )
                })
                .collect();
            PriceSeries::new(obs)
        }
    }

    #[derive(Debug, Default)]
    struct RecordingSink {
        scalars: Vec<(String, f64)>,
    }

    impl StatisticsSink for RecordingSink {
        fn scalar(&mut self, name: &str, value: f64) -> Result<()> {
            self.scalars.push((name.to_string(), value));
            Ok(())
        }

        fn series(&mut self, _name: &str, _series: &RollingSeries) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn fixture_source_feeds_the_engine() {
        let source = FixtureSource;
        let prices = source.fetch("TEST").unwrap();
        let returns = prices.returns();
        assert_eq!(returns.len(), 3);

        let mut sink = RecordingSink::default();
        let mean = crate::descriptive::mean_return(returns.values()).unwrap();
        sink.scalar("mean_daily_return", mean).unwrap();
        assert_eq!(sink.scalars.len(), 1);
    }
}
