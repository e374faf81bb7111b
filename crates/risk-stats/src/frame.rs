//! DataFrame adapters at the engine boundary.
//!
//! Market-data collaborators hand over tabular closes; renderers take
//! tabular statistics back. These converters bridge both directions so the
//! engine core stays on plain aligned series. Date columns carry ISO
//! (`YYYY-MM-DD`) strings.

use crate::{PriceSeries, Result, RiskError, RollingSeries};
use chrono::NaiveDate;
use polars::prelude::*;

/// Extract a [`PriceSeries`] from a DataFrame with a string date column and
/// a numeric close column.
///
/// Rows with a null close are excluded, matching the missing-row handling
/// of [`PriceSeries::new`]. Fails with [`RiskError::MissingColumn`] when a
/// column is absent and [`RiskError::InvalidDate`] when a date cell does
/// not parse.
pub fn price_series_from_frame(
    df: &DataFrame,
    date_column: &str,
    close_column: &str,
) -> Result<PriceSeries> {
    let dates = df
        .column(date_column)
        .map_err(|_| RiskError::MissingColumn(date_column.to_string()))?
        .as_materialized_series()
        .str()?;
    // CSV closes may come in as integers; normalize to f64 before reading.
    let closes = df
        .column(close_column)
        .map_err(|_| RiskError::MissingColumn(close_column.to_string()))?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let closes = closes.f64()?;

    let mut observations = Vec::with_capacity(df.height());
    for (date, close) in dates.into_iter().zip(closes) {
        let Some(close) = close else { continue };
        let date = date.ok_or_else(|| RiskError::InvalidDate("null date cell".to_string()))?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| RiskError::InvalidDate(date.to_string()))?;
        observations.push((date, close));
    }

    PriceSeries::new(observations)
}

/// Render a [`RollingSeries`] as a two-column DataFrame (`date`, value),
/// ready for a chart or table collaborator.
pub fn rolling_series_to_frame(series: &RollingSeries, value_name: &str) -> Result<DataFrame> {
    let dates: Vec<String> = series.dates().iter().map(|d| d.to_string()).collect();
    let values: Vec<f64> = series.values().to_vec();
    Ok(df!("date" => dates, value_name => values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TRADING_DAYS_PER_YEAR, rolling::rolling_volatility};
    use approx::assert_relative_eq;

    #[test]
    fn frame_round_trips_into_prices() {
        let df = df!(
            "date" => ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"],
            "close" => [100.0, 101.0, 99.0, 103.0]
        )
        .unwrap();

        let prices = price_series_from_frame(&df, "date", "close").unwrap();
        assert_eq!(prices.len(), 4);
        assert_relative_eq!(prices.first_price().unwrap(), 100.0, epsilon = 1e-12);
        assert_relative_eq!(prices.last_price().unwrap(), 103.0, epsilon = 1e-12);
    }

    #[test]
    fn null_closes_are_excluded() {
        let df = df!(
            "date" => ["2024-01-01", "2024-01-02", "2024-01-03"],
            "close" => [Some(100.0), None, Some(102.0)]
        )
        .unwrap();

        let prices = price_series_from_frame(&df, "date", "close").unwrap();
        assert_eq!(prices.len(), 2);
        let returns = prices.returns();
        assert_relative_eq!(returns.values()[0], 0.02, epsilon = 1e-12);
    }

    #[test]
    fn integer_closes_are_accepted() {
        let df = df!(
            "date" => ["2024-01-01", "2024-01-02", "2024-01-03"],
            "close" => [100i64, 101, 103]
        )
        .unwrap();

        let prices = price_series_from_frame(&df, "date", "close").unwrap();
        assert_eq!(prices.len(), 3);
        assert_relative_eq!(prices.last_price().unwrap(), 103.0, epsilon = 1e-12);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let df = df!("date" => ["2024-01-01"], "close" => [100.0]).unwrap();
        let err = price_series_from_frame(&df, "date", "adj_close").unwrap_err();
        assert!(matches!(err, RiskError::MissingColumn(name) if name == "adj_close"));
    }

    #[test]
    fn bad_date_cell_is_reported() {
        let df = df!("date" => ["01/02/2024"], "close" => [100.0]).unwrap();
        let err = price_series_from_frame(&df, "date", "close").unwrap_err();
        assert!(matches!(err, RiskError::InvalidDate(_)));
    }

    #[test]
    fn rolling_series_renders_as_frame() {
        let df = df!(
            "date" => ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"],
            "close" => [100.0, 101.0, 99.0, 103.0, 102.0]
        )
        .unwrap();
        let prices = price_series_from_frame(&df, "date", "close").unwrap();
        let rolled = rolling_volatility(&prices.returns(), 2, TRADING_DAYS_PER_YEAR).unwrap();

        let out = rolling_series_to_frame(&rolled, "rolling_volatility").unwrap();
        assert_eq!(out.height(), rolled.len());
        assert_eq!(out.get_column_names_str(), ["date", "rolling_volatility"]);
    }
}
