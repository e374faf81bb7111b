//! Price and return series types.
//!
//! A [`PriceSeries`] holds one instrument's daily closes. Deriving simple
//! returns and aligning an asset against a benchmark produces an
//! [`AlignedReturnPair`], the shared input of every estimator in this crate.
//! Rolling estimators emit a [`RollingSeries`] keyed by the date of each
//! window's last observation.

use crate::{Result, RiskError};
use chrono::NaiveDate;

/// Ordered daily closes for a single instrument.
///
/// Dates are strictly increasing and prices are positive and finite.
/// Non-finite closes from the data source are dropped at construction;
/// missing rows are excluded, never zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    prices: Vec<f64>,
}

impl PriceSeries {
    /// Build a series from `(date, close)` observations.
    ///
    /// Rows with a non-finite close are skipped. Fails with
    /// [`RiskError::NonPositivePrice`] on a zero or negative close and with
    /// [`RiskError::MisalignedSeries`] when dates are not strictly
    /// increasing.
    pub fn new(observations: Vec<(NaiveDate, f64)>) -> Result<Self> {
        let mut dates = Vec::with_capacity(observations.len());
        let mut prices = Vec::with_capacity(observations.len());

        for (date, price) in observations {
            if !price.is_finite() {
                continue;
            }
            if price <= 0.0 {
                return Err(RiskError::NonPositivePrice { date, price });
            }
            if let Some(&prev) = dates.last()
                && date <= prev
            {
                return Err(RiskError::MisalignedSeries(format!(
                    "price dates not strictly increasing: {prev} followed by {date}"
                )));
            }
            dates.push(date);
            prices.push(price);
        }

        Ok(Self { dates, prices })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Observation dates in chronological order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Close prices, parallel to [`dates`](Self::dates).
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// First close of the series, if any.
    pub fn first_price(&self) -> Option<f64> {
        self.prices.first().copied()
    }

    /// Last close of the series, if any.
    pub fn last_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    /// Derive the simple-return series `r[t] = p[t]/p[t-1] - 1`.
    ///
    /// The result is one observation shorter than the price series; the
    /// first date carries no return and is dropped.
    pub fn returns(&self) -> ReturnSeries {
        let mut dates = Vec::with_capacity(self.len().saturating_sub(1));
        let mut values = Vec::with_capacity(self.len().saturating_sub(1));
        for i in 1..self.len() {
            dates.push(self.dates[i]);
            values.push(self.prices[i] / self.prices[i - 1] - 1.0);
        }
        ReturnSeries { dates, values }
    }
}

/// Ordered simple returns for a single instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Build a return series from parallel date and value vectors.
    ///
    /// Fails with [`RiskError::MisalignedSeries`] when the vectors differ in
    /// length or the dates are not strictly increasing.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(RiskError::MisalignedSeries(format!(
                "{} dates but {} return values",
                dates.len(),
                values.len()
            )));
        }
        if let Some(w) = dates.windows(2).find(|w| w[1] <= w[0]) {
            return Err(RiskError::MisalignedSeries(format!(
                "return dates not strictly increasing: {} followed by {}",
                w[0], w[1]
            )));
        }
        Ok(Self { dates, values })
    }

    /// Number of return observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Observation dates in chronological order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Return values, parallel to [`dates`](Self::dates).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over `(date, return)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

/// Asset and market return series restricted to a shared date index.
///
/// The two series always have the same length and the same dates in the
/// same order. Construction rejects anything else, so estimators never zip
/// a return against the wrong date.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedReturnPair {
    asset: ReturnSeries,
    market: ReturnSeries,
}

impl AlignedReturnPair {
    /// Pair two return series that already share a date index.
    ///
    /// Fails with [`RiskError::MisalignedSeries`] when the indexes differ.
    pub fn new(asset: ReturnSeries, market: ReturnSeries) -> Result<Self> {
        if asset.dates != market.dates {
            return Err(RiskError::MisalignedSeries(format!(
                "asset index ({} points) does not match market index ({} points)",
                asset.len(),
                market.len()
            )));
        }
        Ok(Self { asset, market })
    }

    /// Asset return series.
    pub fn asset(&self) -> &ReturnSeries {
        &self.asset
    }

    /// Market return series.
    pub fn market(&self) -> &ReturnSeries {
        &self.market
    }

    /// Shared date index.
    pub fn dates(&self) -> &[NaiveDate] {
        self.asset.dates()
    }

    /// Number of paired observations.
    pub fn len(&self) -> usize {
        self.asset.len()
    }

    /// Whether the pair holds no observations.
    pub fn is_empty(&self) -> bool {
        self.asset.is_empty()
    }
}

/// Align an asset price series against a market price series.
///
/// Simple returns are derived for each series independently, then restricted
/// to the intersection of their dates, preserving chronological order. Dates
/// present in only one series are dropped.
///
/// Fails with [`RiskError::InsufficientData`] when the intersection has
/// fewer than 2 points, the minimum any variance-based statistic needs.
pub fn align(asset_prices: &PriceSeries, market_prices: &PriceSeries) -> Result<AlignedReturnPair> {
    let asset = asset_prices.returns();
    let market = market_prices.returns();

    let mut dates = Vec::new();
    let mut asset_values = Vec::new();
    let mut market_values = Vec::new();

    // Both indexes are strictly increasing, so a two-pointer merge finds
    // the intersection in one pass.
    let (mut i, mut j) = (0, 0);
    while i < asset.len() && j < market.len() {
        match asset.dates[i].cmp(&market.dates[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dates.push(asset.dates[i]);
                asset_values.push(asset.values[i]);
                market_values.push(market.values[j]);
                i += 1;
                j += 1;
            }
        }
    }

    if dates.len() < 2 {
        return Err(RiskError::InsufficientData {
            required: 2,
            available: dates.len(),
        });
    }

    Ok(AlignedReturnPair {
        asset: ReturnSeries {
            dates: dates.clone(),
            values: asset_values,
        },
        market: ReturnSeries {
            dates,
            values: market_values,
        },
    })
}

/// A statistic computed over a trailing fixed-size window, one value per
/// window, keyed by the date of the window's last observation.
///
/// For a window of size `w` over `n` observations the series holds `n - w`
/// values; leading positions with no defined value are omitted, not filled.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RollingSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl RollingSeries {
    pub(crate) fn from_parts(dates: Vec<NaiveDate>, values: Vec<f64>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self { dates, values }
    }

    /// Number of windowed values.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series holds no values.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Window-end dates in chronological order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Statistic values, parallel to [`dates`](Self::dates).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over `(date, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn prices(days: &[u32], closes: &[f64]) -> PriceSeries {
        let obs = days.iter().map(|&day| d(day)).zip(closes.iter().copied());
        PriceSeries::new(obs.collect()).unwrap()
    }

    #[test]
    fn returns_drop_first_date() {
        let p = prices(&[1, 2, 3, 4], &[100.0, 101.0, 99.0, 103.0]);
        let r = p.returns();

        assert_eq!(r.len(), 3);
        assert_eq!(r.dates(), &[d(2), d(3), d(4)]);
        assert_relative_eq!(r.values()[0], 0.01, epsilon = 1e-12);
        assert_relative_eq!(r.values()[1], -2.0 / 101.0, epsilon = 1e-12);
        assert_relative_eq!(r.values()[2], 4.0 / 99.0, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_closes_are_excluded() {
        let p = PriceSeries::new(vec![
            (d(1), 100.0),
            (d(2), f64::NAN),
            (d(3), 102.0),
        ])
        .unwrap();

        assert_eq!(p.len(), 2);
        assert_eq!(p.dates(), &[d(1), d(3)]);
        // The return bridges the gap rather than zero-filling it.
        let r = p.returns();
        assert_relative_eq!(r.values()[0], 0.02, epsilon = 1e-12);
    }

    #[test]
    fn negative_close_is_rejected() {
        let err = PriceSeries::new(vec![(d(1), 100.0), (d(2), -3.0)]).unwrap_err();
        assert!(matches!(err, RiskError::NonPositivePrice { .. }));
    }

    #[test]
    fn out_of_order_dates_are_rejected() {
        let err = PriceSeries::new(vec![(d(2), 100.0), (d(1), 101.0)]).unwrap_err();
        assert!(matches!(err, RiskError::MisalignedSeries(_)));
    }

    #[test]
    fn align_intersects_return_dates() {
        // Asset trades on days 1-5, market on days 2-6. Returns exist for
        // asset on 2-5 and market on 3-6, so the pair covers 3-5.
        let asset = prices(&[1, 2, 3, 4, 5], &[100.0, 101.0, 102.0, 101.0, 103.0]);
        let market = prices(&[2, 3, 4, 5, 6], &[50.0, 50.5, 50.0, 51.0, 51.5]);

        let pair = align(&asset, &market).unwrap();
        assert_eq!(pair.dates(), &[d(3), d(4), d(5)]);
        assert_eq!(pair.len(), 3);
        assert_relative_eq!(pair.asset().values()[0], 1.0 / 101.0, epsilon = 1e-12);
        assert_relative_eq!(pair.market().values()[0], 0.5 / 50.0, epsilon = 1e-12);
    }

    #[test]
    fn align_requires_two_shared_points() {
        let asset = prices(&[1, 2], &[100.0, 101.0]);
        let market = prices(&[5, 6], &[50.0, 50.5]);

        let err = align(&asset, &market).unwrap_err();
        assert!(matches!(
            err,
            RiskError::InsufficientData {
                required: 2,
                available: 0
            }
        ));
    }

    #[test]
    fn pair_rejects_mismatched_indexes() {
        let a = ReturnSeries::new(vec![d(1), d(2)], vec![0.01, 0.02]).unwrap();
        let b = ReturnSeries::new(vec![d(2), d(3)], vec![0.01, 0.02]).unwrap();

        let err = AlignedReturnPair::new(a, b).unwrap_err();
        assert!(matches!(err, RiskError::MisalignedSeries(_)));
    }

    #[test]
    fn return_series_rejects_length_mismatch() {
        let err = ReturnSeries::new(vec![d(1)], vec![0.01, 0.02]).unwrap_err();
        assert!(matches!(err, RiskError::MisalignedSeries(_)));
    }
}
