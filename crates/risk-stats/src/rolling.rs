//! Rolling volatility - trailing-window annualized standard deviation.

use crate::{Result, ReturnSeries, RiskError, RollingSeries, descriptive};

/// Annualized sample standard deviation over trailing windows of `window`
/// returns.
///
/// For each index `i` in `window..n` the value is
/// `std(r[i - window..i]) × sqrt(periods_per_year)` with the n-1 divisor,
/// keyed by the date of the window's last point. Each window's deviation
/// uses that window's own mean. The computation is stateless; repeating it
/// on the same inputs reproduces the same series.
///
/// Fails with [`RiskError::InsufficientData`] when `window < 2` or
/// `n <= window`.
pub fn rolling_volatility(
    series: &ReturnSeries,
    window: usize,
    periods_per_year: f64,
) -> Result<RollingSeries> {
    let n = series.len();
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

    let values = series.values();
    let dates = series.dates();

    let mut out_dates = Vec::with_capacity(n - window);
    let mut out_values = Vec::with_capacity(n - window);
    for i in window..n {
        let vol = descriptive::annualized_std_dev(&values[i - window..i], periods_per_year)?;
        out_dates.push(dates[i - 1]);
        out_values.push(vol);
    }

    Ok(RollingSeries::from_parts(out_dates, out_values))
}
