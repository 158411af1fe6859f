//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerSeries;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// Standard deviation is the population deviation of the window. All bands
/// are undefined for the first `period - 1` positions.
pub fn calculate_bollinger_bands(closes: &[f64], period: usize, std_dev: f64) -> BollingerSeries {
    let middle = math::rolling_mean(closes, period);
    let deviation = math::rolling_std(closes, period);

    let upper = math::zip_with(&middle, &deviation, |m, sd| m + std_dev * sd);
    let lower = math::zip_with(&middle, &deviation, |m, sd| m - std_dev * sd);

    BollingerSeries {
        upper,
        middle,
        lower,
        period,
        std_dev,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(closes: &[f64]) -> BollingerSeries {
    calculate_bollinger_bands(closes, 20, 2.0)
}
