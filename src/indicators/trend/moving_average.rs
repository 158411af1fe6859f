//! SMA and EMA indicators

use crate::common::math;
use crate::models::series::Series;

/// Simple moving average, undefined for the first `period - 1` positions.
pub fn calculate_sma(closes: &[f64], period: usize) -> Series {
    math::rolling_mean(closes, period)
}

/// Exponential moving average with `alpha = 2 / (span + 1)`.
///
/// Defined from the first observation on. Values before roughly three spans
/// have elapsed still carry the seed and should be treated as warm-up.
pub fn calculate_ema(closes: &[f64], span: usize) -> Series {
    math::ema(closes, span)
}

