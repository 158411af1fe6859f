//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdSeries;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// The signal recursion starts once the slower EMA has seen a full span.
/// All three lines are undefined for the first `max(fast, slow) + signal - 2`
/// positions.
pub fn calculate_macd(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let period = (fast_period, slow_period, signal_period);
    let longest = fast_period.max(slow_period);
    if fast_period == 0 || signal_period == 0 || closes.len() + 2 <= longest + signal_period {
        let undefined = vec![None; closes.len()];
        return MacdSeries {
            macd: undefined.clone(),
            signal: undefined.clone(),
            histogram: undefined,
            period,
        };
    }

    let fast_ema = math::ema(closes, fast_period);
    let slow_ema = math::ema(closes, slow_period);
    let macd_line = math::mask_prefix(
        math::zip_with(&fast_ema, &slow_ema, |fast, slow| fast - slow),
        longest - 1,
    );

    let signal_line = math::ema_of_series(&macd_line, signal_period);
    let histogram = math::zip_with(&macd_line, &signal_line, |macd, signal| macd - signal);

    let warmup = warmup_len(fast_period, slow_period, signal_period);
    MacdSeries {
        macd: math::mask_prefix(macd_line, warmup),
        signal: math::mask_prefix(signal_line, warmup),
        histogram: math::mask_prefix(histogram, warmup),
        period,
    }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(closes: &[f64]) -> MacdSeries {
    calculate_macd(closes, 12, 26, 9)
}

/// Leading positions left undefined by [`calculate_macd`].
pub fn warmup_len(fast_period: usize, slow_period: usize, signal_period: usize) -> usize {
    (fast_period.max(slow_period) + signal_period).saturating_sub(2)
}

