//! Trend classification from the most recent row.

use crate::config::SignalThresholds;
use crate::models::signal::TrendLabel;

/// Classify the last row of the table.
///
/// Neutral when fewer than `trend_min_history` rows exist or any of the three
/// values at the last row is undefined. Otherwise Uptrend when the short
/// average is above the long one and RSI is above the midline, Downtrend for
/// the mirror case, Neutral for anything mixed.
pub fn classify_trend(
    short_avg: &[Option<f64>],
    long_avg: &[Option<f64>],
    rsi: &[Option<f64>],
    thresholds: &SignalThresholds,
) -> TrendLabel {
    let rows = short_avg.len();
    if rows < thresholds.trend_min_history {
        return TrendLabel::Neutral;
    }

    let last = |series: &[Option<f64>]| series.last().copied().flatten();
    let (Some(short), Some(long), Some(rsi)) = (last(short_avg), last(long_avg), last(rsi)) else {
        return TrendLabel::Neutral;
    };

    let midline = thresholds.trend_rsi_midline;
    if short > long && rsi > midline {
        TrendLabel::Uptrend
    } else if short < long && rsi < midline {
        TrendLabel::Downtrend
    } else {
        TrendLabel::Neutral
    }
}
