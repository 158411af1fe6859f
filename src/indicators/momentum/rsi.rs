//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::series::Series;

/// Calculate RSI with Wilder smoothing.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The first `period` positions are undefined. A window with no losses reads
/// 100, including a completely flat one.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Series {
    if period == 0 || closes.len() <= period {
        return vec![None; closes.len()];
    }

    let mut gains = vec![0.0; closes.len()];
    let mut losses = vec![0.0; closes.len()];
    for i in 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = -change;
        }
    }

    let avg_gains = math::wilder_smooth(&gains, period);
    let avg_losses = math::wilder_smooth(&losses, period);

    avg_gains
        .iter()
        .zip(avg_losses.iter())
        .map(|(gain, loss)| Some(rsi_from_averages((*gain)?, (*loss)?)))
        .collect()
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Series {
    calculate_rsi(closes, 14)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    // no losses in the window, flat windows included
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    (100.0 - (100.0 / (1.0 + rs))).clamp(0.0, 100.0)
}

/// Rescale RSI around its midline: `(RSI - 50) * scale`.
pub fn rsi_histogram(rsi: &[Option<f64>], scale: f64) -> Series {
    rsi.iter().map(|v| v.map(|r| (r - 50.0) * scale)).collect()
}
