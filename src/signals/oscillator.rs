//! Oscillator-alert rule-set over the rescaled RSI histogram.

use crate::config::SignalThresholds;
use crate::indicators::momentum::rsi_histogram;
use crate::models::series::Series;
use crate::models::signal::SignalPair;

use super::evaluate_rule;

/// Histogram plus the alerts derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorAlerts {
    pub histogram: Series,
    pub alerts: SignalPair,
}

/// Rescale RSI to `(RSI - 50) * scale`, raise a buy alert below the lower
/// level and a sell alert above the upper level.
pub fn evaluate_oscillator_alerts(
    rsi: &[Option<f64>],
    thresholds: &SignalThresholds,
) -> OscillatorAlerts {
    let histogram = rsi_histogram(rsi, thresholds.histogram_scale);
    let len = histogram.len();

    let buy = evaluate_rule(len, |i| {
        histogram[i].map(|h| h < thresholds.histogram_buy_level)
    });
    let sell = evaluate_rule(len, |i| {
        histogram[i].map(|h| h > thresholds.histogram_sell_level)
    });

    OscillatorAlerts {
        histogram,
        alerts: SignalPair { buy, sell },
    }
}
