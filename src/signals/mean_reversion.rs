//! Mean-reversion rule-set: RSI extremes confirmed by a Bollinger Band
//! breach.

use crate::config::SignalThresholds;
use crate::models::indicators::BollingerSeries;
use crate::models::signal::SignalPair;

use super::evaluate_rule;

/// Buy when RSI is below the oversold level and the close is under the lower
/// band; sell when RSI is above the overbought level and the close is over the
/// upper band.
pub fn evaluate_mean_reversion(
    closes: &[f64],
    rsi: &[Option<f64>],
    bands: &BollingerSeries,
    thresholds: &SignalThresholds,
) -> SignalPair {
    let len = closes.len();

    let buy = evaluate_rule(len, |i| {
        let rsi = (*rsi.get(i)?)?;
        let lower = (*bands.lower.get(i)?)?;
        Some(rsi < thresholds.rsi_oversold && closes[i] < lower)
    });

    let sell = evaluate_rule(len, |i| {
        let rsi = (*rsi.get(i)?)?;
        let upper = (*bands.upper.get(i)?)?;
        Some(rsi > thresholds.rsi_overbought && closes[i] > upper)
    });

    SignalPair { buy, sell }
}
