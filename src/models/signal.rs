use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-row signal. `None` where any operand was undefined.
pub type SignalSeries = Vec<Option<bool>>;

/// Buy and sell series produced by one rule-set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalPair {
    pub buy: SignalSeries,
    pub sell: SignalSeries,
}

impl SignalPair {
    /// Positions where the buy signal is asserted.
    pub fn buy_positions(&self) -> Vec<usize> {
        asserted(&self.buy)
    }

    /// Positions where the sell signal is asserted.
    pub fn sell_positions(&self) -> Vec<usize> {
        asserted(&self.sell)
    }
}

fn asserted(series: &SignalSeries) -> Vec<usize> {
    series
        .iter()
        .enumerate()
        .filter_map(|(i, v)| (*v == Some(true)).then_some(i))
        .collect()
}

/// Coarse trend classification of the most recent row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendLabel {
    Uptrend,
    Downtrend,
    Neutral,
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendLabel::Uptrend => "Uptrend",
            TrendLabel::Downtrend => "Downtrend",
            TrendLabel::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// Support and resistance over the loaded window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Levels {
    pub support: f64,
    pub resistance: f64,
    /// Distance from the last close down to support, in percent of the close.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_distance_pct: Option<f64>,
    /// Distance from the last close up to resistance, in percent of the close.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resistance_distance_pct: Option<f64>,
}
