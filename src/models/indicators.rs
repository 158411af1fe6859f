use serde::{Deserialize, Serialize};

use super::series::Series;

/// MACD line, signal line and histogram, aligned to the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Series,
    pub signal: Series,
    pub histogram: Series,
    pub period: (usize, usize, usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
    pub period: usize,
    pub std_dev: f64,
}

/// Least-squares fit of close against elapsed days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Fitted close per row.
    pub fitted: Series,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intercept: Option<f64>,
}
