use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A derived numeric column. `None` marks positions without enough history.
pub type Series = Vec<Option<f64>>;

/// One OHLCV row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Average of open, high, low and close.
    pub fn typical_price(&self) -> f64 {
        (self.open + self.high + self.low + self.close) / 4.0
    }
}

/// Validated, position-indexed OHLCV table. Rows keep the order they were
/// supplied in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesTable {
    bars: Vec<Bar>,
}

impl SeriesTable {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.bars.iter().map(|b| b.timestamp).collect()
    }

    pub fn opens(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.open).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    pub fn typical_prices(&self) -> Vec<f64> {
        self.bars.iter().map(Bar::typical_price).collect()
    }
}

impl From<Vec<Bar>> for SeriesTable {
    fn from(bars: Vec<Bar>) -> Self {
        Self::new(bars)
    }
}
