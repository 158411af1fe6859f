//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod report;
pub mod series;
pub mod signal;

pub use indicators::{BollingerSeries, MacdSeries, TrendLine};
pub use report::{AnalysisReport, ColumnValues, DerivedColumn, TrendCoefficients};
pub use series::{Bar, Series, SeriesTable};
pub use signal::{Levels, SignalPair, SignalSeries, TrendLabel};
