//! Trend indicators: moving averages, linear regression trendline

pub mod moving_average;
pub mod regression;

pub use moving_average::*;
pub use regression::*;
