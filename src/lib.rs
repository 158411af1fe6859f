//! Indicator and signal derivation engine for OHLCV price dashboards.
//!
//! The engine turns a validated OHLCV table into derived indicator series,
//! buy/sell signal series, support/resistance levels and a trend label.
//! Every stage is a pure function over an immutable input table.

pub mod common;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod signals;

pub use config::{EngineConfig, IndicatorParams, SignalThresholds, Variant};
pub use error::EngineError;
pub use models::{AnalysisReport, Bar, SeriesTable, TrendLabel};
pub use signals::engine::SignalEngine;
