//! Engine configuration: dashboard variants, indicator parameters and
//! signal thresholds.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::EngineError;

/// Read the deployment environment (`ENVIRONMENT`, default `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Dashboard variant. Each variant owns one primary rule-set and its own
/// default timestamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Daily bars, mean-reversion signals, MACD and Bollinger Bands.
    Daily,
    /// Intraday bars, EMA crossover signals, RSI histogram alerts and a
    /// regression trendline.
    Intraday,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Daily => "daily",
            Variant::Intraday => "intraday",
        }
    }

    pub fn default_timestamp_column(&self) -> &'static str {
        match self {
            Variant::Daily => "Date",
            Variant::Intraday => "Datetime",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Variant::Daily),
            "intraday" => Ok(Variant::Intraday),
            other => Err(format!("unknown variant: {other} (expected daily or intraday)")),
        }
    }
}

/// Window lengths and spans for the indicator bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub rsi_window: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_window: usize,
    pub bollinger_std_dev: f64,
    pub sma_short: usize,
    pub sma_long: usize,
    pub ema_short_span: usize,
    pub ema_long_span: usize,
}

impl IndicatorParams {
    pub fn daily() -> Self {
        Self {
            rsi_window: 14,
            ..Self::default()
        }
    }

    pub fn intraday() -> Self {
        Self {
            rsi_window: 13,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let windows = [
            ("rsi_window", self.rsi_window),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("bollinger_window", self.bollinger_window),
            ("sma_short", self.sma_short),
            ("sma_long", self.sma_long),
            ("ema_short_span", self.ema_short_span),
            ("ema_long_span", self.ema_long_span),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(EngineError::InvalidParameter {
                    name,
                    reason: "must be at least 1".to_string(),
                });
            }
        }

        if !self.bollinger_std_dev.is_finite() || self.bollinger_std_dev < 0.0 {
            return Err(EngineError::InvalidParameter {
                name: "bollinger_std_dev",
                reason: format!("must be a non-negative number, got {}", self.bollinger_std_dev),
            });
        }
        if self.macd_fast >= self.macd_slow {
            return Err(EngineError::InvalidParameter {
                name: "macd_fast",
                reason: format!(
                    "fast span {} must be shorter than slow span {}",
                    self.macd_fast, self.macd_slow
                ),
            });
        }
        if self.ema_short_span >= self.ema_long_span {
            return Err(EngineError::InvalidParameter {
                name: "ema_short_span",
                reason: format!(
                    "short span {} must be shorter than long span {}",
                    self.ema_short_span, self.ema_long_span
                ),
            });
        }
        if self.sma_short >= self.sma_long {
            return Err(EngineError::InvalidParameter {
                name: "sma_short",
                reason: format!(
                    "short window {} must be shorter than long window {}",
                    self.sma_short, self.sma_long
                ),
            });
        }
        Ok(())
    }
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            rsi_window: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_window: 20,
            bollinger_std_dev: 2.0,
            sma_short: 50,
            sma_long: 200,
            ema_short_span: 3,
            ema_long_span: 30,
        }
    }
}

/// Threshold levels used by the rule-sets and the trend classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    /// Multiplier applied to `RSI - 50` to build the alert histogram.
    pub histogram_scale: f64,
    pub histogram_buy_level: f64,
    pub histogram_sell_level: f64,
    pub trend_rsi_midline: f64,
    /// Rows required before a trend is classified at all.
    pub trend_min_history: usize,
    /// Leading rows where crossover signals stay undefined. `None` means
    /// `ema_long_span - 1`.
    pub crossover_warmup: Option<usize>,
}

impl SignalThresholds {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rsi_oversold >= self.rsi_overbought {
            return Err(EngineError::InvalidParameter {
                name: "rsi_oversold",
                reason: format!(
                    "oversold level {} must be below overbought level {}",
                    self.rsi_oversold, self.rsi_overbought
                ),
            });
        }
        if self.histogram_buy_level >= self.histogram_sell_level {
            return Err(EngineError::InvalidParameter {
                name: "histogram_buy_level",
                reason: format!(
                    "buy alert level {} must be below sell alert level {}",
                    self.histogram_buy_level, self.histogram_sell_level
                ),
            });
        }
        if !self.histogram_scale.is_finite() || self.histogram_scale <= 0.0 {
            return Err(EngineError::InvalidParameter {
                name: "histogram_scale",
                reason: format!("must be positive, got {}", self.histogram_scale),
            });
        }
        Ok(())
    }
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            histogram_scale: 1.5,
            histogram_buy_level: -10.0,
            histogram_sell_level: 10.0,
            trend_rsi_midline: 50.0,
            trend_min_history: 200,
            crossover_warmup: None,
        }
    }
}

/// Full configuration of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub variant: Variant,
    pub timestamp_column: String,
    pub indicators: IndicatorParams,
    pub thresholds: SignalThresholds,
}

impl EngineConfig {
    pub fn daily() -> Self {
        Self {
            variant: Variant::Daily,
            timestamp_column: Variant::Daily.default_timestamp_column().to_string(),
            indicators: IndicatorParams::daily(),
            thresholds: SignalThresholds::default(),
        }
    }

    pub fn intraday() -> Self {
        Self {
            variant: Variant::Intraday,
            timestamp_column: Variant::Intraday.default_timestamp_column().to_string(),
            indicators: IndicatorParams::intraday(),
            thresholds: SignalThresholds::default(),
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Daily => Self::daily(),
            Variant::Intraday => Self::intraday(),
        }
    }

    /// Variant preset with overrides taken from the environment.
    pub fn from_env(variant: Variant) -> Self {
        let mut config = Self::for_variant(variant);
        let params = &mut config.indicators;
        let thresholds = &mut config.thresholds;

        override_from_env("RSI_WINDOW", &mut params.rsi_window);
        override_from_env("BB_WINDOW", &mut params.bollinger_window);
        override_from_env("BB_STD_DEV", &mut params.bollinger_std_dev);
        override_from_env("EMA_SHORT_SPAN", &mut params.ema_short_span);
        override_from_env("EMA_LONG_SPAN", &mut params.ema_long_span);
        override_from_env("RSI_OVERSOLD", &mut thresholds.rsi_oversold);
        override_from_env("RSI_OVERBOUGHT", &mut thresholds.rsi_overbought);
        override_from_env("HISTO_BUY_LEVEL", &mut thresholds.histogram_buy_level);
        override_from_env("HISTO_SELL_LEVEL", &mut thresholds.histogram_sell_level);

        config
    }

    pub fn with_timestamp_column(mut self, column: impl Into<String>) -> Self {
        self.timestamp_column = column.into();
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.indicators.validate()?;
        self.thresholds.validate()
    }

    /// Leading rows excluded from crossover signals.
    pub fn crossover_warmup(&self) -> usize {
        self.thresholds
            .crossover_warmup
            .unwrap_or_else(|| self.indicators.ema_long_span.saturating_sub(1))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::daily()
    }
}

fn override_from_env<T: FromStr>(key: &str, target: &mut T) {
    if let Ok(raw) = env::var(key) {
        match raw.trim().parse() {
            Ok(value) => *target = value,
            Err(_) => warn!(key = key, value = %raw, "Ignoring unparseable configuration override"),
        }
    }
}
