//! Analysis pipeline: validator, indicator bank, rule-sets, classifier and
//! level extractor wired together per dashboard variant.

use tracing::{debug, info, info_span};

use crate::config::{EngineConfig, Variant};
use crate::data::{validate_table, RawTable};
use crate::error::EngineError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::structure::calculate_support_resistance;
use crate::indicators::trend::{calculate_ema, calculate_linear_trend, calculate_sma};
use crate::indicators::volatility::calculate_bollinger_bands;
use crate::models::report::{AnalysisReport, DerivedColumn, TrendCoefficients};
use crate::models::series::{Series, SeriesTable};
use crate::models::signal::SignalPair;
use crate::signals::crossover::evaluate_crossover;
use crate::signals::mean_reversion::evaluate_mean_reversion;
use crate::signals::oscillator::evaluate_oscillator_alerts;
use crate::signals::trend::classify_trend;

pub struct SignalEngine;

impl SignalEngine {
    /// Validate a raw table and run the full pipeline on it.
    ///
    /// Validation failures abort before any indicator is computed.
    pub fn analyze(raw: &RawTable, config: &EngineConfig) -> Result<AnalysisReport, EngineError> {
        config.validate()?;
        let table = validate_table(raw, &config.timestamp_column)?;
        Self::run(&table, config)
    }

    /// Run the pipeline on an already validated table. A zero-row table fails
    /// with [`EngineError::EmptySeries`].
    pub fn run(table: &SeriesTable, config: &EngineConfig) -> Result<AnalysisReport, EngineError> {
        let span = info_span!("analysis", variant = %config.variant, rows = table.len());
        let _guard = span.enter();

        config.validate()?;
        let levels = calculate_support_resistance(table)?;

        let params = &config.indicators;
        let closes = table.closes();
        let rsi = calculate_rsi(&closes, params.rsi_window);
        let sma_short = calculate_sma(&closes, params.sma_short);
        let sma_long = calculate_sma(&closes, params.sma_long);
        let trend = classify_trend(&sma_short, &sma_long, &rsi, &config.thresholds);

        let mut columns = Vec::new();
        let trendline = match config.variant {
            Variant::Daily => {
                Self::daily_columns(table, config, &rsi, &mut columns);
                None
            }
            Variant::Intraday => Self::intraday_columns(table, config, &rsi, &mut columns),
        };
        columns.push(DerivedColumn::numeric(
            format!("SMA_{}", params.sma_short),
            sma_short,
        ));
        columns.push(DerivedColumn::numeric(
            format!("SMA_{}", params.sma_long),
            sma_long,
        ));

        debug!(columns = columns.len(), "Derived columns computed");
        info!(
            trend = %trend,
            support = levels.support,
            resistance = levels.resistance,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            variant: config.variant,
            timestamp_column: config.timestamp_column.clone(),
            table: table.clone(),
            columns,
            levels,
            trend,
            trendline,
        })
    }

    fn daily_columns(
        table: &SeriesTable,
        config: &EngineConfig,
        rsi: &Series,
        columns: &mut Vec<DerivedColumn>,
    ) {
        let params = &config.indicators;
        let closes = table.closes();

        let macd = calculate_macd(&closes, params.macd_fast, params.macd_slow, params.macd_signal);
        let bands =
            calculate_bollinger_bands(&closes, params.bollinger_window, params.bollinger_std_dev);
        let signals = evaluate_mean_reversion(&closes, rsi, &bands, &config.thresholds);
        log_signal_counts("mean_reversion", &signals);

        columns.push(DerivedColumn::numeric("RSI", rsi.clone()));
        columns.push(DerivedColumn::numeric("MACD", macd.macd));
        columns.push(DerivedColumn::numeric("MACD_Signal", macd.signal));
        columns.push(DerivedColumn::numeric("MACD_Hist", macd.histogram));
        columns.push(DerivedColumn::numeric("BB_High", bands.upper));
        columns.push(DerivedColumn::numeric("BB_Mid", bands.middle));
        columns.push(DerivedColumn::numeric("BB_Low", bands.lower));
        columns.push(DerivedColumn::flag("Buy_Signal", signals.buy));
        columns.push(DerivedColumn::flag("Sell_Signal", signals.sell));
    }

    fn intraday_columns(
        table: &SeriesTable,
        config: &EngineConfig,
        rsi: &Series,
        columns: &mut Vec<DerivedColumn>,
    ) -> Option<TrendCoefficients> {
        let params = &config.indicators;
        let closes = table.closes();

        let oscillator = evaluate_oscillator_alerts(rsi, &config.thresholds);
        log_signal_counts("oscillator", &oscillator.alerts);

        let short_ema = calculate_ema(&closes, params.ema_short_span);
        let long_ema = calculate_ema(&closes, params.ema_long_span);
        let crossover = evaluate_crossover(
            &table.typical_prices(),
            &short_ema,
            &long_ema,
            config.crossover_warmup(),
        );
        log_signal_counts("crossover", &crossover);

        let trendline = calculate_linear_trend(&table.timestamps(), &closes);

        columns.push(DerivedColumn::numeric("RSI", rsi.clone()));
        columns.push(DerivedColumn::numeric("RSI_Histo", oscillator.histogram));
        columns.push(DerivedColumn::flag("RSI_Buy_Signal", oscillator.alerts.buy));
        columns.push(DerivedColumn::flag("RSI_Sell_Signal", oscillator.alerts.sell));
        columns.push(DerivedColumn::numeric("EMA1", short_ema));
        columns.push(DerivedColumn::numeric("EMA2", long_ema));
        columns.push(DerivedColumn::flag("Buy_Signal", crossover.buy));
        columns.push(DerivedColumn::flag("Sell_Signal", crossover.sell));
        columns.push(DerivedColumn::numeric("Trend", trendline.fitted));

        match (trendline.slope, trendline.intercept) {
            (Some(slope), Some(intercept)) => Some(TrendCoefficients { slope, intercept }),
            _ => None,
        }
    }
}

fn log_signal_counts(rule_set: &'static str, signals: &SignalPair) {
    debug!(
        rule_set = rule_set,
        buys = signals.buy_positions().len(),
        sells = signals.sell_positions().len(),
        "Rule-set evaluated"
    );
}
