//! Unit tests for the mean-reversion rule-set

use trendlens::config::SignalThresholds;
use trendlens::models::BollingerSeries;
use trendlens::signals::evaluate_mean_reversion;

fn bands(upper: Vec<Option<f64>>, lower: Vec<Option<f64>>) -> BollingerSeries {
    let middle = upper
        .iter()
        .zip(&lower)
        .map(|(u, l)| Some(((*u)? + (*l)?) / 2.0))
        .collect();
    BollingerSeries {
        upper,
        middle,
        lower,
        period: 20,
        std_dev: 2.0,
    }
}

#[test]
fn test_oversold_below_lower_band_buys() {
    let closes = [90.0, 90.0];
    let rsi = [Some(25.0), Some(50.0)];
    let bands = bands(vec![Some(110.0); 2], vec![Some(95.0); 2]);

    let signals = evaluate_mean_reversion(&closes, &rsi, &bands, &SignalThresholds::default());
    assert_eq!(signals.buy, vec![Some(true), Some(false)]);
    assert_eq!(signals.sell, vec![Some(false), Some(false)]);
}

#[test]
fn test_overbought_above_upper_band_sells() {
    let closes = [120.0, 105.0];
    let rsi = [Some(75.0), Some(75.0)];
    let bands = bands(vec![Some(110.0); 2], vec![Some(95.0); 2]);

    let signals = evaluate_mean_reversion(&closes, &rsi, &bands, &SignalThresholds::default());
    assert_eq!(signals.sell, vec![Some(true), Some(false)]);
    assert_eq!(signals.buy_positions(), Vec::<usize>::new());
    assert_eq!(signals.sell_positions(), vec![0]);
}

#[test]
fn test_undefined_operands_never_signal() {
    let closes = [80.0, 80.0, 80.0];
    let rsi = [None, Some(10.0), Some(10.0)];
    let bands = bands(vec![Some(110.0), None, Some(110.0)], vec![Some(95.0), None, Some(95.0)]);

    let signals = evaluate_mean_reversion(&closes, &rsi, &bands, &SignalThresholds::default());
    assert_eq!(signals.buy, vec![None, None, Some(true)]);
    assert_eq!(signals.sell, vec![None, None, Some(false)]);
}

#[test]
fn test_thresholds_are_configurable() {
    let closes = [90.0];
    let rsi = [Some(35.0)];
    let bands = bands(vec![Some(110.0)], vec![Some(95.0)]);

    let default = evaluate_mean_reversion(&closes, &rsi, &bands, &SignalThresholds::default());
    assert_eq!(default.buy, vec![Some(false)]);

    let relaxed = SignalThresholds {
        rsi_oversold: 40.0,
        ..SignalThresholds::default()
    };
    let relaxed = evaluate_mean_reversion(&closes, &rsi, &bands, &relaxed);
    assert_eq!(relaxed.buy, vec![Some(true)]);
}
