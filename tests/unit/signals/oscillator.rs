//! Unit tests for RSI histogram alerts

use trendlens::config::SignalThresholds;
use trendlens::indicators::momentum::calculate_rsi;
use trendlens::signals::evaluate_oscillator_alerts;

#[test]
fn test_alert_levels() {
    // histogram: (rsi - 50) * 1.5 -> -22.5, 0, 22.5, -9, 9
    let rsi = [Some(35.0), Some(50.0), Some(65.0), Some(44.0), Some(56.0)];
    let out = evaluate_oscillator_alerts(&rsi, &SignalThresholds::default());

    assert_eq!(out.histogram[0], Some(-22.5));
    assert_eq!(out.histogram[2], Some(22.5));
    assert_eq!(
        out.alerts.buy,
        vec![Some(true), Some(false), Some(false), Some(false), Some(false)]
    );
    assert_eq!(
        out.alerts.sell,
        vec![Some(false), Some(false), Some(true), Some(false), Some(false)]
    );
}

#[test]
fn test_undefined_rsi_propagates() {
    let out = evaluate_oscillator_alerts(&[None, Some(10.0)], &SignalThresholds::default());
    assert_eq!(out.histogram[0], None);
    assert_eq!(out.alerts.buy, vec![None, Some(true)]);
    assert_eq!(out.alerts.sell, vec![None, Some(false)]);
}

#[test]
fn test_custom_levels() {
    let thresholds = SignalThresholds {
        histogram_buy_level: -30.0,
        histogram_sell_level: 30.0,
        ..SignalThresholds::default()
    };
    let out = evaluate_oscillator_alerts(&[Some(35.0), Some(75.0)], &thresholds);
    assert_eq!(out.alerts.buy, vec![Some(false), Some(false)]);
    assert_eq!(out.alerts.sell, vec![Some(false), Some(true)]);
}

#[test]
fn test_flat_stretch_raises_sell_alert() {
    let rsi = calculate_rsi(&[100.0; 30], 13);
    let out = evaluate_oscillator_alerts(&rsi, &SignalThresholds::default());

    assert_eq!(rsi[20], Some(100.0));
    assert_eq!(out.histogram[20], Some(75.0));
    assert_eq!(out.alerts.sell[20], Some(true));
    assert_eq!(out.alerts.buy[20], Some(false));
}
