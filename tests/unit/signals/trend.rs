//! Unit tests for the trend classifier

use trendlens::config::SignalThresholds;
use trendlens::signals::classify_trend;
use trendlens::TrendLabel;

fn series_ending_with(len: usize, last: Option<f64>) -> Vec<Option<f64>> {
    let mut series = vec![Some(1.0); len];
    if let Some(slot) = series.last_mut() {
        *slot = last;
    }
    series
}

fn classify(short: Option<f64>, long: Option<f64>, rsi: Option<f64>, len: usize) -> TrendLabel {
    classify_trend(
        &series_ending_with(len, short),
        &series_ending_with(len, long),
        &series_ending_with(len, rsi),
        &SignalThresholds::default(),
    )
}

#[test]
fn test_insufficient_history_is_neutral() {
    assert_eq!(classify(Some(110.0), Some(100.0), Some(70.0), 199), TrendLabel::Neutral);
    assert_eq!(classify_trend(&[], &[], &[], &SignalThresholds::default()), TrendLabel::Neutral);
}

#[test]
fn test_uptrend() {
    assert_eq!(classify(Some(110.0), Some(100.0), Some(60.0), 200), TrendLabel::Uptrend);
}

#[test]
fn test_downtrend() {
    assert_eq!(classify(Some(90.0), Some(100.0), Some(40.0), 250), TrendLabel::Downtrend);
}

#[test]
fn test_mixed_conditions_are_neutral() {
    assert_eq!(classify(Some(110.0), Some(100.0), Some(40.0), 250), TrendLabel::Neutral);
    assert_eq!(classify(Some(90.0), Some(100.0), Some(60.0), 250), TrendLabel::Neutral);
    assert_eq!(classify(Some(100.0), Some(100.0), Some(60.0), 250), TrendLabel::Neutral);
    assert_eq!(classify(Some(110.0), Some(100.0), Some(50.0), 250), TrendLabel::Neutral);
}

#[test]
fn test_undefined_last_value_is_neutral() {
    assert_eq!(classify(None, Some(100.0), Some(60.0), 250), TrendLabel::Neutral);
    assert_eq!(classify(Some(110.0), None, Some(60.0), 250), TrendLabel::Neutral);
    assert_eq!(classify(Some(110.0), Some(100.0), None, 250), TrendLabel::Neutral);
}

#[test]
fn test_classification_is_deterministic() {
    let first = classify(Some(110.0), Some(100.0), Some(60.0), 300);
    for _ in 0..10 {
        assert_eq!(classify(Some(110.0), Some(100.0), Some(60.0), 300), first);
    }
}
