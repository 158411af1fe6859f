//! Unit tests for the EMA crossover rule-set

use trendlens::signals::evaluate_crossover;

#[test]
fn test_price_above_both_averages_buys() {
    // long < short < price
    let signals = evaluate_crossover(&[105.0], &[Some(102.0)], &[Some(100.0)], 0);
    assert_eq!(signals.buy, vec![Some(true)]);
    assert_eq!(signals.sell, vec![Some(false)]);
}

#[test]
fn test_price_below_both_averages_sells() {
    // price < short < long
    let signals = evaluate_crossover(&[95.0], &[Some(98.0)], &[Some(100.0)], 0);
    assert_eq!(signals.buy, vec![Some(false)]);
    assert_eq!(signals.sell, vec![Some(true)]);
}

#[test]
fn test_mixed_ordering_is_neither() {
    // short < price < long
    let signals = evaluate_crossover(&[100.0], &[Some(99.0)], &[Some(101.0)], 0);
    assert_eq!(signals.buy, vec![Some(false)]);
    assert_eq!(signals.sell, vec![Some(false)]);
}

#[test]
fn test_warmup_rows_are_undefined() {
    let prices = [105.0, 105.0, 105.0];
    let short = [Some(102.0); 3];
    let long = [Some(100.0); 3];
    let signals = evaluate_crossover(&prices, &short, &long, 2);
    assert_eq!(signals.buy, vec![None, None, Some(true)]);
    assert_eq!(signals.sell, vec![None, None, Some(false)]);
}

#[test]
fn test_undefined_average_is_undefined_signal() {
    let signals = evaluate_crossover(&[105.0, 105.0], &[None, Some(102.0)], &[Some(100.0), None], 0);
    assert_eq!(signals.buy, vec![None, None]);
    assert_eq!(signals.sell, vec![None, None]);
}
