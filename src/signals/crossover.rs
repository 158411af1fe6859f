//! Crossover rule-set: price recovering above both averages while the short
//! average leads the long one.

use crate::models::signal::SignalPair;

use super::evaluate_rule;

/// Buy when both EMAs sit below the typical price and the long EMA is below
/// the short EMA; sell when all three inequalities reverse.
///
/// The first `warmup` positions are undefined since early EMA values are
/// still dominated by their seed.
pub fn evaluate_crossover(
    typical_prices: &[f64],
    short_ema: &[Option<f64>],
    long_ema: &[Option<f64>],
    warmup: usize,
) -> SignalPair {
    let len = typical_prices.len();
    let operands = |i: usize| -> Option<(f64, f64, f64)> {
        if i < warmup {
            return None;
        }
        Some((typical_prices[i], (*short_ema.get(i)?)?, (*long_ema.get(i)?)?))
    };

    let buy = evaluate_rule(len, |i| {
        let (price, short, long) = operands(i)?;
        Some(short < price && long < price && long < short)
    });

    let sell = evaluate_rule(len, |i| {
        let (price, short, long) = operands(i)?;
        Some(short > price && long > price && long > short)
    });

    SignalPair { buy, sell }
}
