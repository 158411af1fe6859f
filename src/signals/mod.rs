//! Signal synthesis, trend classification and the analysis pipeline.

pub mod crossover;
pub mod engine;
pub mod mean_reversion;
pub mod oscillator;
pub mod trend;

pub use crossover::*;
pub use mean_reversion::*;
pub use oscillator::*;
pub use trend::*;

use crate::models::signal::SignalSeries;

/// Evaluate a rule at every position in `0..len`. The rule returns `None`
/// when any of its operands is undefined.
pub(crate) fn evaluate_rule<F>(len: usize, rule: F) -> SignalSeries
where
    F: Fn(usize) -> Option<bool>,
{
    (0..len).map(rule).collect()
}
