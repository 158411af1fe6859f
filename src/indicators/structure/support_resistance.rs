//! Support and Resistance levels

use crate::error::EngineError;
use crate::models::series::SeriesTable;
use crate::models::signal::Levels;

/// Calculate support and resistance over the whole loaded window.
///
/// Support is the lowest `low`, resistance the highest `high`. The distance
/// of the last close to each level is reported in percent.
pub fn calculate_support_resistance(table: &SeriesTable) -> Result<Levels, EngineError> {
    let last = table.last().ok_or(EngineError::EmptySeries)?;

    let (support, resistance) = table.bars().iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(support, resistance), bar| (support.min(bar.low), resistance.max(bar.high)),
    );

    let current_price = last.close;
    let (support_distance_pct, resistance_distance_pct) = if current_price != 0.0 {
        (
            Some(((current_price - support) / current_price) * 100.0),
            Some(((resistance - current_price) / current_price) * 100.0),
        )
    } else {
        (None, None)
    };

    Ok(Levels {
        support,
        resistance,
        support_distance_pct,
        resistance_distance_pct,
    })
}
