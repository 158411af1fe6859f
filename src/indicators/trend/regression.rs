//! Linear regression trendline

use chrono::{DateTime, Utc};

use crate::common::math;
use crate::models::indicators::TrendLine;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Fit close against elapsed time (in days since the earliest timestamp) with
/// ordinary least squares over the whole series.
///
/// Returns the fitted value per row plus the slope (price per day) and
/// intercept. An empty input yields an empty line without coefficients.
pub fn calculate_linear_trend(timestamps: &[DateTime<Utc>], closes: &[f64]) -> TrendLine {
    let undefined = TrendLine {
        fitted: vec![None; closes.len()],
        slope: None,
        intercept: None,
    };

    let Some(origin) = timestamps.iter().min() else {
        return undefined;
    };
    if timestamps.len() != closes.len() {
        return undefined;
    }

    let elapsed = elapsed_days(timestamps, *origin);
    let Some((slope, intercept)) = math::least_squares(&elapsed, closes) else {
        return undefined;
    };

    TrendLine {
        fitted: elapsed.iter().map(|x| Some(slope * x + intercept)).collect(),
        slope: Some(slope),
        intercept: Some(intercept),
    }
}

/// Fractional days between each timestamp and `origin`.
pub fn elapsed_days(timestamps: &[DateTime<Utc>], origin: DateTime<Utc>) -> Vec<f64> {
    timestamps
        .iter()
        .map(|t| (*t - origin).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY)
        .collect()
}
