//! Rolling-window and smoothing primitives over plain `f64` slices.
//!
//! All functions return a series aligned with their input; positions without
//! enough look-back are `None`.

use crate::models::series::Series;

/// Arithmetic mean of a slice. `None` when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation of a slice.
pub fn population_std(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Rolling mean over `window` values, defined from index `window - 1`.
pub fn rolling_mean(values: &[f64], window: usize) -> Series {
    rolling(values, window, mean)
}

/// Rolling population standard deviation over `window` values.
pub fn rolling_std(values: &[f64], window: usize) -> Series {
    rolling(values, window, population_std)
}

fn rolling<F>(values: &[f64], window: usize, reduce: F) -> Series
where
    F: Fn(&[f64]) -> Option<f64>,
{
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    for end in window..=values.len() {
        out[end - 1] = reduce(&values[end - window..end]);
    }
    out
}

/// Smoothing factor for an exponential moving average of `span` periods.
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// One EMA step from the previous value.
pub fn ema_from_previous(value: f64, previous: f64, alpha: f64) -> f64 {
    alpha * value + (1.0 - alpha) * previous
}

/// Recursive exponential average seeded with the first observation.
///
/// Defined at every position; early values are dominated by the seed.
pub fn ema(values: &[f64], span: usize) -> Series {
    if span == 0 {
        return vec![None; values.len()];
    }
    let alpha = ema_alpha(span);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &value in values {
        let next = match prev {
            Some(p) => ema_from_previous(value, p, alpha),
            None => value,
        };
        prev = Some(next);
        out.push(Some(next));
    }
    out
}

/// Exponential average of a series that may carry an undefined prefix.
/// The recursion starts at the first defined value.
pub fn ema_of_series(values: &[Option<f64>], span: usize) -> Series {
    if span == 0 {
        return vec![None; values.len()];
    }
    let alpha = ema_alpha(span);
    let mut prev: Option<f64> = None;
    values
        .iter()
        .map(|value| {
            let value = (*value)?;
            let next = match prev {
                Some(p) => ema_from_previous(value, p, alpha),
                None => value,
            };
            prev = Some(next);
            Some(next)
        })
        .collect()
}

/// Wilder smoothing of `values[1..]`, seeded with the simple mean of the first
/// `period` entries after index 0. Index 0 has no predecessor and is skipped.
/// Defined from index `period`.
pub fn wilder_smooth(values: &[f64], period: usize) -> Series {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() <= period {
        return out;
    }
    let mut avg = values[1..=period].iter().sum::<f64>() / period as f64;
    out[period] = Some(avg);
    for i in (period + 1)..values.len() {
        avg = (avg * (period as f64 - 1.0) + values[i]) / period as f64;
        out[i] = Some(avg);
    }
    out
}

/// Replace the first `count` positions with `None`.
pub fn mask_prefix(mut series: Series, count: usize) -> Series {
    let count = count.min(series.len());
    series[..count].iter_mut().for_each(|v| *v = None);
    series
}

/// Position-wise combination of two series; undefined if either side is.
pub fn zip_with<F>(a: &[Option<f64>], b: &[Option<f64>], f: F) -> Series
where
    F: Fn(f64, f64) -> f64,
{
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| Some(f((*x)?, (*y)?)))
        .collect()
}

/// Ordinary least-squares fit `y = slope * x + intercept`.
///
/// A constant `x` axis yields slope 0 and the mean of `y` as intercept.
pub fn least_squares(x: &[f64], y: &[f64]) -> Option<(f64, f64)> {
    if x.is_empty() || x.len() != y.len() {
        return None;
    }
    let x_mean = mean(x)?;
    let y_mean = mean(y)?;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        covariance += (xi - x_mean) * (yi - y_mean);
        variance += (xi - x_mean).powi(2);
    }

    if variance == 0.0 {
        return Some((0.0, y_mean));
    }
    let slope = covariance / variance;
    Some((slope, y_mean - slope * x_mean))
}
