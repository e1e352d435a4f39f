//! Percentile and summary helpers.
//!
//! - Empty input => `None` (or `0.0` for the convenience wrappers).
//! - `percentile <= 0` => first element.
//! - `percentile >= 100` => last element.
//! - Otherwise the position `percentile / 100 * (len - 1)` is interpolated
//!   linearly between the neighbouring order statistics.

use crate::domain::results::MeanStdDev;

/// Returns the interpolated percentile from a slice already sorted in
/// ascending order.
pub fn value_sorted(sorted_values: &[f64], percentile: f64) -> Option<f64> {
    let last = sorted_values.len().checked_sub(1)?;
    if percentile <= 0.0 {
        return sorted_values.first().copied();
    }
    if percentile >= 100.0 {
        return sorted_values.last().copied();
    }

    let position = (percentile / 100.0) * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let lower_value = sorted_values[lower];
    if lower == upper {
        return Some(lower_value);
    }
    let fraction = position - lower as f64;
    Some(lower_value + (sorted_values[upper] - lower_value) * fraction)
}

/// Sorts `values` in place and returns the requested percentile, `0.0` when
/// empty.
pub fn value_unsorted(values: &mut [f64], percentile: f64) -> f64 {
    values.sort_by(f64::total_cmp);
    value_sorted(values, percentile).unwrap_or(0.0)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean and population standard deviation; both zero for empty input.
pub fn mean_and_std_dev(values: &[f64]) -> MeanStdDev {
    if values.is_empty() {
        return MeanStdDev::default();
    }
    let mean = mean(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    MeanStdDev {
        mean,
        std_dev: variance.sqrt(),
    }
}
