//! Gini coefficient over realized surplus
//!
//! ```text
//! G = 2 · Σ i·x_i / (n · Σ x_i) − (n + 1) / n      (x sorted ascending, i = 1..n)
//! ```
//!
//! 0 means every agent captured the same surplus, values near 1 mean a single
//! agent captured nearly all of it.

use std::cmp::Ordering;

/// Gini coefficient of a non-negative sample
///
/// Negative (and NaN) entries count as 0. Returns 0 for an empty slice or a
/// zero total, and the result is clamped to `[0, 1]`.
///
/// # Example
/// ```
/// use market_simulator_core_rs::metrics::gini;
///
/// assert_eq!(gini(&[25.0, 25.0]), 0.0);
/// assert_eq!(gini(&[0.0, 10.0]), 0.5);
/// ```
pub fn gini(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted: Vec<f64> = values
        .iter()
        .map(|&v| if v > 0.0 { v } else { 0.0 })
        .collect();

    let n = sorted.len() as f64;
    let sum: f64 = sorted.iter().sum();
    if sum == 0.0 {
        return 0.0;
    }

    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let weighted_sum: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| (i + 1) as f64 * x)
        .sum();

    let g = (2.0 * weighted_sum) / (n * sum) - (n + 1.0) / n;
    g.clamp(0.0, 1.0)
}
