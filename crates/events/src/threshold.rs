//! Precipitation threshold resolution.

use hydrolag_stats::{quantile_type7, sort_ascending};

/// Resolves the event threshold as the type-7 `q` quantile of the strictly
/// positive precipitation values.
///
/// Zero-precipitation days do not take part in the quantile. Returns `None`
/// when no value is positive.
///
/// # Example
///
/// ```
/// use hydrolag_events::precip_threshold;
///
/// // Positive values [1, 2, 3, 4]: h = 3 * 0.5 = 1.5 → 2 + 0.5 * (3 - 2) = 2.5
/// let t = precip_threshold(&[0.0, 4.0, 0.0, 1.0, 3.0, 2.0], 0.5).unwrap();
/// assert!((t - 2.5).abs() < 1e-12);
/// ```
pub fn precip_threshold(precip: &[f64], q: f64) -> Option<f64> {
    let mut positive: Vec<f64> = precip.iter().copied().filter(|&p| p > 0.0).collect();
    if positive.is_empty() {
        return None;
    }
    sort_ascending(&mut positive);
    Some(quantile_type7(&positive, q))
}
