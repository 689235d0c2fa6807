//! Decay-time feature extraction.
//!
//! Reduces a cumulative count series to how far back it last sat at 10%
//! and then 1% of its latest value, scanning from the end of the series.

use crate::core::FeaturePoint;

/// Compute the decay-profile feature for one cumulative count series.
///
/// Let `n` be the latest count. The 10%-decay index `i` is the rightmost
/// position whose count is at most `n / 10` and no greater than its
/// successor (the successor guard keeps the scan on the decaying tail
/// rather than local noise); the 1%-decay index `j` is found the same way
/// at threshold `n / 100`, scanning back from `i`. The feature is
/// `x = last_index - i` and `y = i - j`.
///
/// Thresholds use real division: `n = 10` yields thresholds `1.0` and
/// `0.1`, not `1` and `0`.
///
/// Unusable regions yield NaN coordinates instead of an error:
/// * `n == 0`, an empty series, or a single observation → `(NaN, NaN)`;
/// * no qualifying 10%-decay index → `(NaN, NaN)`;
/// * 10% found but no qualifying 1%-decay index → `(x, NaN)`.
pub fn decay_profile(counts: &[u64]) -> FeaturePoint {
    let m = counts.len();
    if m < 2 || counts[m - 1] == 0 {
        return FeaturePoint::invalid();
    }
    let n = counts[m - 1] as f64;

    let i = match decay_index(counts, m - 2, n / 10.0) {
        Some(i) => i,
        // The series never sat at or below 10% of its final count; there
        // is no decay tail to measure.
        None => return FeaturePoint::invalid(),
    };
    let x = ((m - 1) - i) as f64;

    match decay_index(counts, i, n / 100.0) {
        Some(j) => FeaturePoint::new(x, (i - j) as f64),
        None => FeaturePoint::new(x, f64::NAN),
    }
}

/// Rightmost index `k <= upper` with `counts[k] <= threshold` and
/// `counts[k] <= counts[k + 1]`. Requires `upper <= counts.len() - 2`.
fn decay_index(counts: &[u64], upper: usize, threshold: f64) -> Option<usize> {
    (0..=upper)
        .rev()
        .find(|&k| counts[k] as f64 <= threshold && counts[k] <= counts[k + 1])
}
