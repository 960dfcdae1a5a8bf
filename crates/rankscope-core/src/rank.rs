//! Rank estimation from a percentile

use crate::MAX_PERCENTILE;

/// Estimate a 1-based rank out of `pool_size` candidates
///
/// `rank = round((100 - percentile) * pool_size / 100)`, never below 1.
/// The percentile is clamped into `[0, 100]` first (NaN counts as 0), so the
/// function is total and non-increasing in `percentile` for a fixed pool.
pub fn estimate_rank(percentile: f64, pool_size: u64) -> u64 {
    let percentile = if percentile.is_nan() {
        0.0
    } else {
        percentile.clamp(0.0, MAX_PERCENTILE)
    };

    let rank = ((MAX_PERCENTILE - percentile) * pool_size as f64 / MAX_PERCENTILE).round();

    (rank as u64).max(1)
}
