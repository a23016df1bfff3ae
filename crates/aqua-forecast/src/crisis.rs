//! Crisis threshold metrics.

/// Depth in metres beyond which a region has reached critical depletion.
pub const CRISIS_DEPTH_M: f64 = 50.0;

/// Whether one more year at `annual_rate` takes the table past the threshold.
pub fn will_reach_critical(current_depth: f64, annual_rate: f64) -> bool {
    current_depth + annual_rate > CRISIS_DEPTH_M
}

/// Months until the threshold at the current rate.
///
/// Absent when the region is already at or past the threshold, or is not
/// depleting. Never less than one when present.
pub fn months_to_crisis(current_depth: f64, annual_rate: f64) -> Option<u32> {
    if current_depth < CRISIS_DEPTH_M && annual_rate > 0.0 {
        let months = ((CRISIS_DEPTH_M - current_depth) / (annual_rate / 12.0)).round_ties_even();
        // `as` saturates for very slow depletion.
        Some((months as u32).max(1))
    } else {
        None
    }
}
