/// Average step length in meters.
pub const STEP_LENGTH_M: f64 = 0.65;
pub const METERS_IN_KM: f64 = 1000.0;

/// Distance in kilometers covered by `action_count` steps or strokes.
pub fn distance_km(action_count: u64) -> f64 {
    action_count as f64 * STEP_LENGTH_M / METERS_IN_KM
}
