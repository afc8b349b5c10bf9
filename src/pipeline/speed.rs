use super::distance::METERS_IN_KM;

/// Mean speed over the whole session. A zero duration yields 0.
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    distance_km / duration_hours
}

/// Mean swimming speed from pool length and lap count. A zero duration yields 0.
pub fn swim_mean_speed_kmh(pool_length_m: u32, lap_count: u32, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    pool_length_m as f64 * lap_count as f64 / METERS_IN_KM / duration_hours
}
