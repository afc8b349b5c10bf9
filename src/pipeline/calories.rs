use super::distance::METERS_IN_KM;

pub const MINUTES_IN_HOUR: f64 = 60.0;
/// km/h to m/s conversion factor.
pub const KMH_IN_MSEC: f64 = 0.278;

pub const RUNNING_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUNNING_MEAN_SPEED_SHIFT: f64 = 1.79;

pub const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WALKING_HEIGHT_MULTIPLIER: f64 = 0.029;

pub const SWIMMING_MEAN_SPEED_SHIFT: f64 = 1.1;
pub const SWIMMING_WEIGHT_MULTIPLIER: f64 = 2.0;

pub fn running_calories(speed_kmh: f64, duration_hours: f64, weight_kg: f64) -> f64 {
    (RUNNING_MEAN_SPEED_MULTIPLIER * speed_kmh * RUNNING_MEAN_SPEED_SHIFT) * weight_kg
        / METERS_IN_KM
        * duration_hours
        * MINUTES_IN_HOUR
}

/// Walking calories. Height is not checked here: a zero height produces a
/// non-finite result. Use [`crate::pipeline::summarize`] for a validated path.
pub fn walking_calories(speed_kmh: f64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> f64 {
    (WALKING_WEIGHT_MULTIPLIER * weight_kg
        + ((speed_kmh / KMH_IN_MSEC).powi(2) / height_cm) * WALKING_HEIGHT_MULTIPLIER)
        * duration_hours
        * MINUTES_IN_HOUR
}

pub fn swimming_calories(speed_kmh: f64, duration_hours: f64, weight_kg: f64) -> f64 {
    (speed_kmh + SWIMMING_MEAN_SPEED_SHIFT) * SWIMMING_WEIGHT_MULTIPLIER * weight_kg * duration_hours
}
