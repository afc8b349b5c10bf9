pub mod calories;
pub mod distance;
pub mod parse;
pub mod report;
pub mod speed;

use crate::error::MetricsError;
use crate::types::activity::{TrainingSummary, TrainingType, Workout};

/// Returned by [`format_training_info`] for a label that names no known activity.
pub const UNKNOWN_TRAINING_TYPE: &str = "unknown training type";

/// Computes the summary of one workout.
///
/// The label is matched leniently (see [`TrainingType::from_label_lenient`]).
/// Walking requires a positive, finite height; any other activity ignores it.
pub fn summarize(workout: &Workout) -> Result<TrainingSummary, MetricsError> {
    let kind = workout.kind();
    if kind == TrainingType::Walking && !(workout.height_cm > 0.0 && workout.height_cm.is_finite()) {
        return Err(MetricsError::InvalidHeight(workout.height_cm));
    }

    evaluate(kind, workout).ok_or_else(|| {
        tracing::warn!("Unrecognized training type: {:?}", workout.training_type);
        MetricsError::UnknownTrainingType(workout.training_type.clone())
    })
}

/// Renders the training report for raw inputs.
///
/// The label must match exactly; anything else yields [`UNKNOWN_TRAINING_TYPE`].
/// Height is not validated, so walking with a zero height reports a
/// non-finite calorie count.
pub fn format_training_info(
    action_count: u64,
    training_type: &str,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
    pool_length_m: u32,
    lap_count: u32,
) -> String {
    let workout = Workout {
        training_type: training_type.to_string(),
        action_count,
        duration_hours,
        weight_kg,
        height_cm,
        pool_length_m,
        lap_count,
    };

    match evaluate(TrainingType::from_label(training_type), &workout) {
        Some(summary) => summary.to_string(),
        None => {
            tracing::warn!("Unrecognized training type: {:?}", training_type);
            UNKNOWN_TRAINING_TYPE.to_string()
        }
    }
}

/// `None` for [`TrainingType::Unrecognized`].
fn evaluate(kind: TrainingType, workout: &Workout) -> Option<TrainingSummary> {
    let distance_km = distance::distance_km(workout.action_count);

    let (speed_kmh, calories) = match kind {
        TrainingType::Running => {
            let speed = speed::mean_speed_kmh(distance_km, workout.duration_hours);
            (
                speed,
                calories::running_calories(speed, workout.duration_hours, workout.weight_kg),
            )
        }
        TrainingType::Walking => {
            let speed = speed::mean_speed_kmh(distance_km, workout.duration_hours);
            (
                speed,
                calories::walking_calories(
                    speed,
                    workout.duration_hours,
                    workout.weight_kg,
                    workout.height_cm,
                ),
            )
        }
        TrainingType::Swimming => {
            let speed = speed::swim_mean_speed_kmh(
                workout.pool_length_m,
                workout.lap_count,
                workout.duration_hours,
            );
            (
                speed,
                calories::swimming_calories(speed, workout.duration_hours, workout.weight_kg),
            )
        }
        TrainingType::Unrecognized => return None,
    };

    tracing::debug!(
        "{} workout: {:.2} km, {:.2} km/h, {:.2} kcal",
        kind,
        distance_km,
        speed_kmh,
        calories
    );

    Some(TrainingSummary {
        training_type: kind,
        label: workout.training_type.clone(),
        duration_hours: workout.duration_hours,
        distance_km,
        speed_kmh,
        calories,
    })
}
