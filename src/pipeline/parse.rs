use serde::Deserialize;

use crate::error::InputError;
use crate::types::activity::Workout;

#[derive(Deserialize)]
#[serde(untagged)]
enum WorkoutInput {
    Many(Vec<Workout>),
    One(Workout),
}

/// Reads workouts from JSON: either an array of workout objects or a single one.
pub fn parse_workouts(bytes: &[u8]) -> Result<Vec<Workout>, InputError> {
    let input: WorkoutInput =
        serde_json::from_slice(bytes).map_err(|e| InputError::InvalidJson(e.to_string()))?;

    let workouts = match input {
        WorkoutInput::Many(workouts) => workouts,
        WorkoutInput::One(workout) => vec![workout],
    };

    if workouts.is_empty() {
        return Err(InputError::Empty);
    }

    tracing::debug!("Parsed {} workout(s)", workouts.len());
    Ok(workouts)
}
