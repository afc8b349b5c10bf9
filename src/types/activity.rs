use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingType {
    Running,
    Walking,
    Swimming,
    Unrecognized,
}

impl TrainingType {
    /// Resolves an activity label exactly as written. Only the English and
    /// Russian activity names are recognized.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Running" | "Бег" => TrainingType::Running,
            "Walking" | "Ходьба" => TrainingType::Walking,
            "Swimming" | "Плавание" => TrainingType::Swimming,
            _ => TrainingType::Unrecognized,
        }
    }

    /// Forgiving variant of [`TrainingType::from_label`] for typed input:
    /// ignores case and surrounding whitespace and accepts short aliases.
    pub fn from_label_lenient(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "running" | "run" | "бег" => TrainingType::Running,
            "walking" | "walk" | "ходьба" => TrainingType::Walking,
            "swimming" | "swim" | "плавание" => TrainingType::Swimming,
            _ => TrainingType::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingType::Running => "Running",
            TrainingType::Walking => "Walking",
            TrainingType::Swimming => "Swimming",
            TrainingType::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Raw inputs of a single training session.
///
/// `training_type` is kept as the label the caller supplied so that a batch
/// can carry unknown labels and report them per entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub training_type: String,
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub height_cm: f64,
    #[serde(default)]
    pub pool_length_m: u32,
    #[serde(default)]
    pub lap_count: u32,
}

impl Workout {
    pub fn kind(&self) -> TrainingType {
        TrainingType::from_label_lenient(&self.training_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub training_type: TrainingType,
    /// Label as the caller wrote it; echoed in the report.
    pub label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
            self.label, self.duration_hours, self.distance_km, self.speed_kmh, self.calories
        )
    }
}
