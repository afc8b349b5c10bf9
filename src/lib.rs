pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

pub use error::{AppError, InputError, MetricsError};
pub use pipeline::calories::{running_calories, swimming_calories, walking_calories};
pub use pipeline::distance::distance_km;
pub use pipeline::speed::{mean_speed_kmh, swim_mean_speed_kmh};
pub use pipeline::{format_training_info, summarize, UNKNOWN_TRAINING_TYPE};
pub use types::activity::{OutputFormat, TrainingSummary, TrainingType, Workout};
