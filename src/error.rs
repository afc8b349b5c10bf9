#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Unknown training type: {0}")]
    UnknownTrainingType(String),
    #[error("Invalid height for walking calories: {0} cm (must be positive)")]
    InvalidHeight(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid workout JSON: {0}")]
    InvalidJson(String),
    #[error("No workouts found in input")]
    Empty,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("Failed to serialize output: {}", err))
    }
}
