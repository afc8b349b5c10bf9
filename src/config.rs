use crate::error::AppError;
use crate::types::activity::OutputFormat;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub format: OutputFormat,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}

impl Config {
    pub fn from_env() -> Self {
        let format = std::env::var("FTRACKER_FORMAT")
            .ok()
            .and_then(|s| OutputFormat::from_str(&s))
            .unwrap_or_default();

        let weight_kg = std::env::var("FTRACKER_WEIGHT_KG")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        let height_cm = std::env::var("FTRACKER_HEIGHT_CM")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        Self {
            format,
            weight_kg,
            height_cm,
        }
    }

    /// Weight from the flag, else from `FTRACKER_WEIGHT_KG`.
    pub fn resolve_weight(&self, flag: Option<f64>) -> Result<f64, AppError> {
        flag.or(self.weight_kg).ok_or_else(|| {
            AppError::BadRequest("No weight provided (use --weight or FTRACKER_WEIGHT_KG)".to_string())
        })
    }

    /// Height from the flag, else from `FTRACKER_HEIGHT_CM`, else 0.
    pub fn resolve_height(&self, flag: Option<f64>) -> f64 {
        flag.or(self.height_cm).unwrap_or(0.0)
    }
}
