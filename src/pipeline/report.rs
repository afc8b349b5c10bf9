use serde_json::{json, Value};

use crate::error::AppError;
use crate::pipeline::summarize;
use crate::types::activity::{OutputFormat, TrainingSummary, Workout};

/// Rendered output of a batch plus how many entries failed.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub output: String,
    pub total: usize,
    pub failures: usize,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }
}

pub fn render_summary(summary: &TrainingSummary, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(summary.to_string()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(summary)?)),
    }
}

/// Summarizes every workout independently. A failing entry is reported in
/// place (a text line or an `{"error": ..}` object) and counted, never aborting
/// the rest.
pub fn render_batch(workouts: &[Workout], format: OutputFormat) -> Result<BatchReport, AppError> {
    let mut failures = 0;
    let mut blocks: Vec<String> = Vec::with_capacity(workouts.len());
    let mut values: Vec<Value> = Vec::with_capacity(workouts.len());

    for (idx, workout) in workouts.iter().enumerate() {
        match summarize(workout) {
            Ok(summary) => match format {
                OutputFormat::Text => blocks.push(summary.to_string()),
                OutputFormat::Json => values.push(serde_json::to_value(&summary)?),
            },
            Err(e) => {
                failures += 1;
                tracing::warn!("Workout #{} skipped: {}", idx + 1, e);
                match format {
                    OutputFormat::Text => blocks.push(format!("Workout #{}: {}\n", idx + 1, e)),
                    OutputFormat::Json => values.push(json!({ "error": e.to_string() })),
                }
            }
        }
    }

    let output = match format {
        OutputFormat::Text => blocks.join("\n"),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&values)?),
    };

    Ok(BatchReport {
        output,
        total: workouts.len(),
        failures,
    })
}
