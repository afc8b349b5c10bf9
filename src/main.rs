use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ftracker_rs::config::Config;
use ftracker_rs::error::AppError;
use ftracker_rs::pipeline::{self, parse, report};
use ftracker_rs::types::activity::{OutputFormat, Workout};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Training metrics calculator: distance, mean speed and calories burned
/// for running, walking and swimming sessions.
#[derive(Parser)]
#[command(name = "ftracker-rs", version, about, long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(long, global = true, value_name = "FORMAT", value_parser = parse_format)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a single workout
    Show {
        /// Training type (Running, Walking, Swimming)
        training_type: String,

        /// Number of steps or strokes
        #[arg(long)]
        actions: u64,

        /// Duration in hours
        #[arg(long)]
        duration: f64,

        /// Weight in kilograms (falls back to FTRACKER_WEIGHT_KG)
        #[arg(long)]
        weight: Option<f64>,

        /// Height in centimeters (falls back to FTRACKER_HEIGHT_CM)
        #[arg(long)]
        height: Option<f64>,

        /// Pool length in meters, swimming only
        #[arg(long, default_value_t = 0)]
        pool_length: u32,

        /// Number of pool laps, swimming only
        #[arg(long, default_value_t = 0)]
        laps: u32,
    },

    /// Summarize every workout in a JSON file
    Batch {
        /// JSON file holding one workout object or an array of them
        file: PathBuf,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).ok_or_else(|| format!("unsupported format '{}' (expected text or json)", s))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ftracker_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let format = cli.format.unwrap_or(config.format);

    let result = match cli.command {
        Command::Show {
            training_type,
            actions,
            duration,
            weight,
            height,
            pool_length,
            laps,
        } => config.resolve_weight(weight).and_then(|weight_kg| {
            let workout = Workout {
                training_type,
                action_count: actions,
                duration_hours: duration,
                weight_kg,
                height_cm: config.resolve_height(height),
                pool_length_m: pool_length,
                lap_count: laps,
            };
            show(&workout, format)
        }),
        Command::Batch { file } => batch(&file, format),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn show(workout: &Workout, format: OutputFormat) -> Result<bool, AppError> {
    let summary = pipeline::summarize(workout)?;
    print!("{}", report::render_summary(&summary, format)?);
    Ok(true)
}

/// Returns `Ok(false)` when at least one entry failed; the rest are still reported.
fn batch(file: &Path, format: OutputFormat) -> Result<bool, AppError> {
    let bytes = std::fs::read(file)?;
    let workouts = parse::parse_workouts(&bytes)?;

    tracing::info!("Summarizing {} workout(s) from {}", workouts.len(), file.display());

    let batch = report::render_batch(&workouts, format)?;
    print!("{}", batch.output);

    if !batch.is_success() {
        tracing::warn!("{} of {} workout(s) failed", batch.failures, batch.total);
    }
    Ok(batch.is_success())
}
