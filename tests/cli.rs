use std::io::Write;
use std::process::{Command, Output};

use serde_json::Value;

fn ftracker() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ftracker-rs"));
    cmd.env_remove("FTRACKER_FORMAT")
        .env_remove("FTRACKER_WEIGHT_KG")
        .env_remove("FTRACKER_HEIGHT_CM")
        .env("RUST_LOG", "off");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn batch_file(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(body.as_bytes()).expect("write batch");
    file
}

#[test]
fn show_prints_report() {
    let output = ftracker()
        .args(["show", "Running", "--actions", "9000", "--duration", "1", "--weight", "75"])
        .output()
        .expect("run binary");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Training type: Running\nDuration: 1.00 h.\nDistance: 5.85 km.\nSpeed: 5.85 km/h\nCalories burned: 848.19\n"
    );
}

#[test]
fn show_without_weight_fails() {
    let output = ftracker()
        .args(["show", "Running", "--actions", "9000", "--duration", "1"])
        .output()
        .expect("run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Invalid request: No weight provided"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn show_falls_back_to_profile_environment() {
    let output = ftracker()
        .env("FTRACKER_WEIGHT_KG", "75")
        .env("FTRACKER_HEIGHT_CM", "180")
        .args(["show", "Walking", "--actions", "9000", "--duration", "1"])
        .output()
        .expect("run binary");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Calories burned: 161.78"));
}

#[test]
fn show_json_format() {
    let output = ftracker()
        .env("FTRACKER_FORMAT", "json")
        .args([
            "show", "swim", "--actions", "1200", "--duration", "1", "--weight", "75",
            "--pool-length", "25", "--laps", "40",
        ])
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(value["training_type"], "Swimming");
    assert!((value["speed_kmh"].as_f64().expect("speed") - 1.0).abs() < 1e-9);
}

#[test]
fn mixed_batch_reports_errors_and_fails() {
    let file = batch_file(
        r#"[
  {"training_type": "Running", "action_count": 9000, "duration_hours": 1.0, "weight_kg": 75.0},
  {"training_type": "Skiing", "action_count": 100, "duration_hours": 1.0, "weight_kg": 75.0},
  {"training_type": "Swimming", "action_count": 1200, "duration_hours": 1.0, "weight_kg": 75.0, "pool_length_m": 25, "lap_count": 40}
]"#,
    );

    let output = ftracker()
        .arg("batch")
        .arg(file.path())
        .args(["--format", "json"])
        .output()
        .expect("run binary");

    assert!(!output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output)).expect("json");
    let entries = value.as_array().expect("array");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["training_type"], "Running");
    assert_eq!(entries[1]["error"], "Unknown training type: Skiing");
    assert_eq!(entries[2]["training_type"], "Swimming");
}

#[test]
fn mixed_text_batch_reports_errors_inline() {
    let file = batch_file(
        r#"[
  {"training_type": "Walking", "action_count": 2000, "duration_hours": 0.5, "weight_kg": 80.0},
  {"training_type": "Running", "action_count": 9000, "duration_hours": 1.0, "weight_kg": 75.0}
]"#,
    );

    let output = ftracker()
        .arg("batch")
        .arg(file.path())
        .output()
        .expect("run binary");

    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Workout #1: Invalid height"), "{text}");
    assert!(text.contains("Training type: Running\n"));
}

#[test]
fn clean_batch_succeeds() {
    let file = batch_file(
        r#"{"training_type": "Running", "action_count": 9000, "duration_hours": 1.0, "weight_kg": 75.0}"#,
    );

    let output = ftracker()
        .arg("batch")
        .arg(file.path())
        .output()
        .expect("run binary");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Calories burned: 848.19"));
}

#[test]
fn malformed_batch_file_fails() {
    let file = batch_file("not json");

    let output = ftracker()
        .arg("batch")
        .arg(file.path())
        .output()
        .expect("run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Invalid workout JSON"), "{stderr}");
}
