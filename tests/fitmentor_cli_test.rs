// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors
// ABOUTME: Integration tests for the fitmentor-cli binary
// ABOUTME: Tests command structure, JSON output, and the error envelope on stderr

//! Integration tests for the fitmentor-cli binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

use serde_json::Value;

/// Run the CLI with a clean logging environment and capture its output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_fitmentor-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT")
        .env_remove("FITMENTOR_MIN_SETS")
        .env_remove("FITMENTOR_FAT_FRACTION")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["calories", "workout", "exercises", "demo"] {
        assert!(stdout.contains(command), "help should mention '{command}'");
    }
}

#[test]
fn test_calories_json_output() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "--format",
        "json",
        "calories",
        "--age",
        "25",
        "--height",
        "175",
        "--weight",
        "75",
        "--gender",
        "male",
        "--activity-level",
        "moderate",
        "--goal",
        "maintain",
    ]);

    assert_eq!(exit_code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert!((json["bmr"].as_f64().unwrap() - 1723.75).abs() < 0.01);
    assert_eq!(json["macros"]["carbs"]["percentage"], 50);
}

#[test]
fn test_workout_text_output() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "workout",
        "--goal",
        "hypertrophy",
        "--experience",
        "intermediate",
        "--equipment",
        "barbell,dumbbell,bench",
        "--days-per-week",
        "4",
    ]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Upper/Lower 4x/week"));
    assert!(stdout.contains("Barbell Bench Press"));
    assert!(stdout.contains("Not covered: core"));
}

#[test]
fn test_exercises_for_one_group() {
    let (exit_code, stdout, _stderr) =
        run_cli(&["--format", "json", "exercises", "--muscle-group", "core"]);

    assert_eq!(exit_code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|exercise| exercise["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Planks", "Cable Crunches"]);
}

#[test]
fn test_exercises_text_shows_movement_type() {
    let (exit_code, stdout, _stderr) = run_cli(&["exercises", "--muscle-group", "biceps"]);

    assert_eq!(exit_code, 0);
    let curl = stdout
        .lines()
        .find(|line| line.contains("Barbell Curls"))
        .unwrap();
    assert!(curl.contains("isolation"));
}

#[test]
fn test_demo_json_contains_both_results() {
    let (exit_code, stdout, _stderr) = run_cli(&["--format", "json", "demo"]);

    assert_eq!(exit_code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["calories"]["result"]["target_calories"].is_f64());
    assert_eq!(
        json["workout"]["result"]["workouts"].as_array().unwrap().len(),
        4
    );
}

#[test]
fn test_unsupported_frequency_error_envelope() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "workout",
        "--goal",
        "strength",
        "--experience",
        "beginner",
        "--equipment",
        "barbell",
        "--days-per-week",
        "7",
    ]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    let json: Value = serde_json::from_str(&stderr).unwrap();
    assert_eq!(json["error"]["code"], "UNSUPPORTED_FREQUENCY");
    assert_eq!(json["error"]["field"], "days_per_week");
}

#[test]
fn test_invalid_weight_error_envelope() {
    let (exit_code, _stdout, stderr) = run_cli(&[
        "calories",
        "--age",
        "25",
        "--height",
        "175",
        "--weight",
        "-5",
        "--gender",
        "male",
        "--activity-level",
        "moderate",
        "--goal",
        "maintain",
    ]);

    assert_ne!(exit_code, 0);
    let json: Value = serde_json::from_str(&stderr).unwrap();
    assert_eq!(json["error"]["code"], "INVALID_PARAMETER");
    assert_eq!(json["error"]["field"], "weight");
}
