// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and sample calorie and workout requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitmentor`

use std::sync::Once;

use fitmentor::models::{
    ActivityLevel, ExperienceLevel, Gender, NutritionGoal, TrainingGoal, UserProfile,
    UserProfileParams, WorkoutRequest, WorkoutRequestParams,
};
use fitmentor::FitMentorEngine;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Engine with default policy and the built-in catalog
pub fn create_test_engine() -> FitMentorEngine {
    init_test_logging();
    FitMentorEngine::default()
}

/// 25-year-old moderately active male, 175 cm, 75 kg, maintaining
pub fn reference_profile() -> UserProfile {
    UserProfile {
        age: 25,
        height_cm: 175.0,
        weight_kg: 75.0,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        goal: NutritionGoal::Maintain,
    }
}

/// Wire form of [`reference_profile`]
pub fn reference_profile_params() -> UserProfileParams {
    UserProfileParams {
        age: 25,
        height: 175.0,
        weight: 75.0,
        gender: "male".into(),
        activity_level: "moderate".into(),
        goal: "maintain".into(),
    }
}

/// Heavy, elderly, sedentary female cutting: protein + fat exceed the target
pub fn infeasible_profile() -> UserProfile {
    UserProfile {
        age: 90,
        height_cm: 150.0,
        weight_kg: 150.0,
        gender: Gender::Female,
        activity_level: ActivityLevel::Sedentary,
        goal: NutritionGoal::Lose,
    }
}

/// Home-gym equipment used by the sample workout request
pub const HOME_GYM: [&str; 3] = ["barbell", "dumbbell", "bench"];

/// Every equipment tag in the built-in catalog
pub const FULL_GYM: [&str; 8] = [
    "barbell",
    "bench",
    "bodyweight",
    "cable",
    "dumbbell",
    "machine",
    "pullup_bar",
    "rack",
];

/// Four-day intermediate hypertrophy request with a home gym
pub fn sample_workout_request() -> WorkoutRequest {
    WorkoutRequest::new(
        TrainingGoal::Hypertrophy,
        ExperienceLevel::Intermediate,
        HOME_GYM,
        4,
    )
}

/// Wire form of [`sample_workout_request`]
pub fn sample_workout_params() -> WorkoutRequestParams {
    WorkoutRequestParams {
        goal: "hypertrophy".into(),
        experience: "intermediate".into(),
        equipment: HOME_GYM.iter().map(|tag| (*tag).to_owned()).collect(),
        days_per_week: 4,
        session_duration: None,
        gender: None,
    }
}
