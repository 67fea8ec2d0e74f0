// ABOUTME: Demo command for fitmentor-cli
// ABOUTME: Runs a sample calorie request and a sample four-day workout request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use anyhow::Result;
use fitmentor::models::{UserProfileParams, WorkoutRequestParams};
use fitmentor::FitMentorEngine;
use serde_json::json;

use crate::helpers::display::{display_energy, display_plan, print_banner, print_json};
use crate::OutputFormat;

fn sample_profile() -> UserProfileParams {
    UserProfileParams {
        age: 25,
        height: 175.0,
        weight: 75.0,
        gender: "male".into(),
        activity_level: "moderate".into(),
        goal: "maintain".into(),
    }
}

fn sample_workout() -> WorkoutRequestParams {
    WorkoutRequestParams {
        goal: "hypertrophy".into(),
        experience: "intermediate".into(),
        equipment: vec!["barbell".into(), "dumbbell".into(), "bench".into()],
        days_per_week: 4,
        session_duration: None,
        gender: None,
    }
}

/// Run both sample requests
pub fn run(engine: &FitMentorEngine, format: OutputFormat) -> Result<()> {
    let profile = sample_profile();
    let workout = sample_workout();

    let energy = engine.compute_energy(&profile)?;
    let plan = engine.generate_plan(&workout)?;

    match format {
        OutputFormat::Json => print_json(&json!({
            "calories": { "input": profile, "result": energy },
            "workout": { "input": workout, "result": plan },
        }))?,
        OutputFormat::Text => {
            print_banner("CALORIE CALCULATOR DEMO");
            println!(
                "  Input: {} years, {} cm, {} kg, {}, {}, goal {}",
                profile.age,
                profile.height,
                profile.weight,
                profile.gender,
                profile.activity_level,
                profile.goal
            );
            println!();
            display_energy(&energy);

            print_banner("WORKOUT PLANNER DEMO");
            println!(
                "  Input: {}, {}, equipment {}, {} days/week",
                workout.goal,
                workout.experience,
                workout.equipment.join(", "),
                workout.days_per_week
            );
            println!();
            display_plan(&plan);
        }
    }

    Ok(())
}
