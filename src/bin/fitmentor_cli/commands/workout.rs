// ABOUTME: Workout plan command for fitmentor-cli
// ABOUTME: Builds a workout request from flags and prints the generated weekly plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use anyhow::Result;
use fitmentor::models::WorkoutRequestParams;
use fitmentor::FitMentorEngine;

use crate::helpers::display::{display_plan, print_banner, print_json};
use crate::OutputFormat;

/// Flags of the `workout` subcommand
pub struct WorkoutArgs {
    pub goal: String,
    pub experience: String,
    pub equipment: Vec<String>,
    pub days_per_week: i64,
    pub session_duration: Option<i64>,
    pub gender: Option<String>,
}

impl From<WorkoutArgs> for WorkoutRequestParams {
    fn from(args: WorkoutArgs) -> Self {
        Self {
            goal: args.goal,
            experience: args.experience,
            equipment: args.equipment,
            days_per_week: args.days_per_week,
            session_duration: args.session_duration,
            gender: args.gender,
        }
    }
}

/// Generate and print a workout plan
pub fn run(engine: &FitMentorEngine, format: OutputFormat, args: WorkoutArgs) -> Result<()> {
    let params = WorkoutRequestParams::from(args);
    let plan = engine.generate_plan(&params)?;

    match format {
        OutputFormat::Json => print_json(&plan)?,
        OutputFormat::Text => {
            print_banner("WORKOUT PLAN");
            display_plan(&plan);
        }
    }

    Ok(())
}
