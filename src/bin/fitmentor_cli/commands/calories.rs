// ABOUTME: Calorie target command for fitmentor-cli
// ABOUTME: Builds a calorie request from flags and prints the energy result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use anyhow::Result;
use fitmentor::models::UserProfileParams;
use fitmentor::FitMentorEngine;

use crate::helpers::display::{display_energy, print_banner, print_json};
use crate::OutputFormat;

/// Flags of the `calories` subcommand
pub struct CaloriesArgs {
    pub age: i64,
    pub height: f64,
    pub weight: f64,
    pub gender: String,
    pub activity_level: String,
    pub goal: String,
}

impl From<CaloriesArgs> for UserProfileParams {
    fn from(args: CaloriesArgs) -> Self {
        Self {
            age: args.age,
            height: args.height,
            weight: args.weight,
            gender: args.gender,
            activity_level: args.activity_level,
            goal: args.goal,
        }
    }
}

/// Compute and print energy targets
pub fn run(engine: &FitMentorEngine, format: OutputFormat, args: CaloriesArgs) -> Result<()> {
    let params = UserProfileParams::from(args);
    let result = engine.compute_energy(&params)?;

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => {
            print_banner("CALORIE TARGETS");
            display_energy(&result);
        }
    }

    Ok(())
}
