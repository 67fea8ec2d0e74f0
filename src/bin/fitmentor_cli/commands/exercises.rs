// ABOUTME: Catalog listing command for fitmentor-cli
// ABOUTME: Prints every exercise or those of one muscle group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use anyhow::Result;
use fitmentor::models::{Exercise, MuscleGroup};
use fitmentor::FitMentorEngine;

use crate::helpers::display::{display_exercises, print_banner, print_json};
use crate::OutputFormat;

/// List the catalog, optionally restricted to one muscle group
pub fn run(
    engine: &FitMentorEngine,
    format: OutputFormat,
    muscle_group: Option<&str>,
) -> Result<()> {
    let Some(group) = muscle_group else {
        let listing = engine.list_catalog();
        match format {
            OutputFormat::Json => print_json(&listing)?,
            OutputFormat::Text => {
                print_banner("EXERCISE CATALOG");
                display_exercises(&listing.exercises);
                let equipment: Vec<&str> =
                    listing.equipment_types.iter().map(String::as_str).collect();
                println!("\n  Equipment: {}", equipment.join(", "));
            }
        }
        return Ok(());
    };

    let group: MuscleGroup = group.parse()?;
    let exercises: Vec<&Exercise> = engine.catalog().by_muscle_group(group).collect();
    match format {
        OutputFormat::Json => print_json(&exercises)?,
        OutputFormat::Text => {
            print_banner(&format!("EXERCISES: {}", group.as_str().to_uppercase()));
            display_exercises(exercises);
        }
    }

    Ok(())
}
