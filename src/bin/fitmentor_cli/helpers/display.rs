// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors
// ABOUTME: Output formatting helpers for fitmentor-cli
// ABOUTME: Text summaries of energy results, workout plans, and catalog listings, plus JSON output

use anyhow::Result;
use fitmentor::models::{EnergyResult, Exercise, MacroBand, MuscleGroup, WorkoutPlan};
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a section banner
pub fn print_banner(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

fn format_band(name: &str, band: &MacroBand) -> String {
    format!(
        "    {name:<8} {:>6.1}g  {:>6.0} kcal  {:>3}%",
        band.grams, band.calories, band.percentage
    )
}

/// Display energy targets with rounded numbers
pub fn display_energy(result: &EnergyResult) {
    println!("  BMR:             {:.1} kcal", result.bmr);
    println!("  TDEE:            {:.1} kcal", result.tdee);
    println!("  Target Calories: {:.1} kcal", result.target_calories);

    println!("\n  Macros:");
    println!("{}", format_band("Protein", &result.macros.protein));
    println!("{}", format_band("Carbs", &result.macros.carbs));
    println!("{}", format_band("Fats", &result.macros.fats));

    println!("\n  Recommendations:");
    for recommendation in &result.recommendations {
        println!("    - {recommendation}");
    }
}

/// Display a weekly plan day by day
pub fn display_plan(plan: &WorkoutPlan) {
    println!("  Split: {} ({})", plan.split.name, plan.split.description);
    println!(
        "  Goal: {}  Experience: {}  Session: {} min",
        plan.parameters.goal, plan.parameters.experience, plan.parameters.estimated_duration
    );

    for (index, workout) in plan.workouts.iter().enumerate() {
        println!("\n  Day {} - {}:", index + 1, workout.day);
        if workout.exercises.is_empty() {
            println!("    (no exercises match the available equipment)");
        }
        for (position, item) in workout.exercises.iter().enumerate() {
            println!(
                "    {}. {}: {} x {} ({}s rest, warm-up: {}, RIR {})",
                position + 1,
                item.exercise.name,
                item.sets,
                item.reps,
                item.rest_seconds,
                item.warmup_sets,
                item.reps_in_reserve
            );
        }
        if !workout.uncovered_muscle_groups.is_empty() {
            let groups: Vec<&str> = workout
                .uncovered_muscle_groups
                .iter()
                .map(MuscleGroup::as_str)
                .collect();
            println!("    Not covered: {}", groups.join(", "));
        }
    }

    println!("\n  Progression: {}", plan.progression.method);
    println!("    - {}", plan.progression.increment);
    println!("    - {}", plan.progression.deload);
    for tip in &plan.progression.tips {
        println!("    - {tip}");
    }
}

/// Display exercises one per line
pub fn display_exercises<'a>(exercises: impl IntoIterator<Item = &'a Exercise>) {
    for exercise in exercises {
        println!(
            "  {:>3}  {:<28} {:<10} {:<20} {:<10} {:<13} {}",
            exercise.id,
            exercise.name,
            exercise.muscle_group.as_str(),
            exercise.category,
            exercise.movement_type.as_str(),
            exercise.difficulty.as_str(),
            exercise.equipment.join(", ")
        );
    }
}
