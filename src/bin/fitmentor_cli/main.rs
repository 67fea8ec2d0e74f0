// ABOUTME: FitMentor CLI - command-line front end for the nutrition and workout engines
// ABOUTME: Computes calorie targets, generates workout plans, and lists the exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors
//!
//! Usage:
//! ```bash
//! # Daily calorie and macro targets
//! fitmentor-cli calories --age 25 --height 175 --weight 75 --gender male \
//!     --activity-level moderate --goal maintain
//!
//! # Four-day hypertrophy plan with a home gym
//! fitmentor-cli workout --goal hypertrophy --experience intermediate \
//!     --equipment barbell,dumbbell,bench --days-per-week 4
//!
//! # Exercises for one muscle group, as JSON
//! fitmentor-cli --format json exercises --muscle-group legs
//!
//! # Sample requests
//! fitmentor-cli demo
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fitmentor::errors::{AppError, ErrorResponse};
use fitmentor::logging::LoggingConfig;
use fitmentor::FitMentorEngine;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitmentor-cli",
    about = "FitMentor nutrition and training planner",
    long_about = "Compute calorie and macronutrient targets, generate weekly resistance-training plans, and browse the exercise catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute BMR, TDEE, calorie target, and macros
    Calories {
        /// Age in years
        #[arg(long, allow_negative_numbers = true)]
        age: i64,

        /// Height in centimeters
        #[arg(long, allow_negative_numbers = true)]
        height: f64,

        /// Body weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// male or female
        #[arg(long)]
        gender: String,

        /// sedentary, light, moderate, active, or very_active
        #[arg(long)]
        activity_level: String,

        /// lose, maintain, or gain
        #[arg(long)]
        goal: String,
    },

    /// Generate a weekly workout plan
    Workout {
        /// strength, hypertrophy, endurance, or `weight_loss`
        #[arg(long)]
        goal: String,

        /// beginner, intermediate, or advanced
        #[arg(long)]
        experience: String,

        /// Owned equipment (comma-separated, e.g. barbell,dumbbell,bench)
        #[arg(long, value_delimiter = ',')]
        equipment: Vec<String>,

        /// Training days per week (3-6)
        #[arg(long, allow_negative_numbers = true)]
        days_per_week: i64,

        /// Session length in minutes (default: 60)
        #[arg(long, allow_negative_numbers = true)]
        session_duration: Option<i64>,

        /// male or female (default: male)
        #[arg(long)]
        gender: Option<String>,
    },

    /// List the exercise catalog
    Exercises {
        /// Only exercises for this muscle group
        #[arg(long)]
        muscle_group: Option<String>,
    },

    /// Run the sample calorie and workout requests
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("warning: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let engine = FitMentorEngine::from_env()?;
    info!("FitMentor CLI ready");

    let format = cli.format;
    match cli.command {
        Command::Calories {
            age,
            height,
            weight,
            gender,
            activity_level,
            goal,
        } => commands::calories::run(
            &engine,
            format,
            commands::calories::CaloriesArgs {
                age,
                height,
                weight,
                gender,
                activity_level,
                goal,
            },
        )?,
        Command::Workout {
            goal,
            experience,
            equipment,
            days_per_week,
            session_duration,
            gender,
        } => commands::workout::run(
            &engine,
            format,
            commands::workout::WorkoutArgs {
                goal,
                experience,
                equipment,
                days_per_week,
                session_duration,
                gender,
            },
        )?,
        Command::Exercises { muscle_group } => {
            commands::exercises::run(&engine, format, muscle_group.as_deref())?;
        }
        Command::Demo => commands::demo::run(&engine, format)?,
    }

    Ok(())
}

/// Print engine errors as a JSON envelope, anything else as plain text
fn report_error(error: anyhow::Error) {
    match error.downcast::<AppError>() {
        Ok(app_error) => {
            let response = ErrorResponse::from(app_error);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(e) => eprintln!("error: {} ({e})", response.error.message),
            }
        }
        Err(other) => eprintln!("error: {other:#}"),
    }
}
