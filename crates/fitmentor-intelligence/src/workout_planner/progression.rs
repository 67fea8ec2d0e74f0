// ABOUTME: Progression strategy lookup per training goal with experience-specific tips
// ABOUTME: Linear, double, rep, and maintenance progression models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use fitmentor_core::models::{ExperienceLevel, ProgressionStrategy, TrainingGoal};

struct ProgressionTemplate {
    method: &'static str,
    increment: &'static str,
    deload: &'static str,
    tips: &'static [&'static str],
}

const fn template(goal: TrainingGoal) -> ProgressionTemplate {
    match goal {
        TrainingGoal::Strength => ProgressionTemplate {
            method: "Linear Progression",
            increment: "Increase weight by 2.5-5 lbs when you hit top of rep range",
            deload: "Deload 10% every 4 weeks",
            tips: &[
                "Focus on adding weight consistently",
                "Rest 3-5 minutes between heavy sets",
                "Maintain strict form",
            ],
        },
        TrainingGoal::Hypertrophy => ProgressionTemplate {
            method: "Double Progression",
            increment: "Increase reps until you hit 12, then add weight and drop to 8 reps",
            deload: "Deload 20% every 5-6 weeks",
            tips: &[
                "Train 1-2 reps from failure",
                "Focus on mind-muscle connection",
                "Track workouts for progressive overload",
            ],
        },
        TrainingGoal::Endurance => ProgressionTemplate {
            method: "Rep Progression",
            increment: "Add 1-2 reps per week",
            deload: "Deload every 6 weeks",
            tips: &["Keep rest periods short", "Focus on time under tension"],
        },
        TrainingGoal::WeightLoss => ProgressionTemplate {
            method: "Maintenance + Metabolic",
            increment: "Maintain strength in deficit",
            deload: "Deload as needed",
            tips: &[
                "Prioritize maintaining strength",
                "Keep protein high",
                "Shorter rest periods for calorie burn",
            ],
        },
    }
}

const BEGINNER_TIPS: [&str; 2] = [
    "Focus on learning proper form",
    "Expect rapid progress in first 3-6 months",
];

const ADVANCED_TIP: &str = "Consider periodization";

/// Progression guidance for a goal, with tips adjusted for experience
///
/// Beginners get two form-and-expectation tips ahead of the goal's tips;
/// advanced lifters get a periodization tip at the end.
#[must_use]
pub fn create_progression_plan(
    goal: TrainingGoal,
    experience: ExperienceLevel,
) -> ProgressionStrategy {
    let template = template(goal);

    let mut tips: Vec<String> = Vec::with_capacity(template.tips.len() + BEGINNER_TIPS.len());
    if experience == ExperienceLevel::Beginner {
        tips.extend(BEGINNER_TIPS.iter().map(ToString::to_string));
    }
    tips.extend(template.tips.iter().map(ToString::to_string));
    if experience == ExperienceLevel::Advanced {
        tips.push(ADVANCED_TIP.to_owned());
    }

    ProgressionStrategy {
        method: template.method.to_owned(),
        increment: template.increment.to_owned(),
        deload: template.deload.to_owned(),
        tips,
    }
}
