// ABOUTME: Weekly split table keyed by training frequency
// ABOUTME: Full body, upper/lower, and push/pull/legs arrangements for 3-6 days per week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use fitmentor_core::constants::frequency::SUPPORTED_DAYS_PER_WEEK;
use fitmentor_core::errors::{AppError, AppResult};
use fitmentor_core::models::{MuscleGroup, Split, TrainingDay};

use MuscleGroup::{Back, Biceps, Chest, Core, Legs, Shoulders, Triceps};

struct SplitTemplate {
    name: &'static str,
    description: &'static str,
    days: &'static [(&'static str, &'static [MuscleGroup])],
}

const FULL_BODY: SplitTemplate = SplitTemplate {
    name: "Full Body 3x/week",
    description: "Full body training - optimal for beginners",
    days: &[
        ("Full Body A", &[Chest, Back, Legs, Shoulders, Core]),
        ("Full Body B", &[Legs, Chest, Back, Biceps, Triceps]),
        ("Full Body C", &[Back, Chest, Legs, Shoulders, Core]),
    ],
};

const UPPER_LOWER: SplitTemplate = SplitTemplate {
    name: "Upper/Lower 4x/week",
    description: "Upper/Lower split",
    days: &[
        ("Upper A", &[Chest, Back, Shoulders, Biceps, Triceps]),
        ("Lower A", &[Legs, Core]),
        ("Upper B", &[Back, Chest, Shoulders, Biceps, Triceps]),
        ("Lower B", &[Legs, Core]),
    ],
};

const PUSH_PULL_LEGS_5: SplitTemplate = SplitTemplate {
    name: "Push/Pull/Legs 5x/week",
    description: "Push/Pull/Legs split",
    days: &[
        ("Push A", &[Chest, Shoulders, Triceps]),
        ("Pull A", &[Back, Biceps]),
        ("Legs A", &[Legs, Core]),
        ("Push B", &[Shoulders, Chest, Triceps]),
        ("Pull B", &[Back, Biceps, Core]),
    ],
};

const PUSH_PULL_LEGS_6: SplitTemplate = SplitTemplate {
    name: "Push/Pull/Legs 6x/week",
    description: "Push/Pull/Legs split - hitting each muscle 2x",
    days: &[
        ("Push A", &[Chest, Shoulders, Triceps]),
        ("Pull A", &[Back, Biceps]),
        ("Legs A", &[Legs, Core]),
        ("Push B", &[Chest, Shoulders, Triceps]),
        ("Pull B", &[Back, Biceps]),
        ("Legs B", &[Legs, Core]),
    ],
};

impl From<&SplitTemplate> for Split {
    fn from(template: &SplitTemplate) -> Self {
        Self {
            name: template.name.to_owned(),
            description: template.description.to_owned(),
            days: template
                .days
                .iter()
                .map(|(name, groups)| TrainingDay {
                    name: (*name).to_owned(),
                    muscle_groups: groups.to_vec(),
                })
                .collect(),
        }
    }
}

/// Pick the weekly split for a training frequency
///
/// The split depends only on frequency; goal and experience do not change it.
///
/// # Errors
///
/// Returns `UnsupportedFrequency` for any value other than 3, 4, 5, or 6
pub fn select_split(days_per_week: u32) -> AppResult<Split> {
    let template = match days_per_week {
        3 => &FULL_BODY,
        4 => &UPPER_LOWER,
        5 => &PUSH_PULL_LEGS_5,
        6 => &PUSH_PULL_LEGS_6,
        other => {
            return Err(AppError::unsupported_frequency(
                i64::from(other),
                &SUPPORTED_DAYS_PER_WEEK,
            ))
        }
    };

    Ok(Split::from(template))
}
