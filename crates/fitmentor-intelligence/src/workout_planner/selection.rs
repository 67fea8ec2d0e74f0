// ABOUTME: Exercise filtering by equipment and experience, and per-muscle-group selection
// ABOUTME: Movement-pattern ordering for large groups, first-N picks for arms and core, set volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use std::collections::BTreeSet;

use fitmentor_core::constants::prescription::{
    DURATION_REPS, WARMUP_COMPOUND, WARMUP_NOT_NEEDED, WARMUP_OPTIONAL,
};
use fitmentor_core::models::{
    Exercise, ExperienceLevel, MovementType, MuscleGroup, PrescribedExercise,
};

use crate::config::{RepRange, VolumeConfig};

/// Movement patterns of a large group that use the primary set base
const PRIMARY_PATTERNS: usize = 2;

/// Movement patterns trained for a large muscle group, in exercise order
#[must_use]
pub const fn movement_patterns(group: MuscleGroup) -> &'static [&'static str] {
    match group {
        MuscleGroup::Legs => &[
            "hamstring_isolation",
            "squat_pattern",
            "hip_hinge",
            "quad_isolation",
        ],
        MuscleGroup::Chest => &["flat_press", "incline_press", "chest_fly"],
        MuscleGroup::Back => &["vertical_pull", "horizontal_pull", "back_isolation"],
        MuscleGroup::Shoulders => &["overhead_press", "lateral_delt", "rear_delt"],
        MuscleGroup::Biceps | MuscleGroup::Triceps | MuscleGroup::Core => &[],
    }
}

/// How many candidates a small muscle group takes directly
#[must_use]
pub const fn direct_pick_count(group: MuscleGroup) -> usize {
    match group {
        MuscleGroup::Biceps | MuscleGroup::Triceps => 2,
        MuscleGroup::Core => 1,
        MuscleGroup::Chest | MuscleGroup::Back | MuscleGroup::Legs | MuscleGroup::Shoulders => 0,
    }
}

/// Keep exercises the lifter can perform, in catalog order
///
/// An exercise is kept when the lifter owns at least one of its equipment
/// tags and its difficulty is allowed for the experience level. Adding
/// equipment or experience never removes an exercise.
#[must_use]
pub fn filter_exercises<'a>(
    exercises: &'a [Exercise],
    equipment: &BTreeSet<String>,
    experience: ExperienceLevel,
) -> Vec<&'a Exercise> {
    exercises
        .iter()
        .filter(|exercise| {
            exercise.usable_with(equipment) && experience.allows(exercise.difficulty)
        })
        .collect()
}

/// Per-request prescription parameters shared by every pick
#[derive(Debug, Clone, Copy)]
pub struct Prescription<'a> {
    /// Goal rep range
    pub rep_range: RepRange,
    /// Goal reps in reserve
    pub reps_in_reserve: u8,
    /// Experience volume multiplier
    pub volume_multiplier: f64,
    /// Set bases and floor
    pub volume: &'a VolumeConfig,
}

impl Prescription<'_> {
    /// Working sets for a primary or secondary pick
    ///
    /// `floor(base x volume_multiplier x bias)`, never below `min_sets`.
    #[must_use]
    pub fn sets(&self, primary: bool, bias: f64) -> u32 {
        let base = if primary {
            self.volume.primary_sets
        } else {
            self.volume.secondary_sets
        };
        let adjusted = self.volume_multiplier * bias;
        let scaled = (f64::from(base) * adjusted).floor().max(0.0) as u32;
        scaled.max(self.volume.min_sets)
    }

    fn prescribe(&self, exercise: &Exercise, sets: u32) -> PrescribedExercise {
        let reps = if exercise.duration_based {
            DURATION_REPS.to_owned()
        } else {
            self.rep_range.to_string()
        };

        PrescribedExercise {
            exercise: exercise.clone(),
            sets,
            reps,
            rest_seconds: exercise.rest_seconds,
            warmup_sets: warmup_guidance(exercise).to_owned(),
            reps_in_reserve: self.reps_in_reserve,
        }
    }
}

/// Fixed warm-up guidance for an exercise
#[must_use]
pub const fn warmup_guidance(exercise: &Exercise) -> &'static str {
    match (exercise.muscle_group, exercise.movement_type) {
        (MuscleGroup::Core, _) => WARMUP_NOT_NEEDED,
        (_, MovementType::Compound) => WARMUP_COMPOUND,
        (_, MovementType::Isolation) => WARMUP_OPTIONAL,
    }
}

/// Choose and prescribe exercises for one muscle group
///
/// `candidates` must already be filtered; only those filed under `group` are
/// considered. Large groups take the first candidate of each movement pattern
/// in pattern order, and the first two pattern positions get the primary set
/// base even when an earlier pattern has no candidate. Small groups take the
/// first candidates directly and only the first of them is primary. Returns
/// an empty list when nothing fits.
#[must_use]
pub fn select_for_muscle_group(
    group: MuscleGroup,
    candidates: &[&Exercise],
    prescription: &Prescription<'_>,
    bias: f64,
) -> Vec<PrescribedExercise> {
    let in_group = || {
        candidates
            .iter()
            .copied()
            .filter(move |exercise| exercise.muscle_group == group)
    };

    let patterns = movement_patterns(group);
    if patterns.is_empty() {
        return in_group()
            .take(direct_pick_count(group))
            .enumerate()
            .map(|(slot, exercise)| {
                prescription.prescribe(exercise, prescription.sets(slot == 0, bias))
            })
            .collect();
    }

    patterns
        .iter()
        .enumerate()
        .filter_map(|(slot, pattern)| {
            in_group()
                .find(|exercise| exercise.category == *pattern)
                .map(|exercise| {
                    let primary = slot < PRIMARY_PATTERNS;
                    prescription.prescribe(exercise, prescription.sets(primary, bias))
                })
        })
        .collect()
}
