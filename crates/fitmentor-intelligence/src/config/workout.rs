// ABOUTME: Workout policy configuration for volume and rep prescriptions
// ABOUTME: Rep ranges and RIR per goal, experience volume multipliers, set bases, and sex-specific bias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use std::fmt;

use fitmentor_core::models::{ExperienceLevel, Gender, MuscleGroup, TrainingGoal};
use serde::{Deserialize, Serialize};

/// Workout policy configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutConfig {
    /// Rep range per training goal
    pub rep_ranges: RepRangesConfig,
    /// Reps in reserve per training goal
    pub reps_in_reserve: RepsInReserveConfig,
    /// Set counts and experience scaling
    pub volume: VolumeConfig,
    /// Per-muscle-group volume bias applied for female lifters
    pub female_bias: MuscleGroupBias,
}

impl WorkoutConfig {
    /// Volume bias for a muscle group; 1.0 for male lifters
    #[must_use]
    pub const fn gender_bias(&self, gender: Gender, group: MuscleGroup) -> f64 {
        match gender {
            Gender::Male => 1.0,
            Gender::Female => self.female_bias.for_group(group),
        }
    }
}

/// Inclusive rep range, rendered as `lo-hi`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
    /// Lower bound
    pub low: u32,
    /// Upper bound
    pub high: u32,
}

impl RepRange {
    /// Create a rep range
    #[must_use]
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Rep range per training goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRangesConfig {
    /// Strength: 3-6
    pub strength: RepRange,
    /// Hypertrophy: 8-12
    pub hypertrophy: RepRange,
    /// Endurance: 15-20
    pub endurance: RepRange,
    /// Weight loss: 12-15
    pub weight_loss: RepRange,
}

impl Default for RepRangesConfig {
    fn default() -> Self {
        Self {
            strength: RepRange::new(3, 6),
            hypertrophy: RepRange::new(8, 12),
            endurance: RepRange::new(15, 20),
            weight_loss: RepRange::new(12, 15),
        }
    }
}

impl RepRangesConfig {
    /// Rep range for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: TrainingGoal) -> RepRange {
        match goal {
            TrainingGoal::Strength => self.strength,
            TrainingGoal::Hypertrophy => self.hypertrophy,
            TrainingGoal::Endurance => self.endurance,
            TrainingGoal::WeightLoss => self.weight_loss,
        }
    }

    /// Every goal's range, in [`TrainingGoal::ALL`] order
    #[must_use]
    pub const fn as_array(&self) -> [RepRange; 4] {
        [
            self.strength,
            self.hypertrophy,
            self.endurance,
            self.weight_loss,
        ]
    }
}

/// Reps in reserve per training goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepsInReserveConfig {
    /// Strength: 1
    pub strength: u8,
    /// Hypertrophy: 1
    pub hypertrophy: u8,
    /// Endurance: 2
    pub endurance: u8,
    /// Weight loss: 1
    pub weight_loss: u8,
}

impl Default for RepsInReserveConfig {
    fn default() -> Self {
        Self {
            strength: 1,
            hypertrophy: 1,
            endurance: 2,
            weight_loss: 1,
        }
    }
}

impl RepsInReserveConfig {
    /// RIR target for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: TrainingGoal) -> u8 {
        match goal {
            TrainingGoal::Strength => self.strength,
            TrainingGoal::Hypertrophy => self.hypertrophy,
            TrainingGoal::Endurance => self.endurance,
            TrainingGoal::WeightLoss => self.weight_loss,
        }
    }
}

/// Set counts and experience scaling
///
/// Sets = max(`min_sets`, floor(base x experience multiplier x bias)), where
/// base is `primary_sets` for the leading picks of a muscle group and
/// `secondary_sets` for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Beginner multiplier: 0.85
    pub beginner_multiplier: f64,
    /// Intermediate multiplier: 1.0
    pub intermediate_multiplier: f64,
    /// Advanced multiplier: 1.15
    pub advanced_multiplier: f64,
    /// Base sets for primary picks: 3
    pub primary_sets: u32,
    /// Base sets for secondary picks: 2
    pub secondary_sets: u32,
    /// Floor on every prescription: 2
    pub min_sets: u32,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            beginner_multiplier: 0.85,
            intermediate_multiplier: 1.0,
            advanced_multiplier: 1.15,
            primary_sets: 3,
            secondary_sets: 2,
            min_sets: 2,
        }
    }
}

impl VolumeConfig {
    /// Volume multiplier for an experience level
    #[must_use]
    pub const fn multiplier(&self, experience: ExperienceLevel) -> f64 {
        match experience {
            ExperienceLevel::Beginner => self.beginner_multiplier,
            ExperienceLevel::Intermediate => self.intermediate_multiplier,
            ExperienceLevel::Advanced => self.advanced_multiplier,
        }
    }
}

/// Multiplier per muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupBias {
    /// Chest: 0.85
    pub chest: f64,
    /// Back: 0.95
    pub back: f64,
    /// Legs: 1.25
    pub legs: f64,
    /// Shoulders: 0.90
    pub shoulders: f64,
    /// Biceps: 0.85
    pub biceps: f64,
    /// Triceps: 0.85
    pub triceps: f64,
    /// Core: 1.15
    pub core: f64,
}

impl Default for MuscleGroupBias {
    fn default() -> Self {
        Self {
            chest: 0.85,
            back: 0.95,
            legs: 1.25,
            shoulders: 0.90,
            biceps: 0.85,
            triceps: 0.85,
            core: 1.15,
        }
    }
}

impl MuscleGroupBias {
    /// Multiplier for one group
    #[must_use]
    pub const fn for_group(&self, group: MuscleGroup) -> f64 {
        match group {
            MuscleGroup::Chest => self.chest,
            MuscleGroup::Back => self.back,
            MuscleGroup::Legs => self.legs,
            MuscleGroup::Shoulders => self.shoulders,
            MuscleGroup::Biceps => self.biceps,
            MuscleGroup::Triceps => self.triceps,
            MuscleGroup::Core => self.core,
        }
    }
}
