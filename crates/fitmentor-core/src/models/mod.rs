// ABOUTME: Domain models shared by the nutrition and workout engines
// ABOUTME: Re-exports profile, exercise, and plan records from their submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

/// Catalog exercise and its classification enums
pub mod exercise;
/// Energy engine inputs and outputs
pub mod nutrition;
/// Workout planner inputs and outputs
pub mod workout;

pub use exercise::{CatalogListing, Difficulty, Exercise, MovementType, MuscleGroup};
pub use nutrition::{
    ActivityLevel, EnergyResult, Gender, MacroBand, MacroBreakdown, NutritionGoal, UserProfile,
    UserProfileParams,
};
pub use workout::{
    DayWorkout, ExperienceLevel, PlanParameters, PrescribedExercise, ProgressionStrategy, Split,
    TrainingDay, TrainingGoal, WorkoutPlan, WorkoutRequest, WorkoutRequestParams,
};
