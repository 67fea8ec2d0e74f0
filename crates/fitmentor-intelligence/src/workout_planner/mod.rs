// ABOUTME: Weekly workout plan generation from goal, experience, equipment, and frequency
// ABOUTME: Split selection, catalog filtering, per-muscle selection, volume, and progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

//! Workout Planner Module
//!
//! Builds a [`WorkoutPlan`] in five fixed steps:
//!
//! 1. pick the weekly split from the training frequency
//! 2. filter the catalog by owned equipment and experience
//! 3. choose exercises for each muscle group of each day
//! 4. attach sets, reps, rest, warm-up, and RIR
//! 5. attach the goal's progression strategy
//!
//! The planner is deterministic: the same request against the same catalog
//! and configuration always yields the same plan.

/// Progression strategy table
pub mod progression;
/// Filtering, selection, and set volume
pub mod selection;
/// Weekly split table
pub mod split;

pub use progression::create_progression_plan;
pub use selection::{filter_exercises, select_for_muscle_group, Prescription};
pub use split::select_split;

use std::sync::Arc;

use fitmentor_core::errors::AppResult;
use fitmentor_core::models::{DayWorkout, PlanParameters, WorkoutPlan, WorkoutRequest};
use tracing::{debug, warn};

use crate::catalog::ExerciseCatalog;
use crate::config::WorkoutConfig;

/// Workout plan generator over a shared exercise catalog
#[derive(Debug, Clone)]
pub struct WorkoutPlanner {
    catalog: Arc<ExerciseCatalog>,
    config: WorkoutConfig,
}

impl WorkoutPlanner {
    /// Create a planner over `catalog` with the given policy
    #[must_use]
    pub const fn new(catalog: Arc<ExerciseCatalog>, config: WorkoutConfig) -> Self {
        Self { catalog, config }
    }

    /// Planner over the built-in catalog with default policy
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(ExerciseCatalog::builtin()), WorkoutConfig::default())
    }

    /// The catalog exercises are drawn from
    #[must_use]
    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    /// The policy in use
    #[must_use]
    pub const fn config(&self) -> &WorkoutConfig {
        &self.config
    }

    /// Generate a weekly plan
    ///
    /// A muscle group with no usable exercise is recorded in the day's
    /// `uncovered_muscle_groups` and logged; it does not fail the plan.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFrequency` if no split exists for
    /// `request.days_per_week`
    pub fn generate_plan(&self, request: &WorkoutRequest) -> AppResult<WorkoutPlan> {
        let split = select_split(request.days_per_week)?;

        let available =
            filter_exercises(self.catalog.all(), &request.equipment, request.experience);
        debug!(
            available = available.len(),
            catalog = self.catalog.len(),
            experience = %request.experience,
            "Filtered exercise catalog"
        );

        let prescription = Prescription {
            rep_range: self.config.rep_ranges.for_goal(request.goal),
            reps_in_reserve: self.config.reps_in_reserve.for_goal(request.goal),
            volume_multiplier: self.config.volume.multiplier(request.experience),
            volume: &self.config.volume,
        };

        let workouts = split
            .days
            .iter()
            .map(|day| {
                let mut exercises = Vec::new();
                let mut uncovered_muscle_groups = Vec::new();

                for &group in &day.muscle_groups {
                    let bias = self.config.gender_bias(request.gender, group);
                    let picks = select_for_muscle_group(group, &available, &prescription, bias);
                    if picks.is_empty() {
                        warn!(
                            day = %day.name,
                            muscle_group = %group,
                            "No available exercise for muscle group"
                        );
                        uncovered_muscle_groups.push(group);
                    }
                    exercises.extend(picks);
                }

                DayWorkout {
                    day: day.name.clone(),
                    exercises,
                    uncovered_muscle_groups,
                }
            })
            .collect();

        let progression = create_progression_plan(request.goal, request.experience);

        debug!(split = %split.name, goal = %request.goal, "Generated workout plan");

        Ok(WorkoutPlan {
            split,
            workouts,
            progression,
            parameters: PlanParameters::from(request),
        })
    }
}

impl Default for WorkoutPlanner {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitmentor_core::models::{ExperienceLevel, TrainingGoal};

    #[test]
    fn test_plan_days_follow_split() {
        let planner = WorkoutPlanner::with_defaults();
        let request = WorkoutRequest::new(
            TrainingGoal::Hypertrophy,
            ExperienceLevel::Intermediate,
            ["barbell", "dumbbell", "bench", "cable"],
            5,
        );

        let plan = planner.generate_plan(&request).unwrap();

        assert_eq!(plan.workouts.len(), 5);
        for (workout, day) in plan.workouts.iter().zip(&plan.split.days) {
            assert_eq!(workout.day, day.name);
        }
    }

    #[test]
    fn test_no_equipment_reports_every_group_uncovered() {
        let planner = WorkoutPlanner::with_defaults();
        let request = WorkoutRequest::new(
            TrainingGoal::Strength,
            ExperienceLevel::Advanced,
            Vec::<String>::new(),
            4,
        );

        let plan = planner.generate_plan(&request).unwrap();

        assert!(plan.prescriptions().next().is_none());
        assert_eq!(
            plan.workouts[1].uncovered_muscle_groups,
            plan.split.days[1].muscle_groups
        );
    }
}
