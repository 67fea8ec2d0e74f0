// ABOUTME: Static exercise catalog with lookup by muscle group, id, and equipment
// ABOUTME: Built-in 38-exercise table plus validated construction for substituted catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use std::collections::{BTreeSet, HashSet};

use fitmentor_core::errors::{AppError, AppResult};
use fitmentor_core::models::{
    CatalogListing, Difficulty, Exercise, MovementType, MuscleGroup,
};

/// Immutable, ordered exercise table
///
/// Declaration order is significant: selection always takes the first
/// matching exercise, so reordering the table changes generated plans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
    /// The built-in catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            exercises: BUILTIN_EXERCISES.iter().map(Exercise::from).collect(),
        }
    }

    /// Build a catalog from caller-supplied exercises, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if an id is zero or repeated, or a rest
    /// period is zero
    pub fn from_exercises(exercises: Vec<Exercise>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(exercises.len());
        for exercise in &exercises {
            if exercise.id == 0 {
                return Err(AppError::invalid_parameter(
                    "id",
                    exercise.id,
                    format!("exercise '{}' needs a positive id", exercise.name),
                ));
            }
            if !seen.insert(exercise.id) {
                return Err(AppError::invalid_parameter(
                    "id",
                    exercise.id,
                    "exercise ids must be unique",
                ));
            }
            if exercise.rest_seconds == 0 {
                return Err(AppError::invalid_parameter(
                    "rest_seconds",
                    exercise.rest_seconds,
                    format!("exercise '{}' needs a positive rest period", exercise.name),
                ));
            }
        }

        Ok(Self { exercises })
    }

    /// Every exercise in declaration order
    #[must_use]
    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog has no exercises
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Exercises filed under `group`, in declaration order
    pub fn by_muscle_group(&self, group: MuscleGroup) -> impl Iterator<Item = &Exercise> {
        self.exercises
            .iter()
            .filter(move |exercise| exercise.muscle_group == group)
    }

    /// Look up an exercise by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }

    /// Distinct muscle groups present
    #[must_use]
    pub fn muscle_groups(&self) -> BTreeSet<MuscleGroup> {
        self.exercises
            .iter()
            .map(|exercise| exercise.muscle_group)
            .collect()
    }

    /// Distinct equipment tags present, sorted
    #[must_use]
    pub fn equipment_types(&self) -> BTreeSet<String> {
        self.exercises
            .iter()
            .flat_map(|exercise| exercise.equipment.iter().cloned())
            .collect()
    }

    /// Full listing for catalog endpoints
    #[must_use]
    pub fn listing(&self) -> CatalogListing {
        CatalogListing {
            exercises: self.exercises.clone(),
            muscle_groups: self.muscle_groups(),
            equipment_types: self.equipment_types(),
        }
    }
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

struct BaseExercise {
    id: u32,
    name: &'static str,
    muscle_group: MuscleGroup,
    category: &'static str,
    equipment: &'static [&'static str],
    difficulty: Difficulty,
    movement_type: MovementType,
    rest_seconds: u32,
    duration_based: bool,
}

impl From<&BaseExercise> for Exercise {
    fn from(value: &BaseExercise) -> Self {
        Self {
            id: value.id,
            name: value.name.to_owned(),
            muscle_group: value.muscle_group,
            category: value.category.to_owned(),
            equipment: value.equipment.iter().map(|tag| (*tag).to_owned()).collect(),
            difficulty: value.difficulty,
            movement_type: value.movement_type,
            rest_seconds: value.rest_seconds,
            duration_based: value.duration_based,
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn base(
    id: u32,
    name: &'static str,
    muscle_group: MuscleGroup,
    category: &'static str,
    equipment: &'static [&'static str],
    difficulty: Difficulty,
    movement_type: MovementType,
    rest_seconds: u32,
) -> BaseExercise {
    BaseExercise {
        id,
        name,
        muscle_group,
        category,
        equipment,
        difficulty,
        movement_type,
        rest_seconds,
        duration_based: false,
    }
}

impl BaseExercise {
    const fn timed(mut self) -> Self {
        self.duration_based = true;
        self
    }
}

use Difficulty::{Beginner, Intermediate};
use MovementType::{Compound, Isolation};
use MuscleGroup::{Back, Biceps, Chest, Core, Legs, Shoulders, Triceps};

#[rustfmt::skip]
const BUILTIN_EXERCISES: [BaseExercise; 38] = [
    // Chest
    base(1, "Barbell Bench Press", Chest, "flat_press", &["barbell", "bench", "rack"], Intermediate, Compound, 120),
    base(2, "Dumbbell Bench Press", Chest, "flat_press", &["dumbbell", "bench"], Beginner, Compound, 120),
    base(3, "Machine Chest Press", Chest, "flat_press", &["machine"], Beginner, Compound, 90),
    base(4, "Incline Barbell Press", Chest, "incline_press", &["barbell", "bench", "rack"], Intermediate, Compound, 120),
    base(5, "Incline Dumbbell Press", Chest, "incline_press", &["dumbbell", "bench"], Intermediate, Compound, 120),
    base(6, "Cable Flyes", Chest, "chest_fly", &["cable"], Intermediate, Isolation, 60),
    base(7, "Pec Deck Flyes", Chest, "chest_fly", &["machine"], Beginner, Isolation, 60),
    base(8, "Dips (Chest Focus)", Chest, "dip", &["bodyweight"], Intermediate, Compound, 120),
    // Back
    base(9, "Pull-Ups", Back, "vertical_pull", &["pullup_bar"], Intermediate, Compound, 120),
    base(10, "Lat Pulldowns", Back, "vertical_pull", &["cable", "machine"], Beginner, Compound, 120),
    base(11, "Barbell Rows", Back, "horizontal_pull", &["barbell"], Intermediate, Compound, 120),
    base(12, "Dumbbell Rows", Back, "horizontal_pull", &["dumbbell", "bench"], Beginner, Compound, 120),
    base(13, "Seated Cable Rows", Back, "horizontal_pull", &["cable"], Beginner, Compound, 120),
    base(14, "Face Pulls", Back, "back_isolation", &["cable"], Beginner, Isolation, 60),
    // Legs
    base(15, "Barbell Back Squats", Legs, "squat_pattern", &["barbell", "rack"], Intermediate, Compound, 180),
    base(16, "Leg Press", Legs, "squat_pattern", &["machine"], Beginner, Compound, 120),
    base(17, "Hack Squats", Legs, "squat_pattern", &["machine"], Intermediate, Compound, 120),
    base(18, "Goblet Squats", Legs, "squat_pattern", &["dumbbell"], Beginner, Compound, 90),
    base(19, "Romanian Deadlifts", Legs, "hip_hinge", &["barbell"], Intermediate, Compound, 120),
    base(20, "Dumbbell RDLs", Legs, "hip_hinge", &["dumbbell"], Beginner, Compound, 120),
    base(21, "Leg Extensions", Legs, "quad_isolation", &["machine"], Beginner, Isolation, 60),
    base(22, "Leg Curls", Legs, "hamstring_isolation", &["machine"], Beginner, Isolation, 60),
    base(23, "Seated Leg Curls", Legs, "hamstring_isolation", &["machine"], Beginner, Isolation, 60),
    base(24, "Bulgarian Split Squats", Legs, "unilateral_leg", &["dumbbell", "bench"], Intermediate, Compound, 90),
    base(25, "Walking Lunges", Legs, "unilateral_leg", &["dumbbell"], Beginner, Compound, 90),
    // Shoulders
    base(26, "Overhead Press", Shoulders, "overhead_press", &["barbell", "rack"], Intermediate, Compound, 120),
    base(27, "Dumbbell Shoulder Press", Shoulders, "overhead_press", &["dumbbell"], Beginner, Compound, 120),
    base(28, "Lateral Raises", Shoulders, "lateral_delt", &["dumbbell"], Beginner, Isolation, 60),
    base(29, "Cable Lateral Raises", Shoulders, "lateral_delt", &["cable"], Beginner, Isolation, 60),
    base(30, "Rear Delt Flyes", Shoulders, "rear_delt", &["dumbbell"], Beginner, Isolation, 60),
    // Arms
    base(31, "Barbell Curls", Biceps, "bicep_curl", &["barbell"], Beginner, Isolation, 60),
    base(32, "Dumbbell Curls", Biceps, "bicep_curl", &["dumbbell"], Beginner, Isolation, 60),
    base(33, "Hammer Curls", Biceps, "bicep_curl", &["dumbbell"], Beginner, Isolation, 60),
    base(34, "Tricep Pushdowns", Triceps, "tricep_extension", &["cable"], Beginner, Isolation, 60),
    base(35, "Overhead Tricep Extension", Triceps, "tricep_extension", &["dumbbell"], Beginner, Isolation, 60),
    base(36, "Close-Grip Bench Press", Triceps, "tricep_press", &["barbell", "bench"], Intermediate, Compound, 90),
    // Core
    base(37, "Planks", Core, "core", &["bodyweight"], Beginner, Isolation, 60).timed(),
    base(38, "Cable Crunches", Core, "core", &["cable"], Beginner, Isolation, 60),
];
