// ABOUTME: Exercise catalog entry model and its classification enums
// ABOUTME: Muscle group, difficulty, and movement type used for filtering and selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Muscle group an exercise is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, rhomboids, traps
    Back,
    /// Quads, hamstrings, glutes
    Legs,
    /// Deltoids
    Shoulders,
    /// Elbow flexors
    Biceps,
    /// Elbow extensors
    Triceps,
    /// Abdominals and trunk
    Core,
}

impl MuscleGroup {
    /// Every muscle group in catalog order
    pub const ALL: [Self; 7] = [
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Core,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Core => "core",
        }
    }
}

impl FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_parameter(
                    "muscle_group",
                    s,
                    "expected one of: chest, back, legs, shoulders, biceps, triceps, core",
                )
            })
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Technical difficulty of an exercise, ordered easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Safe to learn without coaching
    Beginner,
    /// Needs some practice
    Intermediate,
    /// For experienced lifters
    Advanced,
}

impl Difficulty {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multi-joint or single-joint movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    /// Multi-joint, several muscle groups
    Compound,
    /// Single joint, one muscle group
    Isolation,
}

impl MovementType {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compound => "compound",
            Self::Isolation => "isolation",
        }
    }
}

/// A catalog exercise. Never mutated once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique positive identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Muscle group the exercise is filed under
    pub muscle_group: MuscleGroup,
    /// Movement-pattern tag (e.g. `flat_press`, `squat_pattern`)
    pub category: String,
    /// Equipment tags; owning any one of them is enough
    pub equipment: Vec<String>,
    /// Technical difficulty
    pub difficulty: Difficulty,
    /// Compound or isolation
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    /// Base rest between sets
    pub rest_seconds: u32,
    /// Prescribed as a timed hold rather than reps
    #[serde(default)]
    pub duration_based: bool,
}

impl Exercise {
    /// Whether any of the exercise's equipment tags is in `owned`
    #[must_use]
    pub fn usable_with(&self, owned: &BTreeSet<String>) -> bool {
        self.equipment.iter().any(|tag| owned.contains(tag))
    }
}

/// Read-only view of the catalog for listing endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogListing {
    /// Every exercise in declaration order
    pub exercises: Vec<Exercise>,
    /// Distinct muscle groups present
    pub muscle_groups: BTreeSet<MuscleGroup>,
    /// Distinct equipment tags present
    pub equipment_types: BTreeSet<String>,
}
