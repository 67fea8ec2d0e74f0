// ABOUTME: Workout planning domain models: request, split, prescriptions, and plan
// ABOUTME: Training goal and experience enums with the experience-to-difficulty mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::exercise::{Difficulty, Exercise, MuscleGroup};
use super::nutrition::Gender;
use crate::constants::frequency::DEFAULT_SESSION_MINUTES;
use crate::errors::{AppError, AppResult};

/// Training goal, selects rep ranges and the progression strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    /// Low reps, long rest
    Strength,
    /// Moderate reps for muscle growth
    Hypertrophy,
    /// High reps, short rest
    Endurance,
    /// Metabolic work while in a deficit
    WeightLoss,
}

impl TrainingGoal {
    /// Every goal
    pub const ALL: [Self; 4] = [
        Self::Strength,
        Self::Hypertrophy,
        Self::Endurance,
        Self::WeightLoss,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Endurance => "endurance",
            Self::WeightLoss => "weight_loss",
        }
    }
}

impl FromStr for TrainingGoal {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == normalized)
            .ok_or_else(|| AppError::unsupported_goal(s))
    }
}

impl fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifter experience, bounds the exercise difficulty and scales volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Under a year of consistent training
    Beginner,
    /// One to three years
    Intermediate,
    /// Three years or more
    Advanced,
}

impl ExperienceLevel {
    /// Every level, least to most experienced
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Exercise difficulties a lifter at this level may be given
    #[must_use]
    pub const fn allowed_difficulties(&self) -> &'static [Difficulty] {
        match self {
            Self::Beginner => &[Difficulty::Beginner],
            Self::Intermediate => &[Difficulty::Beginner, Difficulty::Intermediate],
            Self::Advanced => &[
                Difficulty::Beginner,
                Difficulty::Intermediate,
                Difficulty::Advanced,
            ],
        }
    }

    /// Whether `difficulty` is in [`Self::allowed_difficulties`]
    #[must_use]
    pub fn allows(&self, difficulty: Difficulty) -> bool {
        self.allowed_difficulties().contains(&difficulty)
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| AppError::unsupported_experience(s))
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated input to the workout planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRequest {
    /// Training goal
    pub goal: TrainingGoal,
    /// Lifter experience
    pub experience: ExperienceLevel,
    /// Equipment tags the lifter owns
    pub equipment: BTreeSet<String>,
    /// Training days per week; only values with a split are accepted by the planner
    pub days_per_week: u32,
    /// Intended session length in minutes
    pub session_duration: u32,
    /// Volume-bias factor only
    pub gender: Gender,
}

impl WorkoutRequest {
    /// Create a request with the default session length and gender
    pub fn new<I, S>(
        goal: TrainingGoal,
        experience: ExperienceLevel,
        equipment: I,
        days_per_week: u32,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            goal,
            experience,
            equipment: normalize_equipment(equipment),
            days_per_week,
            session_duration: DEFAULT_SESSION_MINUTES,
            gender: Gender::default(),
        }
    }

    /// Override the session length
    #[must_use]
    pub const fn with_session_duration(mut self, minutes: u32) -> Self {
        self.session_duration = minutes;
        self
    }

    /// Override the volume-bias gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }
}

fn normalize_equipment<I, S>(equipment: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    equipment
        .into_iter()
        .map(|tag| tag.as_ref().trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Wire form of a workout request
///
/// `gender` and `session_duration` are optional and default to male / 60
/// minutes. `days_per_week` is not range-checked here so the planner reports
/// an unsupported frequency itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRequestParams {
    /// One of the [`TrainingGoal`] spellings
    pub goal: String,
    /// One of the [`ExperienceLevel`] spellings
    pub experience: String,
    /// Owned equipment tags
    pub equipment: Vec<String>,
    /// Training days per week
    pub days_per_week: i64,
    /// Session length in minutes
    #[serde(default)]
    pub session_duration: Option<i64>,
    /// `male` or `female`
    #[serde(default)]
    pub gender: Option<String>,
}

impl WorkoutRequestParams {
    /// Convert to a validated [`WorkoutRequest`]
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedGoal`, `UnsupportedExperience`, or
    /// `UnsupportedFrequency` for unknown table keys, and `InvalidParameter`
    /// for a bad gender or non-positive session length
    pub fn validate(&self) -> AppResult<WorkoutRequest> {
        let goal: TrainingGoal = self.goal.parse()?;
        let experience: ExperienceLevel = self.experience.parse()?;

        let days_per_week = u32::try_from(self.days_per_week).map_err(|_| {
            AppError::unsupported_frequency(
                self.days_per_week,
                &crate::constants::frequency::SUPPORTED_DAYS_PER_WEEK,
            )
        })?;

        let session_duration = match self.session_duration {
            None => DEFAULT_SESSION_MINUTES,
            Some(minutes) => u32::try_from(minutes)
                .ok()
                .filter(|minutes| *minutes > 0)
                .ok_or_else(|| {
                    AppError::invalid_parameter(
                        "session_duration",
                        minutes,
                        "must be a positive number of minutes",
                    )
                })?,
        };

        let gender = match &self.gender {
            None => Gender::default(),
            Some(value) => value.parse()?,
        };

        Ok(
            WorkoutRequest::new(goal, experience, &self.equipment, days_per_week)
                .with_session_duration(session_duration)
                .with_gender(gender),
        )
    }
}

/// One training day of a split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDay {
    /// Day label (e.g. "Upper A")
    pub name: String,
    /// Muscle groups trained, in exercise order
    pub muscle_groups: Vec<MuscleGroup>,
}

/// Weekly arrangement of training days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Split label (e.g. "Upper/Lower 4x/week")
    pub name: String,
    /// Short explanation of the split
    pub description: String,
    /// Training days in weekly order
    pub days: Vec<TrainingDay>,
}

/// An exercise with its volume parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescribedExercise {
    /// Catalog entry
    pub exercise: Exercise,
    /// Working sets, never below two
    pub sets: u32,
    /// Rep range "lo-hi" or a duration token for timed holds
    pub reps: String,
    /// Rest between sets
    pub rest_seconds: u32,
    /// Warm-up guidance
    pub warmup_sets: String,
    /// Target reps left in the tank
    pub reps_in_reserve: u8,
}

/// Prescribed exercises for one day of the split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWorkout {
    /// Day label, matches the split
    pub day: String,
    /// Exercises in order
    pub exercises: Vec<PrescribedExercise>,
    /// Muscle groups of the day that no available exercise covers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uncovered_muscle_groups: Vec<MuscleGroup>,
}

/// Week-to-week progression guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionStrategy {
    /// Progression model name
    pub method: String,
    /// How to increase load or reps
    pub increment: String,
    /// Deload cadence
    pub deload: String,
    /// Ordered coaching tips
    pub tips: Vec<String>,
}

/// Request parameters echoed back with the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanParameters {
    /// Training goal
    pub goal: TrainingGoal,
    /// Lifter experience
    pub experience: ExperienceLevel,
    /// Training days per week
    pub days_per_week: u32,
    /// Intended session length in minutes
    pub estimated_duration: u32,
    /// Volume-bias gender
    pub gender: Gender,
}

impl From<&WorkoutRequest> for PlanParameters {
    fn from(request: &WorkoutRequest) -> Self {
        Self {
            goal: request.goal,
            experience: request.experience,
            days_per_week: request.days_per_week,
            estimated_duration: request.session_duration,
            gender: request.gender,
        }
    }
}

/// Output of the workout planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Chosen split
    pub split: Split,
    /// One entry per split day, same order
    pub workouts: Vec<DayWorkout>,
    /// Progression guidance
    pub progression: ProgressionStrategy,
    /// Echoed request parameters
    pub parameters: PlanParameters,
}

impl WorkoutPlan {
    /// Every prescribed exercise across the week
    pub fn prescriptions(&self) -> impl Iterator<Item = &PrescribedExercise> {
        self.workouts.iter().flat_map(|day| day.exercises.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn params() -> WorkoutRequestParams {
        WorkoutRequestParams {
            goal: "hypertrophy".into(),
            experience: "intermediate".into(),
            equipment: vec!["Barbell".into(), " dumbbell ".into(), String::new()],
            days_per_week: 4,
            session_duration: None,
            gender: None,
        }
    }

    #[test]
    fn test_defaults_applied() {
        let request = params().validate().unwrap();

        assert_eq!(request.session_duration, 60);
        assert_eq!(request.gender, Gender::Male);
        assert_eq!(
            request.equipment.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["barbell", "dumbbell"]
        );
    }

    #[test]
    fn test_unknown_goal_and_experience_codes() {
        let mut bad_goal = params();
        bad_goal.goal = "yoga".into();
        assert_eq!(bad_goal.validate().unwrap_err().code, ErrorCode::UnsupportedGoal);

        let mut bad_experience = params();
        bad_experience.experience = "elite".into();
        assert_eq!(
            bad_experience.validate().unwrap_err().code,
            ErrorCode::UnsupportedExperience
        );
    }

    #[test]
    fn test_negative_days_is_unsupported_frequency() {
        let mut params = params();
        params.days_per_week = -1;

        let error = params.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::UnsupportedFrequency);
        assert_eq!(error.context.value.as_deref(), Some("-1"));
    }

    #[test]
    fn test_zero_session_duration_rejected() {
        let mut params = params();
        params.session_duration = Some(0);

        let error = params.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidParameter);
        assert_eq!(error.context.field.as_deref(), Some("session_duration"));
    }

    #[test]
    fn test_experience_allowed_difficulties_nest() {
        for pair in ExperienceLevel::ALL.windows(2) {
            for difficulty in pair[0].allowed_difficulties() {
                assert!(pair[1].allows(*difficulty));
            }
        }
        assert!(!ExperienceLevel::Beginner.allows(Difficulty::Intermediate));
    }

    #[test]
    fn test_params_deserialize_without_optional_fields() {
        let params: WorkoutRequestParams = serde_json::from_value(serde_json::json!({
            "goal": "strength",
            "experience": "beginner",
            "equipment": ["barbell"],
            "days_per_week": 3
        }))
        .unwrap();

        assert!(params.gender.is_none());
        assert!(params.validate().is_ok());
    }
}
