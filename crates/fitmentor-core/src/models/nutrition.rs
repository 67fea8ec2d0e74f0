// ABOUTME: Nutrition domain models for the energy and macronutrient engine
// ABOUTME: User profile, activity and goal enums, and the energy result records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_positive, AppError, AppResult};

/// Biological sex used by the BMR equation and as a training-volume bias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal BMR constant)
    #[default]
    Male,
    /// Female (-161 kcal BMR constant)
    Female,
}

impl Gender {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(AppError::invalid_parameter(
                "gender",
                s,
                "expected one of: male, female",
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Habitual activity level, selects the TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// Every level, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Levels that get the extra recovery and fueling recommendations
    #[must_use]
    pub const fn is_highly_active(&self) -> bool {
        matches!(self, Self::Active | Self::VeryActive)
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_parameter(
                    "activity_level",
                    s,
                    "expected one of: sedentary, light, moderate, active, very_active",
                )
            })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body-weight goal, selects the calorie adjustment and protein policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl NutritionGoal {
    /// Every goal
    pub const ALL: [Self; 3] = [Self::Lose, Self::Maintain, Self::Gain];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl FromStr for NutritionGoal {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_parameter("goal", s, "expected one of: lose, maintain, gain")
            })
    }
}

impl fmt::Display for NutritionGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated input to the energy engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Biological sex for the BMR constant
    pub gender: Gender,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Body-weight goal
    pub goal: NutritionGoal,
}

impl UserProfile {
    /// Check the numeric preconditions of the energy engine
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if age is zero or height/weight are not
    /// finite positive numbers
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::invalid_parameter(
                "age",
                self.age,
                "age must be a positive number of years",
            ));
        }
        ensure_positive("height", self.height_cm)?;
        ensure_positive("weight", self.weight_kg)
    }
}

/// Wire form of a calorie request, with enums still as strings
///
/// Every field is required; missing fields are rejected by the
/// deserializer before validation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileParams {
    /// Age in years
    pub age: i64,
    /// Height in centimeters
    pub height: f64,
    /// Body weight in kilograms
    pub weight: f64,
    /// `male` or `female`
    pub gender: String,
    /// One of the [`ActivityLevel`] spellings
    pub activity_level: String,
    /// One of the [`NutritionGoal`] spellings
    pub goal: String,
}

impl UserProfileParams {
    /// Convert to a validated [`UserProfile`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field
    pub fn validate(&self) -> AppResult<UserProfile> {
        let age = u32::try_from(self.age)
            .ok()
            .filter(|age| *age > 0)
            .ok_or_else(|| {
                AppError::invalid_parameter(
                    "age",
                    self.age,
                    "age must be a positive number of years",
                )
            })?;

        let profile = UserProfile {
            age,
            height_cm: self.height,
            weight_kg: self.weight,
            gender: self.gender.parse()?,
            activity_level: self.activity_level.parse()?,
            goal: self.goal.parse()?,
        };
        profile.validate()?;
        Ok(profile)
    }
}

/// Grams, calories, and share of the calorie target for one macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBand {
    /// Daily grams
    pub grams: f64,
    /// Daily kilocalories
    pub calories: f64,
    /// Share of the calorie target, rounded to the nearest percent
    pub percentage: u8,
}

/// Protein / carbohydrate / fat split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Protein band
    pub protein: MacroBand,
    /// Carbohydrate band
    pub carbs: MacroBand,
    /// Fat band
    pub fats: MacroBand,
}

impl MacroBreakdown {
    /// Sum of the three calorie values
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.protein.calories + self.carbs.calories + self.fats.calories
    }

    /// Sum of the three rounded percentages
    #[must_use]
    pub fn total_percentage(&self) -> u32 {
        u32::from(self.protein.percentage)
            + u32::from(self.carbs.percentage)
            + u32::from(self.fats.percentage)
    }
}

/// Output of the energy engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub target_calories: f64,
    /// Macronutrient split of the target
    pub macros: MacroBreakdown,
    /// Ordered guidance strings
    pub recommendations: Vec<String>,
}
