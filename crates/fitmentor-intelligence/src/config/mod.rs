// ABOUTME: Policy configuration for the nutrition and workout engines
// ABOUTME: Loads defaults, applies FITMENTOR_* environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

//! Intelligence Configuration Module
//!
//! Every policy constant used by the engines lives here so it can be tuned
//! without touching the algorithms. Configuration is passed explicitly to the
//! engines; there is no process-wide instance.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, activity factors, goal adjustments, macro policy
//! - `workout` - Rep ranges, RIR, volume scaling, sex-specific bias
//! - `error` - Configuration error type

pub mod error;
pub mod nutrition;
pub mod workout;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig, NutritionConfig,
};
pub use workout::{
    MuscleGroupBias, RepRange, RepRangesConfig, RepsInReserveConfig, VolumeConfig, WorkoutConfig,
};

use std::env::{self, VarError};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main policy configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Energy and macronutrient policy
    pub nutrition: NutritionConfig,
    /// Training volume and prescription policy
    pub workout: WorkoutConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Apply environment variable overrides
        config = config.apply_env_overrides()?;

        // Validate the final configuration
        config.validate()?;

        debug!(
            fat_fraction = config.nutrition.macronutrients.fat_fraction,
            min_sets = config.workout.volume.min_sets,
            "Loaded intelligence configuration"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any policy value is out of range or misordered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_nutrition()?;
        self.validate_workout()
    }

    /// Validate nutrition configuration
    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        // BMR coefficients
        let coefficients = [
            nutr.bmr.msj_weight_coef,
            nutr.bmr.msj_height_coef,
            nutr.bmr.msj_age_coef,
        ];
        if coefficients.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "BMR coefficients must be finite",
            ));
        }
        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if nutr.bmr.msj_age_coef >= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must be negative",
            ));
        }

        // Activity factors are within 1.0-2.5 and ascending
        let factors = nutr.activity_factors.as_array();
        if factors.iter().any(|factor| !(1.0..=2.5).contains(factor)) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        // Goal adjustments
        let adjustments = &nutr.goal_adjustments;
        if [adjustments.lose, adjustments.maintain, adjustments.gain]
            .iter()
            .any(|value| !value.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange(
                "goal adjustments must be finite",
            ));
        }
        if adjustments.lose >= 0.0 || adjustments.gain < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "lose adjustment must be negative and gain adjustment non-negative",
            ));
        }
        if adjustments.maintain <= adjustments.lose || adjustments.maintain > adjustments.gain {
            return Err(ConfigError::InvalidRange(
                "goal adjustments must satisfy lose < maintain <= gain",
            ));
        }

        // Protein policy (0.5-1.5 g/lb)
        let macros = &nutr.macronutrients;
        let protein = [
            macros.protein_g_per_lb_lose,
            macros.protein_g_per_lb_maintain,
            macros.protein_g_per_lb_gain,
        ];
        if protein.iter().any(|value| !(0.5..=1.5).contains(value)) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein policy must be between 0.5 and 1.5 g/lb",
            ));
        }

        // Fat share (25-50% of target)
        if !(0.25..=0.5).contains(&macros.fat_fraction) {
            return Err(ConfigError::ValueOutOfRange(
                "fat_fraction must be between 0.25 and 0.5",
            ));
        }

        Ok(())
    }

    /// Validate workout configuration
    fn validate_workout(&self) -> Result<(), ConfigError> {
        let workout = &self.workout;

        if workout
            .rep_ranges
            .as_array()
            .iter()
            .any(|range| range.low == 0 || range.low >= range.high)
        {
            return Err(ConfigError::InvalidRange(
                "rep ranges must satisfy 0 < low < high",
            ));
        }

        let volume = &workout.volume;
        let multipliers = [
            volume.beginner_multiplier,
            volume.intermediate_multiplier,
            volume.advanced_multiplier,
        ];
        if multipliers.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "volume multipliers must be finite",
            ));
        }
        if volume.beginner_multiplier <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "volume multipliers must be positive",
            ));
        }
        if volume.beginner_multiplier > volume.intermediate_multiplier
            || volume.intermediate_multiplier > volume.advanced_multiplier
        {
            return Err(ConfigError::InvalidRange(
                "volume multipliers must not decrease with experience",
            ));
        }
        if volume.min_sets < 2 {
            return Err(ConfigError::ValueOutOfRange("min_sets must be >= 2"));
        }
        if volume.secondary_sets == 0 || volume.primary_sets < volume.secondary_sets {
            return Err(ConfigError::InvalidRange(
                "primary_sets must be >= secondary_sets > 0",
            ));
        }

        let bias = &workout.female_bias;
        let biases = [
            bias.chest,
            bias.back,
            bias.legs,
            bias.shoulders,
            bias.biceps,
            bias.triceps,
            bias.core,
        ];
        if biases.iter().any(|value| *value <= 0.0 || !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "muscle group bias must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(error @ VarError::NotUnicode(_)) => return Err(ConfigError::EnvVar(error)),
        };
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let factors = &mut self.nutrition.activity_factors;
        Self::apply_env_var("FITMENTOR_ACTIVITY_FACTOR_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("FITMENTOR_ACTIVITY_FACTOR_LIGHT", &mut factors.light)?;
        Self::apply_env_var("FITMENTOR_ACTIVITY_FACTOR_MODERATE", &mut factors.moderate)?;
        Self::apply_env_var("FITMENTOR_ACTIVITY_FACTOR_ACTIVE", &mut factors.active)?;
        Self::apply_env_var(
            "FITMENTOR_ACTIVITY_FACTOR_VERY_ACTIVE",
            &mut factors.very_active,
        )?;

        let adjustments = &mut self.nutrition.goal_adjustments;
        Self::apply_env_var("FITMENTOR_GOAL_ADJUSTMENT_LOSE", &mut adjustments.lose)?;
        Self::apply_env_var("FITMENTOR_GOAL_ADJUSTMENT_MAINTAIN", &mut adjustments.maintain)?;
        Self::apply_env_var("FITMENTOR_GOAL_ADJUSTMENT_GAIN", &mut adjustments.gain)?;

        // Macronutrient policy
        let macros = &mut self.nutrition.macronutrients;
        Self::apply_env_var(
            "FITMENTOR_PROTEIN_G_PER_LB_LOSE",
            &mut macros.protein_g_per_lb_lose,
        )?;
        Self::apply_env_var(
            "FITMENTOR_PROTEIN_G_PER_LB_MAINTAIN",
            &mut macros.protein_g_per_lb_maintain,
        )?;
        Self::apply_env_var(
            "FITMENTOR_PROTEIN_G_PER_LB_GAIN",
            &mut macros.protein_g_per_lb_gain,
        )?;
        Self::apply_env_var("FITMENTOR_FAT_FRACTION", &mut macros.fat_fraction)?;

        // Training volume
        let volume = &mut self.workout.volume;
        Self::apply_env_var("FITMENTOR_VOLUME_BEGINNER", &mut volume.beginner_multiplier)?;
        Self::apply_env_var(
            "FITMENTOR_VOLUME_INTERMEDIATE",
            &mut volume.intermediate_multiplier,
        )?;
        Self::apply_env_var("FITMENTOR_VOLUME_ADVANCED", &mut volume.advanced_multiplier)?;
        Self::apply_env_var("FITMENTOR_MIN_SETS", &mut volume.min_sets)?;

        Ok(self)
    }
}
