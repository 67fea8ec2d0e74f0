// ABOUTME: Nutrition policy configuration for the energy and macronutrient engine
// ABOUTME: Configures BMR coefficients, activity factors, goal adjustments, and macro policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

//! Nutrition Policy Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use fitmentor_core::models::{ActivityLevel, Gender, NutritionGoal};
use serde::{Deserialize, Serialize};

/// Nutrition policy configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) equation coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment per body-weight goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein and fat policy
    pub macronutrients: MacronutrientConfig,
}

/// Mifflin-St Jeor equation coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
/// energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl BmrConfig {
    /// Sex-specific constant term
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training or physical job): 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    /// Factors in ascending activity order
    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.very_active,
        ]
    }
}

/// Daily calorie adjustment added to TDEE per goal (kcal)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Deficit for fat loss, roughly 1 lb/week
    pub lose: f64,
    /// Maintenance
    pub maintain: f64,
    /// Surplus for lean gain
    pub gain: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose: -500.0,
            maintain: 0.0,
            gain: 300.0,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Adjustment for a goal
    #[must_use]
    pub const fn adjustment(&self, goal: NutritionGoal) -> f64 {
        match goal {
            NutritionGoal::Lose => self.lose,
            NutritionGoal::Maintain => self.maintain,
            NutritionGoal::Gain => self.gain,
        }
    }
}

/// Protein and fat policy for the macro split
///
/// Protein is prescribed per pound of body weight; fat is a fixed share of
/// the calorie target and carbohydrates take the remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein (g/lb) in a deficit: 1.0
    pub protein_g_per_lb_lose: f64,
    /// Protein (g/lb) at maintenance: 1.0
    pub protein_g_per_lb_maintain: f64,
    /// Protein (g/lb) in a surplus: 1.0
    pub protein_g_per_lb_gain: f64,
    /// Fat share of the calorie target, never below 0.25
    pub fat_fraction: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_g_per_lb_lose: 1.0,
            protein_g_per_lb_maintain: 1.0,
            protein_g_per_lb_gain: 1.0,
            fat_fraction: 0.25,
        }
    }
}

impl MacronutrientConfig {
    /// Protein policy for a goal (g/lb)
    #[must_use]
    pub const fn protein_g_per_lb(&self, goal: NutritionGoal) -> f64 {
        match goal {
            NutritionGoal::Lose => self.protein_g_per_lb_lose,
            NutritionGoal::Maintain => self.protein_g_per_lb_maintain,
            NutritionGoal::Gain => self.protein_g_per_lb_gain,
        }
    }
}
