// ABOUTME: Energy and macronutrient calculation using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, goal-adjusted calorie target, macro split, and guidance strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

//! Nutrition Calculator Module
//!
//! Deterministic energy and macronutrient targets from a [`UserProfile`].
//! Every step is exposed as its own function so callers and tests can check
//! intermediate values; [`compute_energy`] chains them.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use fitmentor_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use fitmentor_core::constants::units::LBS_PER_KG;
use fitmentor_core::errors::{ensure_positive, AppError, AppResult};
use fitmentor_core::models::{
    ActivityLevel, EnergyResult, Gender, MacroBand, MacroBreakdown, NutritionGoal, UserProfile,
};
use tracing::{debug, warn};

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig, NutritionConfig,
};

/// Guidance appended for every profile, in order
const UNIVERSAL_RECOMMENDATIONS: [&str; 3] = [
    "Spread protein across 3-4 meals for optimal synthesis",
    "Stay hydrated: 0.5-1 oz water per lb bodyweight daily",
    "Prioritize whole foods: vegetables, fruits, lean proteins, whole grains, healthy fats",
];

/// Guidance appended for active and very active profiles
const HIGH_ACTIVITY_RECOMMENDATIONS: [&str; 2] = [
    "Ensure adequate carbs for recovery and performance",
    "Post-workout meal with protein and carbs within 2 hours",
];

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// No lower bound is applied to the result.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `gender` - Male or Female
/// * `config` - BMR configuration with formula coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `InvalidParameter` if weight or height is not a finite positive
/// number, or age is zero
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    ensure_positive("weight", weight_kg)?;
    ensure_positive("height", height_cm)?;
    if age == 0 {
        return Err(AppError::invalid_parameter(
            "age",
            age,
            "age must be a positive number of years",
        ));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    Ok(weight_component + height_component + age_component + config.gender_constant(gender))
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// # Errors
///
/// Returns `InvalidParameter` if BMR is not positive, which only happens for
/// anthropometrics outside the equation's validated population
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(AppError::invalid_parameter(
            "bmr",
            bmr,
            "profile yields a non-positive basal metabolic rate",
        ));
    }

    Ok(bmr * config.factor(activity_level))
}

/// Apply the goal's calorie adjustment to TDEE
#[must_use]
pub fn calculate_target_calories(
    tdee: f64,
    goal: NutritionGoal,
    config: &GoalAdjustmentConfig,
) -> f64 {
    tdee + config.adjustment(goal)
}

/// Split a calorie target into protein, fat, and carbohydrate bands
///
/// - Protein (g) = `weight_kg` x 2.20462 x protein policy (g/lb)
/// - Fat (kcal) = target x `fat_fraction`
/// - Carbs (kcal) = target - protein kcal - fat kcal
///
/// Percentages are each band's share of the target rounded to the nearest
/// integer, so their sum may differ from 100 by up to 2.
///
/// # Errors
///
/// Returns `MacroInfeasible` when the protein and fat allocations exceed the
/// target, and `InvalidParameter` for a non-positive weight
pub fn calculate_macros(
    target_calories: f64,
    weight_kg: f64,
    goal: NutritionGoal,
    config: &MacronutrientConfig,
) -> AppResult<MacroBreakdown> {
    ensure_positive("weight", weight_kg)?;

    let protein_grams = weight_kg * LBS_PER_KG * config.protein_g_per_lb(goal);
    let protein_calories = protein_grams * KCAL_PER_GRAM_PROTEIN;

    let fat_calories = target_calories * config.fat_fraction;
    let carb_calories = target_calories - protein_calories - fat_calories;

    if !target_calories.is_finite() || target_calories <= 0.0 || carb_calories < 0.0 {
        warn!(
            target_calories,
            protein_calories, fat_calories, "Calorie target cannot cover protein and fat"
        );
        return Err(AppError::macro_infeasible(
            target_calories,
            protein_calories,
            fat_calories,
        ));
    }

    debug!(
        protein_calories,
        fat_calories, carb_calories, "Calculated macronutrient split"
    );

    Ok(MacroBreakdown {
        protein: band(protein_grams, protein_calories, target_calories),
        carbs: band(
            carb_calories / KCAL_PER_GRAM_CARBS,
            carb_calories,
            target_calories,
        ),
        fats: band(
            fat_calories / KCAL_PER_GRAM_FAT,
            fat_calories,
            target_calories,
        ),
    })
}

fn band(grams: f64, calories: f64, target_calories: f64) -> MacroBand {
    let percentage = (calories / target_calories * 100.0).round().clamp(0.0, 100.0) as u8;
    MacroBand {
        grams,
        calories,
        percentage,
    }
}

/// Build the ordered guidance list
///
/// Four goal-specific strings (the first quotes the calorie target, the
/// second the protein policy), two more for active and very active profiles,
/// then three strings shared by every profile.
#[must_use]
pub fn generate_recommendations(
    goal: NutritionGoal,
    activity_level: ActivityLevel,
    target_calories: f64,
    config: &MacronutrientConfig,
) -> Vec<String> {
    let target = target_calories.round();
    let protein = config.protein_g_per_lb(goal);

    let mut recommendations = match goal {
        NutritionGoal::Lose => vec![
            format!("Aim for {target:.0} calories per day for sustainable 1 lb/week weight loss"),
            format!("Protein at {protein:.1}g per lb bodyweight to preserve muscle"),
            "Track weight weekly and adjust calories if progress stalls for 2+ weeks".to_owned(),
            "Include 2-3 strength training sessions per week".to_owned(),
        ],
        NutritionGoal::Maintain => vec![
            format!("Maintain {target:.0} calories per day"),
            format!("Protein at {protein:.1}g per lb bodyweight for muscle maintenance"),
            "Continue strength training to maintain or build muscle".to_owned(),
            "Monitor weight weekly and adjust if trending".to_owned(),
        ],
        NutritionGoal::Gain => vec![
            format!("Aim for {target:.0} calories per day for lean muscle gain"),
            format!("Protein at {protein:.1}g per lb bodyweight to support muscle growth"),
            "Time carbs around workouts for optimal performance".to_owned(),
            "Gain 0.5-1 lb per week; adjust if gaining faster".to_owned(),
        ],
    };

    if activity_level.is_highly_active() {
        recommendations.extend(HIGH_ACTIVITY_RECOMMENDATIONS.iter().map(ToString::to_string));
    }
    recommendations.extend(UNIVERSAL_RECOMMENDATIONS.iter().map(ToString::to_string));

    recommendations
}

/// Compute energy expenditure, calorie target, macros, and guidance
///
/// # Errors
///
/// Returns `InvalidParameter` for non-positive anthropometrics and
/// `MacroInfeasible` when the target cannot cover protein and fat
pub fn compute_energy(profile: &UserProfile, config: &NutritionConfig) -> AppResult<EnergyResult> {
    profile.validate()?;

    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors)?;
    let target_calories = calculate_target_calories(tdee, profile.goal, &config.goal_adjustments);

    debug!(
        bmr,
        tdee,
        target_calories,
        activity_level = %profile.activity_level,
        goal = %profile.goal,
        "Calculated energy expenditure"
    );

    let macros = calculate_macros(
        target_calories,
        profile.weight_kg,
        profile.goal,
        &config.macronutrients,
    )?;
    let recommendations = generate_recommendations(
        profile.goal,
        profile.activity_level,
        target_calories,
        &config.macronutrients,
    );

    Ok(EnergyResult {
        bmr,
        tdee,
        target_calories,
        macros,
        recommendations,
    })
}
