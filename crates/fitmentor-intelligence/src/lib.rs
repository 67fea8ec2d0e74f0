// ABOUTME: Rule-based nutrition and workout planning engines for FitMentor
// ABOUTME: Energy/macro calculator, exercise catalog, workout planner, and policy configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

#![deny(unsafe_code)]

//! # `FitMentor` Intelligence
//!
//! Deterministic engines that turn a handful of user parameters into
//! nutrition targets and weekly training plans. Nothing here is learned:
//! every output is a pure function of the input and the policy tables in
//! [`config`].
//!
//! - [`nutrition_calculator`]: BMR, TDEE, calorie target, macros, guidance
//! - [`catalog`]: the static exercise table
//! - [`workout_planner`]: split, filtering, selection, volume, progression

/// Policy configuration with environment overrides
pub mod config;

/// Static exercise catalog
pub mod catalog;

/// Energy and macronutrient engine
pub mod nutrition_calculator;

/// Workout plan engine
pub mod workout_planner;

pub use catalog::ExerciseCatalog;
pub use config::{ConfigError, IntelligenceConfig, NutritionConfig, WorkoutConfig};
pub use nutrition_calculator::compute_energy;
pub use workout_planner::WorkoutPlanner;
