// ABOUTME: Boundary facade composing the energy engine, workout planner, and catalog
// ABOUTME: Validates wire parameters and dispatches computeEnergy, generatePlan, and listCatalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

use std::sync::Arc;

use fitmentor_core::errors::AppResult;
use fitmentor_core::models::{
    CatalogListing, EnergyResult, UserProfileParams, WorkoutPlan, WorkoutRequestParams,
};
use fitmentor_intelligence::{
    compute_energy, ExerciseCatalog, IntelligenceConfig, WorkoutPlanner,
};
use tracing::debug;

/// The three request/response operations behind one handle
///
/// The two engines never call each other; this type only holds their shared
/// configuration and the catalog so a front end can serve both.
#[derive(Debug, Clone)]
pub struct FitMentorEngine {
    config: IntelligenceConfig,
    planner: WorkoutPlanner,
}

impl FitMentorEngine {
    /// Create an engine over `catalog` with the given policy
    #[must_use]
    pub fn new(config: IntelligenceConfig, catalog: Arc<ExerciseCatalog>) -> Self {
        let planner = WorkoutPlanner::new(catalog, config.workout.clone());
        Self { config, planner }
    }

    /// Engine over the built-in catalog with policy loaded from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if an override is malformed or out of range
    pub fn from_env() -> AppResult<Self> {
        let config = IntelligenceConfig::load()?;
        Ok(Self::new(config, Arc::new(ExerciseCatalog::builtin())))
    }

    /// Policy in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Catalog plans are drawn from
    #[must_use]
    pub fn catalog(&self) -> &ExerciseCatalog {
        self.planner.catalog()
    }

    /// Validate a calorie request and compute its energy targets
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for malformed input and `MacroInfeasible`
    /// when the target cannot cover protein and fat
    pub fn compute_energy(&self, params: &UserProfileParams) -> AppResult<EnergyResult> {
        let profile = params.validate()?;
        debug!(age = profile.age, goal = %profile.goal, "Computing energy targets");
        compute_energy(&profile, &self.config.nutrition)
    }

    /// Validate a workout request and generate its plan
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedGoal`, `UnsupportedExperience`,
    /// `UnsupportedFrequency`, or `InvalidParameter`
    pub fn generate_plan(&self, params: &WorkoutRequestParams) -> AppResult<WorkoutPlan> {
        let request = params.validate()?;
        self.planner.generate_plan(&request)
    }

    /// Full catalog listing
    #[must_use]
    pub fn list_catalog(&self) -> CatalogListing {
        self.catalog().listing()
    }
}

impl Default for FitMentorEngine {
    fn default() -> Self {
        Self::new(
            IntelligenceConfig::default(),
            Arc::new(ExerciseCatalog::builtin()),
        )
    }
}
