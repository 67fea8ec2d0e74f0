// ABOUTME: Main library entry point for the FitMentor nutrition and training engine
// ABOUTME: Re-exports the core and intelligence crates and provides the boundary facade and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

#![deny(unsafe_code)]

//! # `FitMentor`
//!
//! Personalized nutrition targets and resistance-training plans from a
//! small set of user parameters. Both engines are rule-based and
//! deterministic.
//!
//! ## Architecture
//!
//! - **`fitmentor-core`**: errors, domain models, constants
//! - **`fitmentor-intelligence`**: policy configuration, energy engine,
//!   exercise catalog, workout planner
//! - **this crate**: the [`engine::FitMentorEngine`] facade, logging setup,
//!   and the `fitmentor-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use fitmentor::engine::FitMentorEngine;
//! use fitmentor::models::UserProfileParams;
//!
//! let engine = FitMentorEngine::default();
//! let result = engine
//!     .compute_energy(&UserProfileParams {
//!         age: 25,
//!         height: 175.0,
//!         weight: 75.0,
//!         gender: "male".into(),
//!         activity_level: "moderate".into(),
//!         goal: "maintain".into(),
//!     })
//!     .unwrap();
//!
//! assert!((result.bmr - 1723.75).abs() < 1e-9);
//! ```

/// Boundary facade over both engines
pub mod engine;

/// Structured logging setup
pub mod logging;

pub use fitmentor_core::{constants, errors, models};
pub use fitmentor_intelligence::{catalog, config, nutrition_calculator, workout_planner};

pub use engine::FitMentorEngine;
