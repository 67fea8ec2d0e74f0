// ABOUTME: Core types and constants for the FitMentor engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

#![deny(unsafe_code)]

//! # `FitMentor` Core
//!
//! Foundation crate providing shared types and constants for the `FitMentor`
//! nutrition and training engines. It holds no logic beyond input validation,
//! so it changes rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Profiles, exercises, requests, and result records
//! - **constants**: Energy densities, unit conversions, prescription tokens

/// Unified error handling system with stable error codes
pub mod errors;

/// Domain models for both engines
pub mod models;

/// Physiological and training constants
pub mod constants;
