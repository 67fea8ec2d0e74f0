// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors
// ABOUTME: Re-exports command modules for fitmentor-cli
// ABOUTME: Provides access to the calories, workout, exercises, and demo commands

pub mod calories;
pub mod demo;
pub mod exercises;
pub mod workout;
