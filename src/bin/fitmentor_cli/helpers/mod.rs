// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors
// ABOUTME: Re-exports helper modules for fitmentor-cli
// ABOUTME: Provides access to output formatting utilities

pub mod display;
