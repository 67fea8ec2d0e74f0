// ABOUTME: Physiological and training constants used by the FitMentor engines
// ABOUTME: Energy densities, unit conversions, and fixed prescription tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

//! Fixed constants. Values that are policy rather than physics live in the
//! intelligence crate's configuration instead.

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Unit conversions
pub mod units {
    /// Pounds per kilogram
    pub const LBS_PER_KG: f64 = 2.204_62;
}

/// Fixed tokens used when prescribing exercises
pub mod prescription {
    /// Rep token for timed holds (planks and similar)
    pub const DURATION_REPS: &str = "30-60s";

    /// Warm-up guidance for compound lifts
    pub const WARMUP_COMPOUND: &str = "1-2 sets";

    /// Warm-up guidance for isolation work
    pub const WARMUP_OPTIONAL: &str = "Optional";

    /// Warm-up guidance for core work
    pub const WARMUP_NOT_NEEDED: &str = "Not needed";
}

/// Supported weekly training frequencies
pub mod frequency {
    /// Days-per-week values with a split table entry
    pub const SUPPORTED_DAYS_PER_WEEK: [u32; 4] = [3, 4, 5, 6];

    /// Session length assumed when the caller does not supply one (minutes)
    pub const DEFAULT_SESSION_MINUTES: u32 = 60;
}
