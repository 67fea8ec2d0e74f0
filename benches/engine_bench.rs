// ABOUTME: Criterion benchmarks for the energy and workout engines
// ABOUTME: Measures calorie target computation, catalog filtering, and full plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

//! Criterion benchmarks for the `FitMentor` engines.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fitmentor::catalog::ExerciseCatalog;
use fitmentor::config::IntelligenceConfig;
use fitmentor::models::{
    ActivityLevel, ExperienceLevel, Gender, NutritionGoal, TrainingGoal, UserProfile,
    WorkoutRequest,
};
use fitmentor::nutrition_calculator::compute_energy;
use fitmentor::workout_planner::{filter_exercises, WorkoutPlanner};

const FULL_GYM: [&str; 8] = [
    "barbell",
    "bench",
    "bodyweight",
    "cable",
    "dumbbell",
    "machine",
    "pullup_bar",
    "rack",
];

/// Benchmark energy computation for every activity level
fn bench_compute_energy(c: &mut Criterion) {
    let config = IntelligenceConfig::default().nutrition;
    let mut group = c.benchmark_group("compute_energy");

    for level in ActivityLevel::ALL {
        let profile = UserProfile {
            age: 25,
            height_cm: 175.0,
            weight_kg: 75.0,
            gender: Gender::Male,
            activity_level: level,
            goal: NutritionGoal::Maintain,
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(level.as_str()),
            &profile,
            |b, profile| b.iter(|| compute_energy(black_box(profile), &config)),
        );
    }

    group.finish();
}

/// Benchmark equipment and experience filtering over the built-in catalog
fn bench_filter_exercises(c: &mut Criterion) {
    let catalog = ExerciseCatalog::builtin();
    let equipment: BTreeSet<String> = FULL_GYM.iter().map(|tag| (*tag).to_owned()).collect();

    c.bench_function("filter_exercises_full_gym", |b| {
        b.iter(|| {
            filter_exercises(
                black_box(catalog.all()),
                black_box(&equipment),
                ExperienceLevel::Intermediate,
            )
        });
    });
}

/// Benchmark plan generation for each supported frequency
fn bench_generate_plan(c: &mut Criterion) {
    let planner = WorkoutPlanner::with_defaults();
    let mut group = c.benchmark_group("generate_plan");

    for days in [3, 4, 5, 6] {
        let request = WorkoutRequest::new(
            TrainingGoal::Hypertrophy,
            ExperienceLevel::Advanced,
            FULL_GYM,
            days,
        );
        group.bench_with_input(BenchmarkId::from_parameter(days), &request, |b, request| {
            b.iter(|| planner.generate_plan(black_box(request)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_energy,
    bench_filter_exercises,
    bench_generate_plan
);
criterion_main!(benches);
