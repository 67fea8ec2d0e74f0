// ABOUTME: Integration tests for the workout plan engine
// ABOUTME: Covers split selection, equipment and experience filtering, set volume, and progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::BTreeSet;

use fitmentor::catalog::ExerciseCatalog;
use fitmentor::errors::ErrorCode;
use fitmentor::models::{
    Difficulty, ExperienceLevel, Gender, MuscleGroup, TrainingGoal, WorkoutPlan, WorkoutRequest,
};
use fitmentor::workout_planner::{filter_exercises, select_split, WorkoutPlanner};

mod common;

use common::{FULL_GYM, HOME_GYM};

fn planner() -> WorkoutPlanner {
    common::init_test_logging();
    WorkoutPlanner::with_defaults()
}

fn exercise_ids(plan: &WorkoutPlan, day: usize) -> Vec<u32> {
    plan.workouts[day]
        .exercises
        .iter()
        .map(|item| item.exercise.id)
        .collect()
}

fn tags(equipment: &[&str]) -> BTreeSet<String> {
    equipment.iter().map(|tag| (*tag).to_owned()).collect()
}

// ============================================================================
// SPLIT SELECTION
// ============================================================================

#[test]
fn test_split_day_names_per_frequency() {
    let expected: [(u32, &[&str]); 4] = [
        (3, &["Full Body A", "Full Body B", "Full Body C"]),
        (4, &["Upper A", "Lower A", "Upper B", "Lower B"]),
        (5, &["Push A", "Pull A", "Legs A", "Push B", "Pull B"]),
        (
            6,
            &["Push A", "Pull A", "Legs A", "Push B", "Pull B", "Legs B"],
        ),
    ];

    for (days, names) in expected {
        let split = select_split(days).unwrap();
        let actual: Vec<&str> = split.days.iter().map(|day| day.name.as_str()).collect();
        assert_eq!(actual, names, "split for {days} days");
    }
}

#[test]
fn test_split_ignores_goal_and_experience() {
    let planner = planner();

    let names: BTreeSet<String> = TrainingGoal::ALL
        .into_iter()
        .flat_map(|goal| ExperienceLevel::ALL.map(move |experience| (goal, experience)))
        .map(|(goal, experience)| {
            let request = WorkoutRequest::new(goal, experience, FULL_GYM, 5);
            planner.generate_plan(&request).unwrap().split.name
        })
        .collect();

    assert_eq!(names.len(), 1);
    assert!(names.contains("Push/Pull/Legs 5x/week"));
}

#[test]
fn test_unsupported_frequencies() {
    let planner = planner();

    for days in [0, 1, 2, 7, 14] {
        let request = WorkoutRequest::new(
            TrainingGoal::Strength,
            ExperienceLevel::Beginner,
            FULL_GYM,
            days,
        );
        let error = planner.generate_plan(&request).unwrap_err();
        assert_eq!(error.code, ErrorCode::UnsupportedFrequency);
        assert_eq!(error.context.field.as_deref(), Some("days_per_week"));
    }
}

// ============================================================================
// FILTERING
// ============================================================================

#[test]
fn test_more_equipment_never_removes_exercises() {
    let catalog = ExerciseCatalog::builtin();

    for experience in ExperienceLevel::ALL {
        for end in 1..=FULL_GYM.len() {
            let smaller: BTreeSet<u32> =
                filter_exercises(catalog.all(), &tags(&FULL_GYM[..end - 1]), experience)
                    .into_iter()
                    .map(|exercise| exercise.id)
                    .collect();
            let larger: BTreeSet<u32> =
                filter_exercises(catalog.all(), &tags(&FULL_GYM[..end]), experience)
                    .into_iter()
                    .map(|exercise| exercise.id)
                    .collect();
            assert!(smaller.is_subset(&larger));
        }
    }
}

#[test]
fn test_more_experience_never_removes_exercises() {
    let catalog = ExerciseCatalog::builtin();
    let equipment = tags(&FULL_GYM);

    let counts: Vec<usize> = ExperienceLevel::ALL
        .into_iter()
        .map(|experience| filter_exercises(catalog.all(), &equipment, experience).len())
        .collect();

    assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(counts[2], catalog.len());
}

#[test]
fn test_beginner_plan_uses_beginner_exercises_only() {
    let planner = planner();

    for days in [3, 4, 5, 6] {
        let request = WorkoutRequest::new(
            TrainingGoal::Hypertrophy,
            ExperienceLevel::Beginner,
            FULL_GYM,
            days,
        );
        let plan = planner.generate_plan(&request).unwrap();
        assert!(plan
            .prescriptions()
            .all(|item| item.exercise.difficulty == Difficulty::Beginner));
    }
}

#[test]
fn test_plan_only_uses_owned_equipment() {
    let planner = planner();
    let owned = tags(&HOME_GYM);

    let plan = planner
        .generate_plan(&common::sample_workout_request())
        .unwrap();

    for item in plan.prescriptions() {
        assert!(
            item.exercise.equipment.iter().any(|tag| owned.contains(tag)),
            "{} needs equipment outside the home gym",
            item.exercise.name
        );
    }
}

// ============================================================================
// SELECTION AND VOLUME
// ============================================================================

#[test]
fn test_sample_request_upper_and_lower_days() {
    let planner = planner();

    let plan = planner
        .generate_plan(&common::sample_workout_request())
        .unwrap();

    assert_eq!(plan.split.name, "Upper/Lower 4x/week");
    assert_eq!(
        exercise_ids(&plan, 0),
        vec![1, 4, 11, 26, 28, 30, 31, 32, 35, 36]
    );
    assert_eq!(exercise_ids(&plan, 1), vec![15, 19]);
    assert_eq!(
        plan.workouts[1].uncovered_muscle_groups,
        vec![MuscleGroup::Core]
    );

    let sets: Vec<u32> = plan.workouts[0]
        .exercises
        .iter()
        .map(|item| item.sets)
        .collect();
    assert_eq!(sets, vec![3, 3, 3, 3, 3, 2, 3, 2, 3, 2]);

    let lower: Vec<u32> = plan.workouts[1]
        .exercises
        .iter()
        .map(|item| item.sets)
        .collect();
    assert_eq!(lower, vec![3, 2]);
}

#[test]
fn test_sample_request_prescription_fields() {
    let planner = planner();

    let plan = planner
        .generate_plan(&common::sample_workout_request())
        .unwrap();

    let bench = &plan.workouts[0].exercises[0];
    assert_eq!(bench.exercise.name, "Barbell Bench Press");
    assert_eq!(bench.reps, "8-12");
    assert_eq!(bench.rest_seconds, 120);
    assert_eq!(bench.warmup_sets, "1-2 sets");
    assert_eq!(bench.reps_in_reserve, 1);

    let lateral = &plan.workouts[0].exercises[4];
    assert_eq!(lateral.exercise.name, "Lateral Raises");
    assert_eq!(lateral.warmup_sets, "Optional");
}

#[test]
fn test_sets_never_below_two() {
    let planner = planner();

    for goal in TrainingGoal::ALL {
        for experience in ExperienceLevel::ALL {
            for gender in [Gender::Male, Gender::Female] {
                for days in [3, 4, 5, 6] {
                    let request = WorkoutRequest::new(goal, experience, FULL_GYM, days)
                        .with_gender(gender);
                    let plan = planner.generate_plan(&request).unwrap();
                    assert!(plan.prescriptions().all(|item| item.sets >= 2));
                }
            }
        }
    }
}

#[test]
fn test_female_bias_increases_leg_volume() {
    let planner = planner();
    let male = WorkoutRequest::new(
        TrainingGoal::Strength,
        ExperienceLevel::Advanced,
        FULL_GYM,
        4,
    );
    let female = male.clone().with_gender(Gender::Female);

    let male_plan = planner.generate_plan(&male).unwrap();
    let female_plan = planner.generate_plan(&female).unwrap();

    // Lower A starts with leg curls (slot 0) then the squat (slot 1)
    let male_sets: Vec<u32> = male_plan.workouts[1]
        .exercises
        .iter()
        .map(|item| item.sets)
        .collect();
    let female_sets: Vec<u32> = female_plan.workouts[1]
        .exercises
        .iter()
        .map(|item| item.sets)
        .collect();

    assert_eq!(male_sets[..2], [3, 3]);
    assert_eq!(female_sets[..2], [4, 4]);
    assert_eq!(
        exercise_ids(&male_plan, 1),
        exercise_ids(&female_plan, 1)
    );
}

#[test]
fn test_timed_core_hold() {
    let planner = planner();
    let request = WorkoutRequest::new(
        TrainingGoal::Endurance,
        ExperienceLevel::Beginner,
        ["bodyweight", "dumbbell"],
        4,
    );

    let plan = planner.generate_plan(&request).unwrap();
    let plank = plan
        .prescriptions()
        .find(|item| item.exercise.name == "Planks")
        .unwrap();

    assert_eq!(plank.reps, "30-60s");
    assert_eq!(plank.warmup_sets, "Not needed");
}

#[test]
fn test_rep_ranges_and_rir_per_goal() {
    let planner = planner();
    let expected = [
        (TrainingGoal::Strength, "3-6", 1),
        (TrainingGoal::Hypertrophy, "8-12", 1),
        (TrainingGoal::Endurance, "15-20", 2),
        (TrainingGoal::WeightLoss, "12-15", 1),
    ];

    for (goal, reps, rir) in expected {
        let request = WorkoutRequest::new(goal, ExperienceLevel::Intermediate, HOME_GYM, 3);
        let plan = planner.generate_plan(&request).unwrap();
        assert!(plan
            .prescriptions()
            .all(|item| item.reps == reps && item.reps_in_reserve == rir));
    }
}

#[test]
fn test_plan_is_deterministic() {
    let planner = planner();
    let request = common::sample_workout_request();

    let first = planner.generate_plan(&request).unwrap();
    let second = planner.generate_plan(&request).unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// PROGRESSION
// ============================================================================

#[test]
fn test_progression_tips_by_experience() {
    let planner = planner();

    let tips = |experience| {
        let request = WorkoutRequest::new(TrainingGoal::Strength, experience, HOME_GYM, 3);
        planner.generate_plan(&request).unwrap().progression.tips
    };

    let beginner = tips(ExperienceLevel::Beginner);
    let intermediate = tips(ExperienceLevel::Intermediate);
    let advanced = tips(ExperienceLevel::Advanced);

    assert_eq!(beginner.len(), intermediate.len() + 2);
    assert_eq!(beginner[0], "Focus on learning proper form");
    assert_eq!(advanced.len(), intermediate.len() + 1);
    assert_eq!(advanced.last().unwrap(), "Consider periodization");
}

#[test]
fn test_plan_echoes_parameters() {
    let planner = planner();
    let request = common::sample_workout_request().with_session_duration(45);

    let plan = planner.generate_plan(&request).unwrap();

    assert_eq!(plan.parameters.goal, TrainingGoal::Hypertrophy);
    assert_eq!(plan.parameters.experience, ExperienceLevel::Intermediate);
    assert_eq!(plan.parameters.days_per_week, 4);
    assert_eq!(plan.parameters.estimated_duration, 45);
    assert_eq!(plan.progression.method, "Double Progression");
}
