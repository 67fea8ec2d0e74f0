// ABOUTME: Integration tests for the unified error type and its JSON envelope
// ABOUTME: Validates error codes, caller attribution, context fields, and serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::error::Error;

use fitmentor::errors::{AppError, ErrorCode, ErrorResponse};
use serde_json::json;

#[test]
fn test_error_code_wire_names() {
    let cases = [
        (ErrorCode::InvalidParameter, "INVALID_PARAMETER"),
        (ErrorCode::MacroInfeasible, "MACRO_INFEASIBLE"),
        (ErrorCode::UnsupportedFrequency, "UNSUPPORTED_FREQUENCY"),
        (ErrorCode::UnsupportedGoal, "UNSUPPORTED_GOAL"),
        (ErrorCode::UnsupportedExperience, "UNSUPPORTED_EXPERIENCE"),
        (ErrorCode::ConfigInvalid, "CONFIG_INVALID"),
    ];

    for (code, name) in cases {
        assert_eq!(serde_json::to_value(code).unwrap(), json!(name));
    }
}

#[test]
fn test_caller_errors() {
    assert!(AppError::unsupported_goal("powerlifting").is_caller_error());
    assert!(AppError::unsupported_experience("expert").is_caller_error());
    assert!(AppError::invalid_parameter("weight", -1, "must be positive").is_caller_error());
    assert!(!AppError::config("bad policy").is_caller_error());
    assert!(!AppError::internal("unexpected").is_caller_error());
}

#[test]
fn test_display_includes_description_and_message() {
    let error = AppError::unsupported_goal("powerlifting");

    let rendered = error.to_string();

    assert!(rendered.starts_with(ErrorCode::UnsupportedGoal.description()));
    assert!(rendered.contains("powerlifting"));
}

#[test]
fn test_unsupported_frequency_lists_supported_values() {
    let error = AppError::unsupported_frequency(7, &[3, 4, 5, 6]);

    assert_eq!(error.context.field.as_deref(), Some("days_per_week"));
    assert_eq!(error.context.value.as_deref(), Some("7"));
    assert!(error.message.contains("[3, 4, 5, 6]"));
}

#[test]
fn test_macro_infeasible_details() {
    let error = AppError::macro_infeasible(1500.0, 1200.0, 375.0);

    assert_eq!(error.context.details["target_calories"], json!(1500.0));
    assert_eq!(error.context.details["carb_calories"], json!(-75.0));
    assert!(error.context.field.is_none());
}

#[test]
fn test_source_chaining() {
    let parse = "abc".parse::<u32>().unwrap_err();

    let error = AppError::config("FITMENTOR_MIN_SETS is not a number").with_source(parse);

    assert!(error.source().is_some());
}

#[test]
fn test_error_response_envelope() {
    let error = AppError::invalid_parameter("activity_level", "couch", "unknown activity level");

    let json = serde_json::to_value(ErrorResponse::from(error)).unwrap();

    assert_eq!(json["error"]["code"], "INVALID_PARAMETER");
    assert_eq!(json["error"]["field"], "activity_level");
    assert_eq!(json["error"]["value"], "couch");
    assert!(json["error"].get("details").is_none());
}

#[test]
fn test_serialization_errors_convert() {
    let serde_error = serde_json::from_str::<u32>("not json").unwrap_err();

    let error = AppError::from(serde_error);

    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(!error.is_caller_error());
}
