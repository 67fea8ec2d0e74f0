// ABOUTME: Unified error type and error codes shared by every FitMentor engine
// ABOUTME: Separates caller-attributable input errors from formula contradictions and config faults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMentor Contributors

//! # Unified Error Handling
//!
//! Every engine operation returns [`AppResult`]. Errors carry a stable
//! [`ErrorCode`], a human-readable message and an [`ErrorContext`] that names
//! the offending field and value when there is one.
//!
//! All engine errors are deterministic: the same input always produces the
//! same error, and none of them is worth retrying.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed, out-of-range or unknown-enum input
    #[serde(rename = "INVALID_PARAMETER")]
    InvalidParameter = 3000,
    /// Valid input whose formula-derived macros contradict each other
    #[serde(rename = "MACRO_INFEASIBLE")]
    MacroInfeasible = 3100,

    // Unsupported configurations (4000-4999)
    /// Training frequency with no split table entry
    #[serde(rename = "UNSUPPORTED_FREQUENCY")]
    UnsupportedFrequency = 4000,
    /// Training goal with no parameter table entry
    #[serde(rename = "UNSUPPORTED_GOAL")]
    UnsupportedGoal = 4001,
    /// Experience level with no difficulty mapping
    #[serde(rename = "UNSUPPORTED_EXPERIENCE")]
    UnsupportedExperience = 4002,

    // Configuration (6000-6999)
    /// Policy configuration failed to load or validate
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Output could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidParameter => "The provided parameter is invalid",
            Self::MacroInfeasible => {
                "The calorie target cannot cover the protein and fat minimums"
            }
            Self::UnsupportedFrequency => "The requested training frequency is not supported",
            Self::UnsupportedGoal => "The requested training goal is not supported",
            Self::UnsupportedExperience => "The requested experience level is not supported",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Whether the error is attributable to the caller's request
    ///
    /// Caller errors are surfaced as-is; the remaining codes indicate a
    /// deployment or programming fault.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter
                | Self::MacroInfeasible
                | Self::UnsupportedFrequency
                | Self::UnsupportedGoal
                | Self::UnsupportedExperience
        )
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Name of the offending input field, if any
    pub field: Option<String>,
    /// Offending value rendered as a string, if any
    pub value: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            field: None,
            value: None,
            details: serde_json::Value::Null,
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the offending field and value
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, value: impl fmt::Display) -> Self {
        self.context.field = Some(field.into());
        self.context.value = Some(value.to_string());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Whether the error is attributable to the caller's request
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        self.code.is_caller_error()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating the engine's errors
impl AppError {
    /// Malformed, non-positive, or unknown-enum input for `field`
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let message = format!("{field}={value}: {}", reason.into());
        Self::new(ErrorCode::InvalidParameter, message).with_field(field, value)
    }

    /// Protein and fat floors leave a negative carbohydrate remainder
    pub fn macro_infeasible(
        target_calories: f64,
        protein_calories: f64,
        fat_calories: f64,
    ) -> Self {
        Self::new(
            ErrorCode::MacroInfeasible,
            format!(
                "target of {target_calories:.0} kcal is below protein ({protein_calories:.0} kcal) plus fat ({fat_calories:.0} kcal)"
            ),
        )
        .with_details(serde_json::json!({
            "target_calories": target_calories,
            "protein_calories": protein_calories,
            "fat_calories": fat_calories,
            "carb_calories": target_calories - protein_calories - fat_calories,
        }))
    }

    /// Training frequency outside the split table
    pub fn unsupported_frequency(days_per_week: i64, supported: &[u32]) -> Self {
        Self::new(
            ErrorCode::UnsupportedFrequency,
            format!("no training split for {days_per_week} days per week (supported: {supported:?})"),
        )
        .with_field("days_per_week", days_per_week)
    }

    /// Unknown training goal
    pub fn unsupported_goal(value: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::UnsupportedGoal,
            format!("unknown training goal '{value}'"),
        )
        .with_field("goal", value)
    }

    /// Unknown experience level
    pub fn unsupported_experience(value: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::UnsupportedExperience,
            format!("unknown experience level '{value}'"),
        )
        .with_field("experience", value)
    }

    /// Policy configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Reject measurements that are zero, negative, NaN, or infinite
///
/// # Errors
///
/// Returns `InvalidParameter` naming `field` when `value` is not a finite positive number
pub fn ensure_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_parameter(
            field,
            value,
            "must be a positive number",
        ))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Error response envelope for the boundary layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Error payload inside [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Offending field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Offending value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Extra structured details
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                field: error.context.field,
                value: error.context.value,
                details: error.context.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_names_field_and_value() {
        let error = AppError::invalid_parameter("activity_level", "couch", "unknown activity level");

        assert_eq!(error.code, ErrorCode::InvalidParameter);
        assert_eq!(error.context.field.as_deref(), Some("activity_level"));
        assert_eq!(error.context.value.as_deref(), Some("couch"));
        assert!(error.message.contains("activity_level=couch"));
    }

    #[test]
    fn test_macro_infeasible_is_distinct_from_invalid_parameter() {
        let error = AppError::macro_infeasible(800.0, 660.0, 200.0);

        assert_eq!(error.code, ErrorCode::MacroInfeasible);
        assert_ne!(error.code, ErrorCode::InvalidParameter);
        assert!(error.is_caller_error());
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::unsupported_frequency(7, &[3, 4, 5, 6]);
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("UNSUPPORTED_FREQUENCY"));
        assert!(json.contains("days_per_week"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_ensure_positive_rejects_non_finite() {
        assert!(ensure_positive("weight", 75.0).is_ok());
        for value in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let error = ensure_positive("weight", value).unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidParameter);
            assert_eq!(error.context.field.as_deref(), Some("weight"));
        }
    }

    #[test]
    fn test_internal_errors_are_not_caller_errors() {
        assert!(!ErrorCode::InternalError.is_caller_error());
        assert!(!ErrorCode::ConfigInvalid.is_caller_error());
    }
}
