//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Stable error codes surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Precondition rejections
    WrongGate,
    InsufficientMerit,
    EmptySelection,
    CheckupLocked,
    OperationPending,
    InvalidStateTransition,

    // Gateway errors
    GatewayFailure,
}

impl ErrorCode {
    /// Returns true for codes raised synchronously before any mutation.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, ErrorCode::GatewayFailure)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::WrongGate => "WRONG_GATE",
            ErrorCode::InsufficientMerit => "INSUFFICIENT_MERIT",
            ErrorCode::EmptySelection => "EMPTY_SELECTION",
            ErrorCode::CheckupLocked => "CHECKUP_LOCKED",
            ErrorCode::OperationPending => "OPERATION_PENDING",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::GatewayFailure => "GATEWAY_FAILURE",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("symptom");
        assert_eq!(format!("{}", err), "Field 'symptom' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("energy_level", 0, 100, 150);
        assert_eq!(
            format!("{}", err),
            "Field 'energy_level' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn validation_error_exposes_field_name() {
        let err = ValidationError::invalid_format("blood_pressure", "systolic below diastolic");
        assert_eq!(err.field(), "blood_pressure");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InsufficientMerit), "INSUFFICIENT_MERIT");
        assert_eq!(format!("{}", ErrorCode::GatewayFailure), "GATEWAY_FAILURE");
    }

    #[test]
    fn only_gateway_failure_is_not_a_precondition() {
        assert!(ErrorCode::WrongGate.is_precondition());
        assert!(ErrorCode::EmptySelection.is_precondition());
        assert!(!ErrorCode::GatewayFailure.is_precondition());
    }
}
