//! Session-specific error types.

use crate::domain::foundation::{ErrorCode, Merit, ValidationError};

use super::View;

/// Reasons a session operation was rejected.
///
/// Every variant except `GatewayFailure` is raised before any mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The chosen gate is a decoy.
    WrongGate { index: usize },
    /// The merit balance cannot cover the price.
    InsufficientMerit { required: Merit, available: Merit },
    /// No symptom has been selected.
    EmptySelection,
    /// The checkup service has not been paid for.
    CheckupLocked,
    /// Another paid request is still awaiting the gateway.
    OperationPending,
    /// The operation is not offered from the current view.
    NotAvailableHere { operation: &'static str, view: View },
    /// Input failed validation.
    InvalidInput(ValidationError),
    /// The analysis gateway failed; nothing was charged.
    GatewayFailure(String),
}

impl SessionError {
    pub fn wrong_gate(index: usize) -> Self {
        SessionError::WrongGate { index }
    }
    pub fn insufficient_merit(required: Merit, available: Merit) -> Self {
        SessionError::InsufficientMerit {
            required,
            available,
        }
    }
    pub fn not_available(operation: &'static str, view: View) -> Self {
        SessionError::NotAvailableHere { operation, view }
    }
    pub fn gateway_failure(message: impl Into<String>) -> Self {
        SessionError::GatewayFailure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::WrongGate { .. } => ErrorCode::WrongGate,
            SessionError::InsufficientMerit { .. } => ErrorCode::InsufficientMerit,
            SessionError::EmptySelection => ErrorCode::EmptySelection,
            SessionError::CheckupLocked => ErrorCode::CheckupLocked,
            SessionError::OperationPending => ErrorCode::OperationPending,
            SessionError::NotAvailableHere { .. } => ErrorCode::InvalidStateTransition,
            SessionError::InvalidInput(_) => ErrorCode::ValidationFailed,
            SessionError::GatewayFailure(_) => ErrorCode::GatewayFailure,
        }
    }
    /// Returns true if re-issuing the same operation from the same state may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SessionError::GatewayFailure(_) | SessionError::OperationPending
        )
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::WrongGate { index } => {
                format!("Gate {} is but a mirage; choose another path", index)
            }
            SessionError::InsufficientMerit {
                required,
                available,
            } => format!("Not enough merit: {} required, {} available", required, available),
            SessionError::EmptySelection => "Select at least one symptom first".to_string(),
            SessionError::CheckupLocked => "The checkup service has not been unlocked".to_string(),
            SessionError::OperationPending => {
                "A consultation is already in progress".to_string()
            }
            SessionError::NotAvailableHere { operation, view } => {
                format!("Cannot {} from the {} view", operation, view)
            }
            SessionError::InvalidInput(err) => format!("Invalid input: {}", err),
            SessionError::GatewayFailure(msg) => {
                format!("The celestial line is weak, please try again ({})", msg)
            }
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::InvalidInput(err)
    }
}
