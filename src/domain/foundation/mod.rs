//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the clinic domain.

mod errors;
mod ids;
mod merit;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use ids::SessionId;
pub use merit::Merit;
pub use state_machine::StateMachine;
