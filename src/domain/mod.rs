//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (merit, identifiers, errors, state machine)
//! - `clinic` - Static content tables and diagnosis value types
//! - `session` - The clinic session aggregate, its views and tariffs

pub mod clinic;
pub mod foundation;
pub mod session;
