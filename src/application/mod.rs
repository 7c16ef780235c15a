//! Application layer - orchestrates the session aggregate and the gateway.
//!
//! [`ClinicController`] is the only entry point that mutates a session. It
//! serializes operations behind an async mutex and runs paid requests in
//! two phases so the lock is never held while the model is thinking.

mod controller;
mod snapshot;

pub use controller::ClinicController;
pub use snapshot::SessionSnapshot;
