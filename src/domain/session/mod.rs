//! Session domain module.
//!
//! The clinic session is the single source of truth for navigation and the
//! merit ledger. Every rule about what a user may do, and what it costs,
//! lives on the [`Session`] aggregate.

mod aggregate;
mod errors;
mod tariff;
mod view;

pub use aggregate::{PendingRequest, Session, UnlockOutcome};
pub use errors::SessionError;
pub use tariff::{
    CHECKUP_FEE, CHECKUP_UNLOCK_FEE, CONSULTATION_FEE, QUICK_PASS_FEE, STARTING_MERIT,
};
pub use view::{ReportOrigin, View};
