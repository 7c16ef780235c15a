//! Merit prices of the clinic's paid services.

use crate::domain::foundation::Merit;

/// Merit granted to every new session.
pub const STARTING_MERIT: Merit = Merit::new(100_000);

/// Skip the gate puzzle and go straight to the physical symptom picker.
pub const QUICK_PASS_FEE: Merit = Merit::new(500);

/// One symptom consultation, charged only when a report is delivered.
pub const CONSULTATION_FEE: Merit = Merit::new(5_000);

/// One metrics checkup, charged only when a report is delivered.
pub const CHECKUP_FEE: Merit = Merit::new(5_000);

/// One-off unlock of the checkup service.
pub const CHECKUP_UNLOCK_FEE: Merit = Merit::new(15_000);
