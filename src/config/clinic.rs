//! Clinic session configuration

use serde::Deserialize;

use crate::domain::foundation::Merit;
use crate::domain::session::STARTING_MERIT;

/// Session-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct ClinicConfig {
    /// Merit granted to a fresh session
    #[serde(default = "default_starting_merit")]
    pub starting_merit: u64,
}

impl ClinicConfig {
    /// Starting balance as a ledger amount
    pub fn starting_merit(&self) -> Merit {
        Merit::new(self.starting_merit)
    }
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            starting_merit: default_starting_merit(),
        }
    }
}

fn default_starting_merit() -> u64 {
    STARTING_MERIT.amount()
}
