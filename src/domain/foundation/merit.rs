//! Merit value object - the clinic's virtual currency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative amount of merit (功德).
///
/// Merit can only shrink through [`Merit::checked_debit`], which refuses
/// any debit that would take the amount below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Merit(u64);

impl Merit {
    /// No merit at all.
    pub const ZERO: Self = Self(0);

    /// Creates a merit amount.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Returns true if `cost` can be paid from this amount.
    pub fn covers(&self, cost: Merit) -> bool {
        self.0 >= cost.0
    }

    /// Returns the remaining merit after paying `cost`, or `None` if the
    /// balance is insufficient.
    pub fn checked_debit(&self, cost: Merit) -> Option<Merit> {
        self.0.checked_sub(cost.0).map(Merit)
    }
}

impl Default for Merit {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Merit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} merit", self.0)
    }
}
