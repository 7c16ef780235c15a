//! Decoy-gate puzzle data.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Labels painted on the gates. Exactly one of them hides the real path.
pub const GATEKEEPER_LABELS: [&str; 15] = [
    "寻医问药", "仙医指路", "大圣归来", "八戒寻踪", "悟净担挑",
    "如来点化", "观音洒水", "老君炼丹", "龙王借宝", "土地显灵",
    "御马监察", "蟠桃盛会", "广寒宫影", "天蓬下凡", "真经在此",
];

/// Number of gates in the puzzle.
pub const GATE_COUNT: usize = GATEKEEPER_LABELS.len();

/// Index of a gate, guaranteed to be within `0..GATE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GateIndex(usize);

impl GateIndex {
    /// Creates a gate index, rejecting values outside the label table.
    pub fn new(index: usize) -> Result<Self, ValidationError> {
        if index >= GATE_COUNT {
            return Err(ValidationError::out_of_range(
                "gate_index",
                0,
                GATE_COUNT as i64 - 1,
                index as i64,
            ));
        }
        Ok(Self(index))
    }

    /// Picks a gate uniformly at random.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Picks a gate uniformly at random from the given generator.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..GATE_COUNT))
    }

    /// Returns the raw index.
    pub fn value(&self) -> usize {
        self.0
    }

    /// Returns the label painted on this gate.
    pub fn label(&self) -> &'static str {
        GATEKEEPER_LABELS[self.0]
    }
}

impl TryFrom<usize> for GateIndex {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GateIndex> for usize {
    fn from(index: GateIndex) -> Self {
        index.0
    }
}

impl fmt::Display for GateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn accepts_every_index_in_range() {
        for i in 0..GATE_COUNT {
            assert_eq!(GateIndex::new(i).unwrap().value(), i);
        }
    }

    #[test]
    fn rejects_index_past_last_gate() {
        assert!(GateIndex::new(GATE_COUNT).is_err());
    }

    #[test]
    fn random_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(GateIndex::random_with(&mut rng).value() < GATE_COUNT);
        }
    }

    #[test]
    fn label_matches_table() {
        assert_eq!(GateIndex::new(14).unwrap().label(), "真经在此");
    }

    #[test]
    fn deserialization_validates_range() {
        assert!(serde_json::from_str::<GateIndex>("3").is_ok());
        assert!(serde_json::from_str::<GateIndex>("15").is_err());
    }
}
