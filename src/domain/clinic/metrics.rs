//! Health metrics submitted for a full checkup.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Vital signs of a pilgrim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Beats per minute.
    pub heart_rate: u16,
    /// Systolic pressure in mmHg.
    pub systolic_pressure: u16,
    /// Diastolic pressure in mmHg.
    pub diastolic_pressure: u16,
    /// Body weight in kg.
    pub weight: u16,
    /// Qi level as a percentage.
    pub energy_level: u8,
}

impl HealthMetrics {
    /// Validates the metrics before they are stored or sent.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if heart rate or weight is zero, or energy exceeds 100
    /// - `InvalidFormat` if systolic pressure does not exceed diastolic
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.heart_rate == 0 {
            return Err(ValidationError::out_of_range(
                "heart_rate",
                1,
                i64::from(u16::MAX),
                0,
            ));
        }
        if self.weight == 0 {
            return Err(ValidationError::out_of_range("weight", 1, i64::from(u16::MAX), 0));
        }
        if self.energy_level > 100 {
            return Err(ValidationError::out_of_range(
                "energy_level",
                0,
                100,
                i64::from(self.energy_level),
            ));
        }
        if self.systolic_pressure <= self.diastolic_pressure {
            return Err(ValidationError::invalid_format(
                "blood_pressure",
                format!(
                    "systolic {} must exceed diastolic {}",
                    self.systolic_pressure, self.diastolic_pressure
                ),
            ));
        }
        Ok(())
    }
}

impl Default for HealthMetrics {
    fn default() -> Self {
        Self {
            heart_rate: 72,
            systolic_pressure: 115,
            diastolic_pressure: 75,
            weight: 65,
            energy_level: 95,
        }
    }
}
