//! Consultation kinds and analysis results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which symptom table a consultation draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationKind {
    /// Bodily ailments (behind the gate puzzle).
    Physical,
    /// Troubles of the heart.
    Mental,
}

impl fmt::Display for ConsultationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConsultationKind::Physical => "physical",
            ConsultationKind::Mental => "mental",
        };
        write!(f, "{}", s)
    }
}

/// A narrative diagnosis produced by the analysis gateway.
///
/// Immutable once received; the session holds it until the user
/// dismisses the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    condition: String,
    cause: String,
    treatment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tcm_advice: Option<String>,
}

impl AnalysisResult {
    /// Creates a result without herbal advice.
    pub fn new(
        condition: impl Into<String>,
        cause: impl Into<String>,
        treatment: impl Into<String>,
    ) -> Self {
        Self {
            condition: condition.into(),
            cause: cause.into(),
            treatment: treatment.into(),
            tcm_advice: None,
        }
    }

    /// Attaches traditional herbal advice (checkup reports only).
    pub fn with_tcm_advice(mut self, advice: impl Into<String>) -> Self {
        self.tcm_advice = Some(advice.into());
        self
    }

    /// Summary of the ailment.
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Likely cause.
    pub fn cause(&self) -> &str {
        &self.cause
    }

    /// Recommended remedy.
    pub fn treatment(&self) -> &str {
        &self.treatment
    }

    /// Herbal prescription, present on checkup reports.
    pub fn tcm_advice(&self) -> Option<&str> {
        self.tcm_advice.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_and_skips_missing_advice() {
        let result = AnalysisResult::new("A", "B", "C");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"condition": "A", "cause": "B", "treatment": "C"}));
    }

    #[test]
    fn serializes_tcm_advice_when_present() {
        let result = AnalysisResult::new("A", "B", "C").with_tcm_advice("D");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["tcmAdvice"], "D");
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ConsultationKind::Physical).unwrap(),
            "\"physical\""
        );
    }
}
