//! Clinic content and diagnosis value types.
//!
//! - `symptoms` - Selectable physical and mental symptoms
//! - `gates` - Decoy-gate labels and the validated gate index
//! - `roster` - The four pilgrims shown on the landing view
//! - `metrics` - Health metrics submitted for a checkup
//! - `diagnosis` - Consultation kinds and the analysis result

mod diagnosis;
mod gates;
mod metrics;
mod roster;
mod symptoms;

pub use diagnosis::{AnalysisResult, ConsultationKind};
pub use gates::{GateIndex, GATEKEEPER_LABELS, GATE_COUNT};
pub use metrics::HealthMetrics;
pub use roster::{Character, CHARACTERS};
pub use symptoms::{find_symptom, symptoms_for, Symptom, MENTAL_SYMPTOMS, PHYSICAL_SYMPTOMS};
