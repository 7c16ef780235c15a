//! Read model handed to the presentation layer.

use serde::Serialize;

use crate::domain::clinic::{AnalysisResult, HealthMetrics};
use crate::domain::foundation::{Merit, SessionId};
use crate::domain::session::{Session, View};

/// Point-in-time copy of a session.
///
/// The correct gate is deliberately absent so a renderer cannot leak it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub view: View,
    pub selected_symptoms: Vec<String>,
    pub merit: Merit,
    pub checkup_unlocked: bool,
    pub metrics: HealthMetrics,
    pub result: Option<AnalysisResult>,
    pub pending: bool,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        Self {
            session_id: *session.id(),
            view: session.view(),
            selected_symptoms: session.selected_symptoms().to_vec(),
            merit: session.merit(),
            checkup_unlocked: session.checkup_unlocked(),
            metrics: *session.metrics(),
            result: session.result().cloned(),
            pending: session.is_pending(),
        }
    }
}
