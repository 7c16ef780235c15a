//! Analysis Gateway Port - the external diagnosis collaborator.
//!
//! The session controller only knows this contract: structured input in,
//! [`AnalysisResult`] out, or a single opaque failure. How the input is
//! phrased for a model, and which model answers, are adapter concerns.

use async_trait::async_trait;

use crate::domain::clinic::{AnalysisResult, ConsultationKind, HealthMetrics};
use crate::domain::foundation::SessionId;

use super::AIError;

/// Port producing narrative diagnoses.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Diagnose a set of selected symptoms.
    async fn analyze(
        &self,
        session_id: SessionId,
        kind: ConsultationKind,
        symptoms: &[String],
    ) -> Result<AnalysisResult, GatewayError>;

    /// Produce a health report (with herbal advice) from vital signs.
    async fn checkup(
        &self,
        session_id: SessionId,
        metrics: &HealthMetrics,
    ) -> Result<AnalysisResult, GatewayError>;
}

/// Failure of the analysis gateway.
///
/// Callers treat both variants alike: nothing is charged and the user may
/// try again.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The model could not be reached or refused the request.
    #[error("analysis service unavailable: {0}")]
    Unavailable(#[from] AIError),

    /// The model answered, but not with a complete diagnosis.
    #[error("malformed analysis reply: {0}")]
    MalformedReply(String),
}

impl GatewayError {
    /// Creates a malformed reply error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        GatewayError::MalformedReply(reason.into())
    }
}
