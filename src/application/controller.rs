//! ClinicController - async front door of a clinic session.

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::adapters::ai::provider_from_config;
use crate::adapters::LlmAnalysisGateway;
use crate::config::{AppConfig, ConfigError};
use crate::domain::clinic::{AnalysisResult, HealthMetrics};
use crate::domain::foundation::Merit;
use crate::domain::session::{PendingRequest, Session, SessionError, UnlockOutcome, View};
use crate::ports::{AnalysisGateway, GatewayError};

use super::SessionSnapshot;

/// Owns one session and the gateway that diagnoses it.
pub struct ClinicController {
    session: Arc<Mutex<Session>>,
    gateway: Arc<dyn AnalysisGateway>,
}

impl ClinicController {
    pub fn new(session: Session, gateway: Arc<dyn AnalysisGateway>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            gateway,
        }
    }

    /// Starts a fresh session with a random correct gate.
    pub fn start(starting_merit: Merit, gateway: Arc<dyn AnalysisGateway>) -> Self {
        let session = Session::start(starting_merit);
        tracing::info!(session_id = %session.id(), merit = %starting_merit, "Clinic session started");
        Self::new(session, gateway)
    }

    /// Wires the configured provider into an LLM gateway and starts a session.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let provider = provider_from_config(&config.ai)?;
        let gateway = LlmAnalysisGateway::new(provider).with_temperature(config.ai.temperature);
        Ok(Self::start(config.clinic.starting_merit(), Arc::new(gateway)))
    }

    /// Read-only copy of the current session.
    pub async fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(&*self.session.lock().await)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn open_gate_challenge(&self) -> Result<(), SessionError> {
        self.with_session("open_gate_challenge", Session::open_gate_challenge)
            .await
    }

    pub async fn open_mental_picker(&self) -> Result<(), SessionError> {
        self.with_session("open_mental_picker", Session::open_mental_picker)
            .await
    }

    /// Returns the view the checkup entry resolved to.
    pub async fn open_checkup(&self) -> Result<View, SessionError> {
        self.with_session("open_checkup", Session::open_checkup).await
    }

    pub async fn dismiss_payment_prompt(&self) -> Result<(), SessionError> {
        self.with_session("dismiss_payment_prompt", Session::dismiss_payment_prompt)
            .await
    }

    pub async fn reset(&self) -> Result<(), SessionError> {
        self.with_session("reset", Session::reset).await
    }

    pub async fn revise_report(&self) -> Result<View, SessionError> {
        self.with_session("revise_report", Session::revise_report)
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Gate, selection and checkup unlock
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn select_gate(&self, index: usize) -> Result<(), SessionError> {
        self.with_session("select_gate", |s| s.select_gate(index))
            .await
    }

    /// Returns the remaining merit.
    pub async fn quick_pass(&self) -> Result<Merit, SessionError> {
        let remaining = self.with_session("quick_pass", Session::quick_pass).await?;
        tracing::info!(remaining = %remaining, "Quick pass purchased");
        Ok(remaining)
    }

    /// Returns true if the label is selected afterwards.
    pub async fn toggle_symptom(&self, label: &str) -> Result<bool, SessionError> {
        self.with_session("toggle_symptom", |s| s.toggle_symptom(label))
            .await
    }

    pub async fn unlock_checkup(&self) -> Result<UnlockOutcome, SessionError> {
        let outcome = self
            .with_session("unlock_checkup", Session::unlock_checkup)
            .await?;
        if outcome == UnlockOutcome::Unlocked {
            tracing::info!("Checkup service unlocked");
        }
        Ok(outcome)
    }

    pub async fn update_metrics(&self, metrics: HealthMetrics) -> Result<(), SessionError> {
        self.with_session("update_metrics", |s| s.update_metrics(metrics))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Paid requests
    // ─────────────────────────────────────────────────────────────────────────

    /// Diagnoses the current symptom selection.
    ///
    /// The consultation fee is charged only if the gateway returns a
    /// complete report. On failure the session is left exactly as it was,
    /// apart from leaving the pending state.
    ///
    /// The gateway call runs on its own task. Dropping the returned future
    /// does not cancel it: the request still settles and the session leaves
    /// the pending state.
    pub async fn request_analysis(&self) -> Result<AnalysisResult, SessionError> {
        let (session_id, kind, symptoms) = {
            let mut session = self.session.lock().await;
            let request = session
                .begin_consultation()
                .map_err(|e| rejected("request_analysis", e))?;
            let PendingRequest::Consultation { kind, symptoms } = request else {
                session.abandon_pending();
                return Err(SessionError::not_available("request an analysis", session.view()));
            };
            (*session.id(), kind, symptoms)
        };

        tracing::debug!(%kind, symptoms = symptoms.len(), "Requesting analysis");
        let session = Arc::clone(&self.session);
        let gateway = Arc::clone(&self.gateway);
        let task = tokio::spawn(async move {
            let outcome = gateway.analyze(session_id, kind, &symptoms).await;
            settle(&session, outcome).await
        });
        self.join(task).await
    }

    /// Sends metrics for a full checkup report. Charged and settled like
    /// [`request_analysis`](Self::request_analysis).
    pub async fn submit_checkup(&self, metrics: HealthMetrics) -> Result<AnalysisResult, SessionError> {
        let session_id = {
            let mut session = self.session.lock().await;
            session
                .begin_checkup(metrics)
                .map_err(|e| rejected("submit_checkup", e))?;
            *session.id()
        };

        tracing::debug!(?metrics, "Requesting checkup");
        let session = Arc::clone(&self.session);
        let gateway = Arc::clone(&self.gateway);
        let task = tokio::spawn(async move {
            let outcome = gateway.checkup(session_id, &metrics).await;
            settle(&session, outcome).await
        });
        self.join(task).await
    }

    async fn join(
        &self,
        task: JoinHandle<Result<AnalysisResult, SessionError>>,
    ) -> Result<AnalysisResult, SessionError> {
        match task.await {
            Ok(outcome) => outcome,
            Err(err) => {
                // The task died before settling, so the request is still pending.
                self.session.lock().await.abandon_pending();
                tracing::error!(error = %err, "Analysis task aborted");
                Err(SessionError::gateway_failure(format!("analysis task aborted: {}", err)))
            }
        }
    }

    async fn with_session<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut Session) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let mut session = self.session.lock().await;
        let result = f(&mut session).map_err(|e| rejected(operation, e))?;
        tracing::debug!(operation, view = %session.view(), "Session updated");
        Ok(result)
    }
}

/// Settles the pending request with the gateway's outcome.
async fn settle(
    session: &Mutex<Session>,
    outcome: Result<AnalysisResult, GatewayError>,
) -> Result<AnalysisResult, SessionError> {
    let mut session = session.lock().await;
    match outcome {
        Ok(result) => {
            let remaining = match session.complete_pending(result.clone()) {
                Ok(remaining) => remaining,
                Err(err) => {
                    session.abandon_pending();
                    return Err(rejected("deliver_report", err));
                }
            };
            tracing::info!(
                session_id = %session.id(),
                view = %session.view(),
                remaining = %remaining,
                "Report delivered"
            );
            Ok(result)
        }
        Err(err) => {
            session.abandon_pending();
            tracing::warn!(session_id = %session.id(), error = %err, "Analysis failed; nothing charged");
            Err(SessionError::gateway_failure(err.to_string()))
        }
    }
}

fn rejected(operation: &'static str, err: SessionError) -> SessionError {
    tracing::warn!(operation, code = %err.code(), "{}", err.message());
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::clinic::{ConsultationKind, GateIndex};
    use crate::domain::foundation::ErrorCode;
    use std::time::Duration;

    const REPLY: &str = r#"{"condition":"A","cause":"B","treatment":"C"}"#;
    const CHECKUP_REPLY: &str = r#"{"condition":"A","cause":"B","treatment":"C","tcmAdvice":"D"}"#;

    fn controller(mock: &MockAIProvider, merit: u64) -> ClinicController {
        let gateway = LlmAnalysisGateway::new(Arc::new(mock.clone()));
        ClinicController::new(
            Session::new(GateIndex::new(3).unwrap(), Merit::new(merit)),
            Arc::new(gateway),
        )
    }

    async fn on_physical_picker(controller: &ClinicController) {
        controller.open_gate_challenge().await.unwrap();
        controller.select_gate(3).await.unwrap();
        controller.toggle_symptom("头疼欲裂").await.unwrap();
    }

    #[tokio::test]
    async fn successful_analysis_charges_and_stores_report() {
        let mock = MockAIProvider::new().with_response(REPLY);
        let controller = controller(&mock, 100_000);
        on_physical_picker(&controller).await;

        let result = controller.request_analysis().await.unwrap();

        assert_eq!(result, AnalysisResult::new("A", "B", "C"));
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.merit, Merit::new(95_000));
        assert_eq!(snapshot.result, Some(result));
        assert!(!snapshot.pending);
        assert_eq!(
            snapshot.view,
            View::ResultDisplay(crate::domain::session::ReportOrigin::Consultation(
                ConsultationKind::Physical
            ))
        );
    }

    #[tokio::test]
    async fn gateway_failure_charges_nothing() {
        let mock = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "overloaded".to_string(),
        });
        let controller = controller(&mock, 100_000);
        on_physical_picker(&controller).await;
        let before = controller.snapshot().await;

        let err = controller.request_analysis().await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::GatewayFailure);
        assert!(err.is_retryable());
        let after = controller.snapshot().await;
        assert_eq!(after, before);

        // Retry succeeds with the mock's default reply.
        assert!(controller.request_analysis().await.is_ok());
        assert_eq!(controller.snapshot().await.merit, Merit::new(95_000));
    }

    #[tokio::test]
    async fn malformed_reply_is_gateway_failure() {
        let mock = MockAIProvider::new().with_response("the stars are silent");
        let controller = controller(&mock, 100_000);
        on_physical_picker(&controller).await;

        let err = controller.request_analysis().await.unwrap_err();

        assert!(matches!(err, SessionError::GatewayFailure(_)));
        assert_eq!(controller.snapshot().await.merit, Merit::new(100_000));
    }

    #[tokio::test]
    async fn second_request_while_pending_is_rejected() {
        let mock = MockAIProvider::new()
            .with_response(REPLY)
            .with_delay(Duration::from_millis(100));
        let controller = controller(&mock, 100_000);
        on_physical_picker(&controller).await;

        let (first, second) = tokio::join!(controller.request_analysis(), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            let second = controller.request_analysis().await;
            let toggle = controller.toggle_symptom("腰酸背痛").await;
            (second, toggle)
        });

        assert!(first.is_ok());
        assert_eq!(second.0, Err(SessionError::OperationPending));
        assert_eq!(second.1, Err(SessionError::OperationPending));
        assert_eq!(mock.call_count(), 1);
        assert_eq!(controller.snapshot().await.merit, Merit::new(95_000));
    }

    #[tokio::test]
    async fn empty_selection_never_reaches_gateway() {
        let mock = MockAIProvider::new();
        let controller = controller(&mock, 100_000);
        controller.open_mental_picker().await.unwrap();

        assert_eq!(
            controller.request_analysis().await,
            Err(SessionError::EmptySelection)
        );
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn checkup_flow_unlocks_once_and_reports() {
        let mock = MockAIProvider::new().with_response(CHECKUP_REPLY);
        let controller = controller(&mock, 20_000);

        assert_eq!(controller.open_checkup().await, Ok(View::PaymentPrompt));
        assert_eq!(controller.unlock_checkup().await, Ok(UnlockOutcome::Unlocked));
        assert_eq!(controller.unlock_checkup().await, Ok(UnlockOutcome::AlreadyUnlocked));
        assert_eq!(controller.snapshot().await.merit, Merit::new(5_000));

        let result = controller
            .submit_checkup(HealthMetrics::default())
            .await
            .unwrap();

        assert_eq!(result.tcm_advice(), Some("D"));
        assert_eq!(controller.snapshot().await.merit, Merit::ZERO);
        assert_eq!(controller.revise_report().await, Ok(View::Checkup));
    }

    #[tokio::test]
    async fn locked_checkup_is_rejected() {
        let mock = MockAIProvider::new();
        let controller = controller(&mock, 100_000);

        assert_eq!(
            controller.submit_checkup(HealthMetrics::default()).await,
            Err(SessionError::CheckupLocked)
        );
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn checkup_gateway_failure_charges_nothing() {
        let mock = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "overloaded".to_string(),
        });
        let controller = controller(&mock, 20_000);
        controller.open_checkup().await.unwrap();
        controller.unlock_checkup().await.unwrap();

        let err = controller
            .submit_checkup(HealthMetrics::default())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::GatewayFailure);
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.merit, Merit::new(5_000));
        assert_eq!(snapshot.view, View::Checkup);
        assert!(!snapshot.pending);
        assert!(snapshot.result.is_none());
    }

    #[tokio::test]
    async fn checkup_below_fee_after_unlock_is_rejected() {
        let mock = MockAIProvider::new().with_response(CHECKUP_REPLY);
        let controller = controller(&mock, 19_999);
        controller.open_checkup().await.unwrap();
        assert_eq!(controller.unlock_checkup().await, Ok(UnlockOutcome::Unlocked));

        assert_eq!(
            controller.submit_checkup(HealthMetrics::default()).await,
            Err(SessionError::insufficient_merit(
                Merit::new(5_000),
                Merit::new(4_999)
            ))
        );
        assert_eq!(mock.call_count(), 0);
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.merit, Merit::new(4_999));
        assert_eq!(snapshot.view, View::Checkup);
        assert!(!snapshot.pending);
    }

    #[tokio::test]
    async fn abandoned_request_still_settles() {
        let mock = MockAIProvider::new()
            .with_response(REPLY)
            .with_delay(Duration::from_millis(200));
        let controller = controller(&mock, 100_000);
        on_physical_picker(&controller).await;

        let timed_out =
            tokio::time::timeout(Duration::from_millis(20), controller.request_analysis()).await;
        assert!(timed_out.is_err());
        assert!(controller.snapshot().await.pending);

        tokio::time::sleep(Duration::from_millis(400)).await;

        let snapshot = controller.snapshot().await;
        assert!(!snapshot.pending);
        assert_eq!(snapshot.merit, Merit::new(95_000));
        assert_eq!(mock.call_count(), 1);
        assert_eq!(controller.reset().await, Ok(()));
        assert_eq!(controller.snapshot().await.view, View::Home);
    }

    #[tokio::test]
    async fn quick_pass_then_reset() {
        let controller = controller(&MockAIProvider::new(), 500);
        controller.open_gate_challenge().await.unwrap();

        assert_eq!(controller.quick_pass().await, Ok(Merit::ZERO));
        controller.toggle_symptom("腰酸背痛").await.unwrap();
        controller.reset().await.unwrap();

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.view, View::Home);
        assert!(snapshot.selected_symptoms.is_empty());
        assert_eq!(snapshot.merit, Merit::ZERO);
    }

    #[test]
    fn from_config_builds_mock_controller() {
        let mut config = AppConfig::default();
        config.ai.provider = crate::config::AiProvider::Mock;
        config.clinic.starting_merit = 12_345;

        let controller = ClinicController::from_config(&config).unwrap();
        let merit = controller.session.try_lock().map(|s| s.merit()).unwrap();
        assert_eq!(merit, Merit::new(12_345));
    }
}
