//! `AnalysisGateway` over any `AIProvider`.

use async_trait::async_trait;
use std::sync::Arc;

use super::prompts::{
    checkup_prompt, checkup_schema, consultation_prompt, consultation_schema, SYSTEM_PROMPT,
};
use super::reply::{parse_checkup_reply, parse_consultation_reply};
use crate::domain::clinic::{AnalysisResult, ConsultationKind, HealthMetrics};
use crate::domain::foundation::SessionId;
use crate::ports::{
    AIProvider, AnalysisGateway, CompletionRequest, FinishReason, GatewayError, MessageRole,
    RequestMetadata, ResponseSchema,
};

/// Upper bound on reply length; a diagnosis is a few short paragraphs.
const MAX_REPLY_TOKENS: u32 = 2048;

/// Analysis gateway that asks a hosted model for a structured diagnosis.
pub struct LlmAnalysisGateway {
    provider: Arc<dyn AIProvider>,
    temperature: Option<f32>,
}

impl LlmAnalysisGateway {
    /// Creates a gateway using the provider's default temperature.
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            temperature: None,
        }
    }

    /// Overrides the sampling temperature.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    fn build_request(
        &self,
        session_id: SessionId,
        prompt: String,
        schema: ResponseSchema,
    ) -> CompletionRequest {
        let request = CompletionRequest::new(RequestMetadata::for_session(session_id))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, prompt)
            .with_max_tokens(MAX_REPLY_TOKENS)
            .with_response_schema(schema);
        match self.temperature {
            Some(t) => request.with_temperature(t),
            None => request,
        }
    }

    /// Sends the request and returns the raw reply text.
    async fn ask(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let trace_id = request.metadata.trace_id.clone();
        let response = self.provider.complete(request).await.map_err(|e| {
            tracing::warn!(trace_id = %trace_id, error = %e, "Analysis request failed");
            GatewayError::from(e)
        })?;

        tracing::debug!(
            trace_id = %trace_id,
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "Analysis reply received"
        );
        if response.finish_reason == FinishReason::Length {
            tracing::warn!(trace_id = %trace_id, "Analysis reply truncated at token limit");
        }

        Ok(response.content)
    }
}

#[async_trait]
impl AnalysisGateway for LlmAnalysisGateway {
    async fn analyze(
        &self,
        session_id: SessionId,
        kind: ConsultationKind,
        symptoms: &[String],
    ) -> Result<AnalysisResult, GatewayError> {
        let request = self.build_request(
            session_id,
            consultation_prompt(kind, symptoms),
            consultation_schema(),
        );
        let text = self.ask(request).await?;
        parse_consultation_reply(&text)
    }

    async fn checkup(
        &self,
        session_id: SessionId,
        metrics: &HealthMetrics,
    ) -> Result<AnalysisResult, GatewayError> {
        let request = self.build_request(session_id, checkup_prompt(metrics), checkup_schema());
        let text = self.ask(request).await?;
        parse_checkup_reply(&text)
    }
}
