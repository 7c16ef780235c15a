//! OpenAI Provider - Implementation of AIProvider for OpenAI's chat API.
//!
//! Structured replies use `response_format: json_schema`; the schema is sent
//! in strict mode when every property is required, which is what the
//! structured-output endpoint demands.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-4o")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAIProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::http_status::{check_status, map_send_error};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, ResponseSchema, TokenUsage,
};

/// Default chat model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4o-mini", "gpt-4o").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new OpenAI provider with the given configuration.
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Converts our request to OpenAI's format.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let mut messages = Vec::new();

        if let Some(ref prompt) = request.system_prompt {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: Some(prompt.clone()),
                refusal: None,
            });
        }

        for msg in &request.messages {
            messages.push(OpenAIMessage {
                role: match msg.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                }
                .to_string(),
                content: Some(msg.content.clone()),
                refusal: None,
            });
        }

        OpenAIRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: request.response_schema.as_ref().map(ResponseFormat::from_schema),
        }
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let body = self.to_openai_request(&request);
        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            model = %self.config.model,
            "Sending OpenAI chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&body)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.config.timeout))?;
        let response = check_status(response).await?;

        let text = response
            .text()
            .await
            .map_err(|e| AIError::network(format!("Failed to read response: {}", e)))?;
        parse_chat_response(&text)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", &self.config.model).with_response_schema(true)
    }
}

/// Parses a non-streaming chat completion body.
fn parse_chat_response(body: &str) -> Result<CompletionResponse, AIError> {
    let openai_response: OpenAIResponse = serde_json::from_str(body)
        .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

    let choice = openai_response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AIError::parse("No choices in response"))?;

    if let Some(refusal) = choice.message.refusal {
        return Err(AIError::content_filtered(refusal));
    }

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    };

    let usage = openai_response
        .usage
        .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content: choice.message.content.unwrap_or_default(),
        usage,
        model: openai_response.model,
        finish_reason,
    })
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

impl ResponseFormat {
    fn from_schema(schema: &ResponseSchema) -> Self {
        Self {
            kind: "json_schema",
            json_schema: JsonSchemaFormat {
                name: schema.name.clone(),
                strict: schema.all_required(),
                schema: schema.to_json_schema(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: String,
    strict: bool,
    schema: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::ports::RequestMetadata;

    fn provider() -> OpenAIProvider {
        OpenAIProvider::new(OpenAIConfig::new("test-key")).unwrap()
    }

    fn request(schema: ResponseSchema) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(SessionId::new(), "trace"))
            .with_system_prompt("You are a celestial physician.")
            .with_message(MessageRole::User, "Insomnia")
            .with_max_tokens(512)
            .with_response_schema(schema)
    }

    #[test]
    fn config_builder_works() {
        let config = OpenAIConfig::new("test-key")
            .with_model("gpt-4o")
            .with_base_url("https://custom.api.com/")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");

        let provider = OpenAIProvider::new(config).unwrap();
        assert_eq!(
            provider.completions_url(),
            "https://custom.api.com/chat/completions"
        );
    }

    #[test]
    fn request_uses_strict_json_schema_when_all_fields_required() {
        let schema = ResponseSchema::object("diagnosis")
            .required("condition", "summary")
            .required("cause", "cause");
        let body = serde_json::to_value(provider().to_openai_request(&request(schema))).unwrap();

        assert_eq!(body["model"], DEFAULT_OPENAI_MODEL);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "Insomnia");
        assert!(body["messages"][1].get("refusal").is_none());
        assert_eq!(body["max_tokens"], 512);

        let format = &body["response_format"];
        assert_eq!(format["type"], "json_schema");
        assert_eq!(format["json_schema"]["name"], "diagnosis");
        assert_eq!(format["json_schema"]["strict"], true);
        assert_eq!(format["json_schema"]["schema"]["type"], "object");
        assert_eq!(format["json_schema"]["schema"]["additionalProperties"], false);
    }

    #[test]
    fn optional_fields_disable_strict_mode() {
        let schema = ResponseSchema::object("diagnosis")
            .required("condition", "summary")
            .optional("tcmAdvice", "herbs");
        let body = serde_json::to_value(provider().to_openai_request(&request(schema))).unwrap();
        assert_eq!(body["response_format"]["json_schema"]["strict"], false);
    }

    #[test]
    fn parses_choice_and_usage() {
        let body = r#"{
            "model": "gpt-4o-mini-2024-07-18",
            "choices": [{"message": {"role": "assistant", "content": "{\"condition\":\"A\"}"}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25}
        }"#;

        let response = parse_chat_response(body).unwrap();
        assert_eq!(response.content, r#"{"condition":"A"}"#);
        assert_eq!(response.usage.total_tokens, 25);
        assert_eq!(response.model, "gpt-4o-mini-2024-07-18");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn refusal_is_content_filtered() {
        let body = r#"{
            "model": "gpt-4o-mini",
            "choices": [{"message": {"role": "assistant", "content": null, "refusal": "I can't help with that."}, "finish_reason": "stop"}]
        }"#;
        assert!(matches!(
            parse_chat_response(body),
            Err(AIError::ContentFiltered { .. })
        ));
    }

    #[test]
    fn empty_choices_is_parse_error() {
        let body = r#"{"model": "gpt-4o-mini", "choices": []}"#;
        assert!(matches!(parse_chat_response(body), Err(AIError::Parse(_))));
    }

    #[test]
    fn length_finish_is_reported() {
        let body = r#"{"model": "m", "choices": [{"message": {"role": "assistant", "content": "{"}, "finish_reason": "length"}]}"#;
        assert_eq!(
            parse_chat_response(body).unwrap().finish_reason,
            FinishReason::Length
        );
    }

    #[test]
    fn provider_info_is_correct() {
        let info = provider().provider_info();
        assert_eq!(info.name, "openai");
        assert_eq!(info.model, DEFAULT_OPENAI_MODEL);
        assert!(info.supports_response_schema);
    }
}
