//! Gemini Provider - Implementation of AIProvider for Google's Generative Language API.
//!
//! Uses `models/{model}:generateContent` with `responseMimeType` set to
//! `application/json` and a `responseSchema` whenever the request carries
//! one, so the model is constrained to the diagnosis shape.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key).with_model("gemini-2.5-flash");
//! let provider = GeminiProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::time::Duration;

use super::http_status::{check_status, map_send_error};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, ResponseSchema, TokenUsage,
};

/// Default model used by the clinic.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Default API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
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

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Converts our request to Gemini's format.
    fn to_gemini_request(&self, request: &CompletionRequest) -> GeminiRequest {
        let mut system_parts: Vec<GeminiPart> = request
            .system_prompt
            .iter()
            .map(|text| GeminiPart { text: text.clone() })
            .collect();
        let mut contents = Vec::new();

        for msg in &request.messages {
            let role = match msg.role {
                MessageRole::System => {
                    system_parts.push(GeminiPart {
                        text: msg.content.clone(),
                    });
                    continue;
                }
                MessageRole::User => "user",
                MessageRole::Assistant => "model",
            };
            contents.push(GeminiContent {
                role: Some(role.to_string()),
                parts: vec![GeminiPart {
                    text: msg.content.clone(),
                }],
            });
        }

        let (response_mime_type, response_schema) = match request.response_schema {
            Some(ref schema) => (
                Some("application/json".to_string()),
                Some(gemini_schema(schema)),
            ),
            None => (None, None),
        };

        GeminiRequest {
            contents,
            system_instruction: if system_parts.is_empty() {
                None
            } else {
                Some(GeminiContent {
                    role: None,
                    parts: system_parts,
                })
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
                response_mime_type,
                response_schema,
            },
        }
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let body = self.to_gemini_request(&request);
        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            model = %self.config.model,
            "Sending Gemini generateContent request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.config.timeout))?;
        let response = check_status(response).await?;

        let text = response
            .text()
            .await
            .map_err(|e| AIError::network(format!("Failed to read response: {}", e)))?;
        parse_generate_response(&text, &self.config.model)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model).with_response_schema(true)
    }
}

/// Translates a response schema into Gemini's OpenAPI-subset dialect.
fn gemini_schema(schema: &ResponseSchema) -> Value {
    let mut properties = Map::new();
    for field in &schema.fields {
        let mut property = Map::new();
        property.insert("type".to_string(), json!("STRING"));
        if let Some(ref description) = field.description {
            property.insert("description".to_string(), json!(description));
        }
        properties.insert(field.name.clone(), Value::Object(property));
    }
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": schema.required_fields(),
    })
}

/// Parses a `generateContent` response body.
fn parse_generate_response(body: &str, requested_model: &str) -> Result<CompletionResponse, AIError> {
    let parsed: GeminiResponse = serde_json::from_str(body)
        .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

    let Some(candidate) = parsed.candidates.into_iter().next() else {
        if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AIError::content_filtered(reason));
        }
        return Err(AIError::parse("No candidates in response"));
    };

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") | Some("PROHIBITED_CONTENT") => {
            FinishReason::ContentFilter
        }
        Some("STOP") | None => FinishReason::Stop,
        Some(_) => FinishReason::Error,
    };
    if finish_reason == FinishReason::ContentFilter {
        return Err(AIError::content_filtered(
            candidate.finish_reason.unwrap_or_default(),
        ));
    }

    let content = candidate
        .content
        .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    let usage = parsed
        .usage_metadata
        .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content,
        usage,
        model: parsed
            .model_version
            .unwrap_or_else(|| requested_model.to_string()),
        finish_reason,
    })
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
    model_version: Option<String>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::ports::RequestMetadata;

    fn provider() -> GeminiProvider {
        GeminiProvider::new(GeminiConfig::new("test-key")).unwrap()
    }

    fn schema() -> ResponseSchema {
        ResponseSchema::object("diagnosis")
            .required("condition", "summary")
            .required("cause", "cause")
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(SessionId::new(), "trace"))
            .with_system_prompt("You are a celestial physician.")
            .with_message(MessageRole::User, "Headache")
            .with_temperature(0.4)
            .with_response_schema(schema())
    }

    #[test]
    fn config_builder_works() {
        let config = GeminiConfig::new("test-key")
            .with_model("gemini-2.5-pro")
            .with_base_url("https://proxy.example.com/v1beta/")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");

        let provider = GeminiProvider::new(config).unwrap();
        assert_eq!(
            provider.generate_url(),
            "https://proxy.example.com/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }

    #[test]
    fn request_carries_schema_and_system_instruction() {
        let body = serde_json::to_value(provider().to_gemini_request(&request())).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Headache");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are a celestial physician."
        );
        assert!(body["systemInstruction"].get("role").is_none());

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "OBJECT");
        assert_eq!(config["responseSchema"]["properties"]["cause"]["type"], "STRING");
        assert_eq!(config["responseSchema"]["required"], json!(["condition", "cause"]));
        assert!(config.get("maxOutputTokens").is_none());
    }

    #[test]
    fn request_without_schema_omits_mime_type() {
        let plain = CompletionRequest::new(RequestMetadata::new(SessionId::new(), "trace"))
            .with_message(MessageRole::User, "Hi");
        let body = serde_json::to_value(provider().to_gemini_request(&plain)).unwrap();
        assert!(body["generationConfig"].get("responseMimeType").is_none());
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn parses_candidate_text_and_usage() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"condition\":"}, {"text": "\"A\"}"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 8, "totalTokenCount": 20},
            "modelVersion": "gemini-3-flash-preview-001"
        }"#;

        let response = parse_generate_response(body, "gemini-3-flash-preview").unwrap();
        assert_eq!(response.content, r#"{"condition":"A"}"#);
        assert_eq!(response.usage, TokenUsage::new(12, 8));
        assert_eq!(response.model, "gemini-3-flash-preview-001");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn blocked_prompt_is_content_filtered() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let err = parse_generate_response(body, "m").unwrap_err();
        assert!(matches!(err, AIError::ContentFiltered { .. }));
    }

    #[test]
    fn safety_finish_is_content_filtered() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        assert!(matches!(
            parse_generate_response(body, "m"),
            Err(AIError::ContentFiltered { .. })
        ));
    }

    #[test]
    fn max_tokens_finish_is_length() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "{"}]}, "finishReason": "MAX_TOKENS"}]}"#;
        let response = parse_generate_response(body, "m").unwrap();
        assert_eq!(response.finish_reason, FinishReason::Length);
        assert_eq!(response.model, "m");
    }

    #[test]
    fn garbage_body_is_parse_error() {
        assert!(matches!(
            parse_generate_response("<html>", "m"),
            Err(AIError::Parse(_))
        ));
    }

    #[test]
    fn provider_info_reports_schema_support() {
        let info = provider().provider_info();
        assert_eq!(info.name, "gemini");
        assert_eq!(info.model, DEFAULT_GEMINI_MODEL);
        assert!(info.supports_response_schema);
    }
}
