//! Builds the configured AI provider.

use std::sync::Arc;

use super::{GeminiConfig, GeminiProvider, MockAIProvider, OpenAIConfig, OpenAIProvider};
use crate::config::{AiConfig, AiProvider, ConfigError, ValidationError};
use crate::ports::AIProvider;

/// Creates the provider selected by `config.provider`.
///
/// # Errors
///
/// Returns `ConfigError::ValidationFailed` when the configuration is
/// invalid for the chosen provider, or `ConfigError::ProviderSetup` when
/// the HTTP client cannot be built.
pub fn provider_from_config(config: &AiConfig) -> Result<Arc<dyn AIProvider>, ConfigError> {
    config.validate()?;

    let provider: Arc<dyn AIProvider> = match config.provider {
        AiProvider::Gemini => {
            let key = config
                .gemini_api_key
                .clone()
                .ok_or(ValidationError::MissingRequired("GEMINI_API_KEY"))?;
            let mut gemini = GeminiConfig::new(key).with_timeout(config.timeout());
            if let Some(ref model) = config.model {
                gemini = gemini.with_model(model);
            }
            if let Some(ref url) = config.base_url {
                gemini = gemini.with_base_url(url);
            }
            Arc::new(GeminiProvider::new(gemini)?)
        }
        AiProvider::OpenAI => {
            let key = config
                .openai_api_key
                .clone()
                .ok_or(ValidationError::MissingRequired("OPENAI_API_KEY"))?;
            let mut openai = OpenAIConfig::new(key).with_timeout(config.timeout());
            if let Some(ref model) = config.model {
                openai = openai.with_model(model);
            }
            if let Some(ref url) = config.base_url {
                openai = openai.with_base_url(url);
            }
            Arc::new(OpenAIProvider::new(openai)?)
        }
        AiProvider::Mock => Arc::new(MockAIProvider::new()),
    };

    let info = provider.provider_info();
    tracing::info!(provider = %info.name, model = %info.model, "AI provider configured");
    Ok(provider)
}
