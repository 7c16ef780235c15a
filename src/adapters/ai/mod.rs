//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for various LLM providers.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `GeminiProvider` - Google Gemini models via `generateContent`
//! - `OpenAIProvider` - OpenAI chat models with JSON-schema output
//!
//! [`provider_from_config`] picks one according to [`AiConfig`](crate::config::AiConfig).

mod factory;
mod gemini_provider;
mod http_status;
mod mock_provider;
mod openai_provider;

pub use factory::provider_from_config;
pub use gemini_provider::{
    GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{
    OpenAIConfig, OpenAIProvider, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
};
