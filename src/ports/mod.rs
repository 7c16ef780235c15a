//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Hosted generative model (Gemini, OpenAI, mock)
//! - `AnalysisGateway` - Turns symptoms or metrics into an `AnalysisResult`

mod ai_provider;
mod analysis_gateway;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, ResponseSchema, SchemaField, TokenUsage,
};
pub use analysis_gateway::{AnalysisGateway, GatewayError};
