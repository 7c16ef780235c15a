//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Hosted model providers (Gemini, OpenAI) and a mock
//! - `gateway` - LLM-backed analysis gateway

pub mod ai;
pub mod gateway;

pub use gateway::LlmAnalysisGateway;
