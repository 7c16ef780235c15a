//! LLM-backed implementation of the analysis gateway.
//!
//! - `prompts` - deterministic prompt text and reply schemas
//! - `reply` - parsing and required-field validation of model output
//! - `llm_gateway` - the `AnalysisGateway` adapter over any `AIProvider`

mod llm_gateway;
mod prompts;
mod reply;

pub use llm_gateway::LlmAnalysisGateway;
pub use prompts::{checkup_prompt, checkup_schema, consultation_prompt, consultation_schema, SYSTEM_PROMPT};
pub use reply::{parse_checkup_reply, parse_consultation_reply};
