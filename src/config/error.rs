//! Configuration error types

use thiserror::Error;

use crate::ports::AIError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("AI provider setup failed: {0}")]
    ProviderSetup(#[from] AIError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Model name must not be blank")]
    BlankModel,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
