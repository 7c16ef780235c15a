//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `PILGRIM_CLINIC` prefix
//! and `__` separates nested values.
//!
//! # Example
//!
//! ```no_run
//! use pilgrim_clinic::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod clinic;
mod error;
mod telemetry;

pub use ai::{AiConfig, AiProvider};
pub use clinic::ClinicConfig;
pub use error::{ConfigError, ValidationError};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PILGRIM_CLINIC";

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully;
/// [`AppConfig::validate()`] then reports what is missing for the chosen
/// provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// AI provider configuration (Gemini/OpenAI/mock)
    #[serde(default)]
    pub ai: AiConfig,

    /// Session settings
    #[serde(default)]
    pub clinic: ClinicConfig,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PILGRIM_CLINIC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PILGRIM_CLINIC__AI__PROVIDER=openai` -> `ai.provider = openai`
    /// - `PILGRIM_CLINIC__CLINIC__STARTING_MERIT=20000` -> `clinic.starting_merit = 20000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
