//! Configuration management for the `TravelMAX` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings. The Groq API
//! credential is additionally sourced from the `GROQ_API_KEY` environment
//! variable so deployments only need the one secret set.

use crate::TravelMaxError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the Groq API credential
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Root configuration structure for the `TravelMAX` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelMaxConfig {
    /// Completion API configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Completion API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Groq API key; normally sourced from `GROQ_API_KEY`
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible completion endpoint
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,
    /// Maximum completion tokens per request
    #[serde(default = "default_llm_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout")]
    pub timeout_seconds: u32,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the web server listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_llm_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_llm_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_llm_temperature() -> f32 {
    0.7
}

fn default_llm_max_tokens() -> u32 {
    2048
}

fn default_llm_timeout() -> u32 {
    60
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            temperature: default_llm_temperature(),
            max_tokens: default_llm_max_tokens(),
            timeout_seconds: default_llm_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for TravelMaxConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl LlmConfig {
    /// Return the API key, or a configuration error if it is absent.
    ///
    /// The credential is required before any request is attempted; callers
    /// surface the returned message to the user without contacting the API.
    pub fn require_api_key(&self) -> crate::Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(TravelMaxError::config(format!(
                "{GROQ_API_KEY_VAR} is not set. Export it before starting the server."
            ))),
        }
    }
}

impl TravelMaxConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRAVELMAX_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRAVELMAX")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelMaxConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // The credential lives in its own well-known variable
        if config.llm.api_key.is_none() {
            config.llm.api_key = std::env::var(GROQ_API_KEY_VAR).ok();
        }

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelmax").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.llm.base_url.is_empty() {
            self.llm.base_url = default_llm_base_url();
        }
        if self.llm.model.is_empty() {
            self.llm.model = default_llm_model();
        }
        if self.llm.max_tokens == 0 {
            self.llm.max_tokens = default_llm_max_tokens();
        }
        if self.llm.timeout_seconds == 0 {
            self.llm.timeout_seconds = default_llm_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the API credential if one is present.
    ///
    /// Absence is checked separately at startup via
    /// [`LlmConfig::require_api_key`] so that configuration files without a
    /// key still load for tooling and tests.
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.llm.api_key {
            if api_key.trim().is_empty() {
                return Err(TravelMaxError::config(
                    "Groq API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 {
                return Err(TravelMaxError::config(
                    "Groq API key appears to be invalid (too short). Please check your API key."
                ).into());
            }

            if api_key.len() > 200 {
                return Err(TravelMaxError::config(
                    "Groq API key appears to be invalid (too long). Please check your API key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.llm.timeout_seconds > 300 {
            return Err(TravelMaxError::config(
                "Completion API timeout cannot exceed 300 seconds"
            ).into());
        }

        if self.llm.max_tokens > 32768 {
            return Err(TravelMaxError::config(
                "Completion max_tokens cannot exceed 32768"
            ).into());
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(TravelMaxError::config(
                "Completion temperature must be between 0.0 and 2.0"
            ).into());
        }

        if self.server.port == 0 {
            return Err(TravelMaxError::config("Server port cannot be 0").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelMaxError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelMaxError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        if !self.llm.base_url.starts_with("http://") && !self.llm.base_url.starts_with("https://") {
            return Err(TravelMaxError::config(
                "Completion API base URL must be a valid HTTP or HTTPS URL"
            ).into());
        }

        if self.llm.model.trim().is_empty() {
            return Err(TravelMaxError::config("Completion model identifier cannot be empty").into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TravelMaxConfig::default();
        assert_eq!(config.llm.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.llm.timeout_seconds, 60);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_missing_api_key_is_reported_before_any_request() {
        let config = TravelMaxConfig::default();
        let result = config.llm.require_api_key();
        assert!(result.is_err());
        assert!(result.unwrap_err().user_message().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_validation_accepts_valid_api_key() {
        let mut config = TravelMaxConfig::default();
        config.llm.api_key = Some("gsk_valid_api_key_123".to_string());
        assert!(config.validate_api_key().is_ok());
        assert_eq!(config.llm.require_api_key().unwrap(), "gsk_valid_api_key_123");
    }

    #[test]
    fn test_validation_rejects_short_api_key() {
        let mut config = TravelMaxConfig::default();
        config.llm.api_key = Some("short".to_string());
        let result = config.validate_api_key();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too short"));
    }

    #[test]
    fn test_validation_rejects_invalid_log_level() {
        let mut config = TravelMaxConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_validation_numeric_ranges() {
        let mut config = TravelMaxConfig::default();
        config.llm.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));

        let mut config = TravelMaxConfig::default();
        config.llm.temperature = 3.5;
        assert!(config.validate().is_err());

        let mut config = TravelMaxConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_http_base_url() {
        let mut config = TravelMaxConfig::default();
        config.llm.base_url = "ftp://example.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HTTP or HTTPS"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = TravelMaxConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("travelmax"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
