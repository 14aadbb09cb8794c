//! Application configuration structures
//!
//! This module contains the configuration structures for the crate and
//! their loading from files and environment variables.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::validation::UnknownRulePolicy;
use crate::shared::error::AppError;

/// Validation engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ValidationConfig {
    /// Handling of rule names missing from the registry
    pub unknown_rules: UnknownRulePolicy,

    /// Budget for each uniqueness lookup in milliseconds (unbounded when unset)
    #[validate(range(min = 1, max = 60000))]
    pub lookup_timeout_ms: Option<u64>,

    /// Message templates replacing the built-in ones, keyed by rule name
    pub messages: HashMap<String, String>,
}

impl ValidationConfig {
    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_ms.map(Duration::from_millis)
    }
}

/// Sanitization configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SanitizationConfig {
    /// Trim surrounding whitespace from every cleaned string
    pub trim: bool,
}

impl Default for SanitizationConfig {
    fn default() -> Self {
        Self { trim: true }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format ("full" or "compact")
    #[validate(length(min = 1))]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "full".to_string(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub validation: ValidationConfig,
    pub sanitization: SanitizationConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional `Fieldcheck.*` file and
    /// `FIELDCHECK__SECTION__KEY` environment variables
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("Fieldcheck").required(false))
            .add_source(config::Environment::with_prefix("FIELDCHECK").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.check()?;

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(source: &str) -> crate::Result<Self> {
        let config: AppConfig = toml::from_str(source)?;
        config.check()?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.validation.validate()?;
        self.sanitization.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    fn check(&self) -> crate::Result<()> {
        self.validate_config()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;
        super::ConfigValidator::validate_config(self)
    }
}
