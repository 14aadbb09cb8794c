//! Configuration validation module
//!
//! This module provides validation logic for configuration beyond the
//! per-field checks of the validator crate.

use crate::config::app_config::{LoggingConfig, ValidationConfig};
use crate::config::AppConfig;
use crate::domain::validation::RuleRegistry;
use crate::shared::error::AppError;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
const LOG_FORMATS: [&str; 2] = ["full", "compact"];

/// Configuration validator for cross-field checks
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_messages(&config.validation)?;
        Self::validate_logging(&config.logging)?;

        Ok(())
    }

    /// Message overrides must name registered rules
    fn validate_messages(validation: &ValidationConfig) -> crate::Result<()> {
        let registry = RuleRegistry::builtin();
        for (rule, template) in &validation.messages {
            if !registry.has_rule(rule) {
                return Err(AppError::Validation(format!(
                    "Message configured for unknown rule: {}",
                    rule
                )));
            }

            if !template.contains("%s") {
                tracing::warn!(rule = %rule, "Configured message does not mention the field name");
            }
        }

        Ok(())
    }

    /// Validate logging configuration
    fn validate_logging(logging: &LoggingConfig) -> crate::Result<()> {
        // Filter directives such as "fieldcheck=debug" are passed through as-is.
        let level = logging.level.to_ascii_lowercase();
        if !level.contains('=') && !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid log level: {}",
                logging.level
            )));
        }

        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid log format: {}",
                logging.format
            )));
        }

        Ok(())
    }
}
