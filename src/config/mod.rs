//! Configuration management module
//!
//! This module handles loading and validating engine, sanitization and
//! logging settings.

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, LoggingConfig, SanitizationConfig, ValidationConfig};
pub use validation::ConfigValidator;
