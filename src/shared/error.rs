//! Error handling module
//!
//! This module provides centralized error handling for the crate. Ordinary
//! validation failures are never errors; they are returned in an `ErrorMap`.
//! The variants here cover programmer errors (bad rule specs, unknown rules
//! or filters) and failures of external collaborators.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Malformed rule '{spec}': {reason}")]
    MalformedRule { spec: String, reason: String },

    #[error("Unknown rule '{rule}' declared for field {field}")]
    UnknownRule { field: String, rule: String },

    #[error("Uniqueness lookup on {table}.{column} unavailable: {reason}")]
    LookupUnavailable { table: String, column: String, reason: String },

    #[error("Unknown filter '{filter}' declared for field {field}")]
    UnknownFilter { field: String, filter: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a malformed rule error
    pub fn malformed(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::MalformedRule {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by the rule declarations rather than
    /// by a collaborator or the environment
    pub fn is_declaration_error(&self) -> bool {
        matches!(
            self,
            AppError::MalformedRule { .. }
                | AppError::UnknownRule { .. }
                | AppError::UnknownFilter { .. }
        )
    }
}

/// Failure reported by a uniqueness lookup backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct LookupError(pub String);

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}
