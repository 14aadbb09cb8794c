//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::shared::error::AppError;

/// Logging utilities for the crate
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and output format.
    ///
    /// `RUST_LOG` takes precedence over `level` when set. `format` is either
    /// `"full"` (file and line numbers) or `"compact"`.
    pub fn initialize(level: &str, format: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let verbose = format != "compact";
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(verbose)
            .with_line_number(verbose)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log a rule that rejected a field value
    pub fn log_rule_failure(field: &str, rule: &str, message: &str) {
        debug!(
            field = %field,
            rule = %rule,
            message = %message,
            "Rule rejected field"
        );
    }

    /// Log an unknown rule that was ignored under the legacy policy
    pub fn log_skipped_rule(field: &str, rule: &str) {
        warn!(
            field = %field,
            rule = %rule,
            "Skipping unknown rule"
        );
    }

    /// Log a uniqueness lookup that could not be answered
    pub fn log_lookup_failure(table: &str, column: &str, reason: &str) {
        warn!(
            table = %table,
            column = %column,
            reason = %reason,
            "Uniqueness lookup unavailable"
        );
    }

    /// Log the outcome of a validation call
    pub fn log_validation_summary(fields: usize, errors: usize, elapsed: Duration) {
        info!(
            fields = %fields,
            errors = %errors,
            duration_us = %elapsed.as_micros(),
            "Validation completed"
        );
    }

    /// Log the outcome of a sanitization call
    pub fn log_sanitization_summary(inputs: usize, outputs: usize) {
        debug!(
            inputs = %inputs,
            outputs = %outputs,
            "Sanitization completed"
        );
    }
}
