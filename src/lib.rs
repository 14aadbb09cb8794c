//! Fieldcheck - declarative validation and sanitization for form field maps
//!
//! Validation evaluates pipe-delimited rule specs (`"required | between: 3,255"`)
//! against a map of field values and returns the first failure message per
//! field. Sanitization cleans raw values through a closed table of filters.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;


pub use application::{FilteredForm, FormService};
pub use config::AppConfig;
pub use domain::sanitization::{sanitize, FilterKind, OutputMap, SanitizationSpec};
pub use domain::validation::{
    ErrorMap, FieldRules, InputData, MessageOverrides, RuleRegistry, UniquenessLookup,
    UnknownRulePolicy, Validator,
};
pub use infrastructure::InMemoryUniquenessStore;
pub use shared::error::{AppError, AppResult, LookupError};
pub use shared::logging::LoggingUtils;

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
