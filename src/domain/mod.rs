//! Domain layer - rule evaluation and value cleaning
//!
//! This module contains the validation engine and the sanitization
//! filters. Nothing here performs I/O; the `unique` rule reaches storage
//! only through the injected [`UniquenessLookup`] port.

pub mod sanitization;
pub mod validation;

pub use sanitization::{sanitize, FilterKind, OutputMap, SanitizationSpec};
pub use validation::{
    ErrorMap, FieldRules, InputData, MessageOverrides, RuleRegistry, UniquenessLookup,
    UnknownRulePolicy, Validator,
};
