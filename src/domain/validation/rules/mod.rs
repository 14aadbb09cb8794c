//! Built-in rules, grouped by concern. Each submodule exposes a
//! `register_*` function that adds its rules to a [`RuleRegistry`].
//!
//! [`RuleRegistry`]: super::registry::RuleRegistry

pub mod comparison;
pub mod format;
pub mod length;
pub mod lookup;
pub mod presence;
pub mod security;
