//! Sanitization module
//!
//! Converts raw input values into cleaned scalar or sequence forms using a
//! closed table of filters. Sanitization never judges a value; see the
//! validation module for that.

pub mod types;
pub mod filters;
pub mod sanitizer;

pub use types::{FilterDescriptor, FilterKind, FilterShape, SanitizationSpec, ScalarFilter};
pub use filters::strip_tags;
pub use sanitizer::{apply_filter, sanitize, trim_value, OutputMap};
