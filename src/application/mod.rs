//! Application layer - services composing the domain
//!
//! This module contains services that orchestrate sanitization and
//! validation for callers that handle whole form submissions.

pub mod services;

pub use services::*;
