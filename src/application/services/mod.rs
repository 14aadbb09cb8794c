//! Application services

pub mod form_service;

pub use form_service::{FilteredForm, FormService};
