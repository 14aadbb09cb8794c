//! Infrastructure adapters module
//!
//! This module contains adapters implementing the domain's external ports.

pub mod uniqueness_store;

pub use uniqueness_store::InMemoryUniquenessStore;
