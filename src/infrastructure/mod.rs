//! Infrastructure layer - adapters for external collaborators

pub mod adapters;

pub use adapters::InMemoryUniquenessStore;
