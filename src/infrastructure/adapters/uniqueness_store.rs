//! In-memory uniqueness store
//!
//! Answers `unique: table,column` rules from a set of known values. Useful
//! for tests and for small deployments that preload taken values.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::validation::UniquenessLookup;
use crate::shared::error::LookupError;

type Column = (String, String);

#[derive(Clone, Default)]
pub struct InMemoryUniquenessStore {
    values: Arc<RwLock<HashMap<Column, HashSet<String>>>>,
    offline: Arc<RwLock<bool>>,
}

impl InMemoryUniquenessStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(table: &str, column: &str) -> Column {
        (table.to_string(), column.to_string())
    }

    /// Mark a value as taken
    pub async fn insert(&self, table: &str, column: &str, value: &str) {
        self.values
            .write()
            .await
            .entry(Self::key(table, column))
            .or_default()
            .insert(value.to_string());
    }

    pub async fn remove(&self, table: &str, column: &str, value: &str) -> bool {
        self.values
            .write()
            .await
            .get_mut(&Self::key(table, column))
            .is_some_and(|taken| taken.remove(value))
    }

    /// While offline every lookup fails, as a disconnected backend would
    pub async fn set_offline(&self, offline: bool) {
        *self.offline.write().await = offline;
    }
}

#[async_trait]
impl UniquenessLookup for InMemoryUniquenessStore {
    async fn exists(&self, table: &str, column: &str, value: &str) -> Result<bool, LookupError> {
        if *self.offline.read().await {
            return Err(LookupError(format!("store for {}.{} is offline", table, column)));
        }

        Ok(self
            .values
            .read()
            .await
            .get(&Self::key(table, column))
            .is_some_and(|taken| taken.contains(value)))
    }
}
