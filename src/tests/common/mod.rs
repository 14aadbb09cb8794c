//! Common test utilities and mock implementations

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::validation::{InputData, UniquenessLookup};
use crate::shared::error::LookupError;

/// Lookup that records every question and answers from a fixed set
pub struct RecordingLookup {
    taken: Vec<(String, String, String)>,
    calls: Arc<Mutex<HashMap<String, u32>>>,
}

impl RecordingLookup {
    pub fn new(taken: &[(&str, &str, &str)]) -> Self {
        Self {
            taken: taken
                .iter()
                .map(|(t, c, v)| (t.to_string(), c.to_string(), v.to_string()))
                .collect(),
            calls: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of lookups made against `table.column`
    pub async fn call_count(&self, table: &str, column: &str) -> u32 {
        let calls = self.calls.lock().await;
        *calls.get(&format!("{}.{}", table, column)).unwrap_or(&0)
    }
}

#[async_trait]
impl UniquenessLookup for RecordingLookup {
    async fn exists(&self, table: &str, column: &str, value: &str) -> Result<bool, LookupError> {
        {
            let mut calls = self.calls.lock().await;
            *calls.entry(format!("{}.{}", table, column)).or_insert(0) += 1;
        }

        Ok(self
            .taken
            .iter()
            .any(|(t, c, v)| t == table && c == column && v == value))
    }
}

/// Build input data from literal pairs
pub fn input(pairs: &[(&str, &str)]) -> InputData {
    pairs.iter().copied().collect()
}

/// Assertion helpers
pub mod assertions {
    use crate::domain::validation::ErrorMap;

    /// Assert a field failed with a message containing every fragment
    pub fn assert_error_mentions(errors: &ErrorMap, field: &str, fragments: &[&str]) {
        let message = errors
            .get(field)
            .unwrap_or_else(|| panic!("expected an error for {field}, got {errors:?}"));
        for fragment in fragments {
            assert!(
                message.contains(fragment),
                "message for {field} ({message:?}) does not mention {fragment:?}"
            );
        }
    }
}
