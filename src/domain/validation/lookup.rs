use async_trait::async_trait;

use crate::shared::error::LookupError;

/// Port used by the `unique` rule to ask whether a value is already taken.
///
/// Implementations typically query a persistence layer. An `Err` means the
/// question could not be answered and is never read as "value is unique".
#[async_trait]
pub trait UniquenessLookup: Send + Sync {
    async fn exists(&self, table: &str, column: &str, value: &str) -> Result<bool, LookupError>;
}
