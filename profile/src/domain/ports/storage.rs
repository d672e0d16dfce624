//! Storage port trait
//!
//! A durable set of string slots addressed by key, in the shape of browser
//! local storage. Implementations are provided by adapters.

use async_trait::async_trait;

use crate::error::StorageError;

/// Durable key-value storage with whole-value writes
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read a slot, `None` if it was never written or has been removed
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot.
    ///
    /// Fails with `StorageError::QuotaExceeded` when the write would push the
    /// total stored size past the backend's capacity; the previous value is
    /// then left in place.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Bytes a slot counts against the quota
pub fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}
