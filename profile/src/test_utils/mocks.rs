//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::ports::{entry_size, KeyValueStorage, Notifier};
use crate::error::StorageError;

// ============================================================================
// In-Memory Storage
// ============================================================================

pub struct InMemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
    quota: usize,
    fail_reads: bool,
    fail_writes: bool,
    writes: AtomicUsize,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self {
            slots: Arc::default(),
            quota: usize::MAX,
            fail_reads: false,
            fail_writes: false,
            writes: AtomicUsize::new(0),
        }
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, bypassing the quota
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.slots
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Cap the total size of keys plus values
    pub fn with_quota(mut self, quota: usize) -> Self {
        self.quota = quota;
        self
    }

    /// Every `get` fails with an I/O error
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every `set` and `remove` fails with an I/O error
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Peek at a slot without going through the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.read().unwrap().get(key).cloned()
    }

    /// Number of successful `set` and `remove` calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn io_error(op: &str) -> StorageError {
        StorageError::Io(io::Error::new(
            io::ErrorKind::Other,
            format!("simulated {} failure", op),
        ))
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(Self::io_error("read"));
        }
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(Self::io_error("write"));
        }

        let mut slots = self.slots.write().unwrap();
        let others: usize = slots
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| entry_size(k, v))
            .sum();
        let needed = others + entry_size(key, value);
        if needed > self.quota {
            return Err(StorageError::QuotaExceeded {
                needed,
                quota: self.quota,
            });
        }

        slots.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(Self::io_error("write"));
        }
        self.slots.write().unwrap().remove(key);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Recording Notifier
// ============================================================================

/// Keeps every warning instead of printing it
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn quota_counts_keys_and_values() {
        let storage = InMemoryStorage::new().with_quota(10);

        assert!(storage.set("ab", "12345678").await.is_ok());
        let err = storage.set("c", "1").await.unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(storage.raw("c"), None);

        // Replacing a slot only counts the new value
        assert!(storage.set("ab", "87654321").await.is_ok());
        assert_eq!(storage.write_count(), 2);
    }
}
