//! File-backed key-value storage
//!
//! All slots live in one JSON object on disk. The file is read lazily on
//! first access and rewritten in full on every mutation, through a temp file
//! renamed over the original so a crash never leaves a half-written store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ports::{entry_size, KeyValueStorage};
use crate::error::StorageError;

type Slots = BTreeMap<String, String>;

/// Local-storage style key-value store persisted to a JSON file
pub struct FileKeyValueStorage {
    path: PathBuf,
    quota: usize,
    slots: Mutex<Option<Slots>>,
}

impl FileKeyValueStorage {
    pub fn new(path: impl Into<PathBuf>, quota: usize) -> Self {
        Self {
            path: path.into(),
            quota,
            slots: Mutex::new(None),
        }
    }

    async fn read_slots(&self) -> Result<Slots, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Slots::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                StorageError::Corrupt(format!("{}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No storage file at {}, starting empty", self.path.display());
                Ok(Slots::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_slots(&self, slots: &Slots) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let body = serde_json::to_vec_pretty(slots)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        let written = match tokio::fs::write(&tmp, &body).await {
            Ok(()) => tokio::fs::rename(&tmp, &self.path).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to remove {}: {}", tmp.display(), cleanup);
                }
            }
            return Err(e.into());
        }
        Ok(())
    }
}

/// Total quota usage of `slots` once `key` holds `value`
fn usage_with(slots: &Slots, key: &str, value: &str) -> usize {
    slots
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| entry_size(k, v))
        .sum::<usize>()
        + entry_size(key, value)
}

#[async_trait]
impl KeyValueStorage for FileKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut guard = self.slots.lock().await;
        if guard.is_none() {
            *guard = Some(self.read_slots().await?);
        }
        Ok(guard.as_ref().and_then(|slots| slots.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.slots.lock().await;
        let mut slots = match guard.take() {
            Some(slots) => slots,
            None => self.read_slots().await?,
        };

        let needed = usage_with(&slots, key, value);
        if needed > self.quota {
            tracing::warn!(
                key,
                needed,
                quota = self.quota,
                "Refusing write past storage quota"
            );
            *guard = Some(slots);
            return Err(StorageError::QuotaExceeded {
                needed,
                quota: self.quota,
            });
        }

        let previous = slots.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write_slots(&slots).await {
            match previous {
                Some(old) => slots.insert(key.to_string(), old),
                None => slots.remove(key),
            };
            *guard = Some(slots);
            return Err(e);
        }

        *guard = Some(slots);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self.slots.lock().await;
        let mut slots = match guard.take() {
            Some(slots) => slots,
            None => self.read_slots().await?,
        };

        let result = match slots.remove(key) {
            Some(old) => {
                let written = self.write_slots(&slots).await;
                if written.is_err() {
                    slots.insert(key.to_string(), old);
                }
                written
            }
            None => Ok(()),
        };

        *guard = Some(slots);
        result
    }
}
