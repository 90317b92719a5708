//! Asset cache contract.
//!
//! Renderers look decoded assets (images, compiled templates) up by key. The
//! host owns one cache, creates it at startup and hands it to whoever needs
//! it. Subscribers are told which key changed.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::mpsc::{Receiver, Sender, channel};
use thiserror::Error;

/// Whether the last load of a key succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileLoadStatus {
    Ok,
    #[default]
    Failed,
}

/// Result of a cache lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct DataEntry<T> {
    pub data: Option<T>,
    pub status: FileLoadStatus,
}

impl<T> DataEntry<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            status: FileLoadStatus::Ok,
        }
    }

    pub fn failed() -> Self {
        Self {
            data: None,
            status: FileLoadStatus::Failed,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == FileLoadStatus::Ok
    }
}

/// Cache errors.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache lock poisoned: {0}")]
    Lock(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Keyed store of loaded assets with change notification.
pub trait AssetCache<T>: Send + Sync {
    /// Entry for `key`; a key never stored or since invalidated reports `Failed`.
    fn get(&self, key: &str) -> CacheResult<DataEntry<T>>;

    /// Store an entry and notify subscribers.
    fn set(&self, key: &str, entry: DataEntry<T>) -> CacheResult<()>;

    /// Drop `key` and notify subscribers.
    fn invalidate(&self, key: &str) -> CacheResult<()>;

    /// Channel receiving the key of every change from now on.
    fn subscribe(&self) -> CacheResult<Receiver<String>>;
}

/// In-process cache.
pub struct MemoryCache<T> {
    entries: RwLock<HashMap<String, DataEntry<T>>>,
    subscribers: RwLock<Vec<Sender<String>>>,
}

impl<T> Default for MemoryCache<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            subscribers: RwLock::new(Vec::new()),
        }
    }
}

impl<T> MemoryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> CacheResult<usize> {
        let entries = self.entries.read().map_err(|e| CacheError::Lock(e.to_string()))?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> CacheResult<bool> {
        Ok(self.len()? == 0)
    }

    fn notify(&self, key: &str) -> CacheResult<()> {
        let mut subscribers = self
            .subscribers
            .write()
            .map_err(|e| CacheError::Lock(e.to_string()))?;
        // Dropped receivers are forgotten.
        subscribers.retain(|tx| tx.send(key.to_string()).is_ok());
        Ok(())
    }
}

impl<T: Clone + Send + Sync> AssetCache<T> for MemoryCache<T> {
    fn get(&self, key: &str) -> CacheResult<DataEntry<T>> {
        let entries = self.entries.read().map_err(|e| CacheError::Lock(e.to_string()))?;
        Ok(entries.get(key).cloned().unwrap_or_else(DataEntry::failed))
    }

    fn set(&self, key: &str, entry: DataEntry<T>) -> CacheResult<()> {
        {
            let mut entries = self.entries.write().map_err(|e| CacheError::Lock(e.to_string()))?;
            entries.insert(key.to_string(), entry);
        }
        log::debug!("cache updated: {key}");
        self.notify(key)
    }

    fn invalidate(&self, key: &str) -> CacheResult<()> {
        let removed = {
            let mut entries = self.entries.write().map_err(|e| CacheError::Lock(e.to_string()))?;
            entries.remove(key).is_some()
        };
        if removed {
            log::debug!("cache invalidated: {key}");
            self.notify(key)?;
        }
        Ok(())
    }

    fn subscribe(&self) -> CacheResult<Receiver<String>> {
        let (tx, rx) = channel();
        self.subscribers
            .write()
            .map_err(|e| CacheError::Lock(e.to_string()))?
            .push(tx);
        Ok(rx)
    }
}
