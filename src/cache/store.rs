//! Cache Store Module
//!
//! The concurrent key -> entry mapping behind a single reader-writer lock.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::stats::StatsCounters;
use crate::cache::{CacheEntry, CacheStats, Clock};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Concurrent key-value storage with TTL-aware reads.
///
/// Reads (`get`, `get_by_prefix`, `get_all`) share the lock; mutations take it
/// exclusively. No lock is ever held across anything but the map access itself.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Time source for liveness checks
    clock: Arc<dyn Clock>,
    /// Performance statistics
    stats: StatsCounters,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store that judges liveness with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
            stats: StatsCounters::default(),
        }
    }

    /// Returns the store's time source.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    // == Put ==
    /// Stores `entry` under its own key, replacing any previous entry.
    ///
    /// Value and expiry are written together under one write-lock acquisition.
    pub async fn put(&self, entry: CacheEntry) -> CacheEntry {
        let mut entries = self.entries.write().await;
        entries.insert(entry.key.clone(), entry.clone());
        entry
    }

    // == Get ==
    /// Retrieves a live entry by key.
    ///
    /// An expired entry is reported as not found and removed on the way out.
    pub async fn get(&self, key: &str) -> Result<CacheEntry> {
        let expired = {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.is_live_at(self.clock.now()) => {
                    self.stats.record_hit();
                    return Ok(entry.clone());
                }
                Some(_) => true,
                None => false,
            }
        };

        self.stats.record_miss();

        if expired {
            self.remove_if_expired(key).await;
        }

        Err(CacheError::NotFound(key.to_string()))
    }

    /// Lazy removal of a single key, re-checked under the write lock so a
    /// concurrent re-insert is never discarded.
    async fn remove_if_expired(&self, key: &str) {
        let mut entries = self.entries.write().await;
        let now = self.clock.now();
        if entries.get(key).is_some_and(|entry| !entry.is_live_at(now)) {
            entries.remove(key);
            self.stats.record_expired(1);
            debug!(key, "Lazily removed expired entry");
        }
    }

    // == Get By Prefix ==
    /// Returns every live entry whose key starts with `prefix`, sorted by key.
    ///
    /// Fails with `NotFound` when nothing matches.
    pub async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<CacheEntry>> {
        let mut matches: Vec<CacheEntry> = {
            let entries = self.entries.read().await;
            let now = self.clock.now();
            entries
                .iter()
                .filter(|(key, entry)| key.starts_with(prefix) && entry.is_live_at(now))
                .map(|(_, entry)| entry.clone())
                .collect()
        };

        if matches.is_empty() {
            return Err(CacheError::NotFound(prefix.to_string()));
        }

        matches.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(matches)
    }

    // == Get All ==
    /// Returns every live entry, sorted by key.
    pub async fn get_all(&self) -> Vec<CacheEntry> {
        let mut live: Vec<CacheEntry> = {
            let entries = self.entries.read().await;
            let now = self.clock.now();
            entries
                .values()
                .filter(|entry| entry.is_live_at(now))
                .cloned()
                .collect()
        };

        live.sort_by(|a, b| a.key.cmp(&b.key));
        live
    }

    // == Delete ==
    /// Removes an entry regardless of liveness.
    ///
    /// Returns true if an entry was removed.
    pub async fn delete(&self, key: &str) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    // == Delete All ==
    /// Removes every entry.
    pub async fn delete_all(&self) {
        self.entries.write().await.clear();
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let now = self.clock.now();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live_at(now));
        let removed = before - entries.len();

        self.stats.record_expired(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let total_entries = self.len().await;
        self.stats.snapshot(total_entries)
    }

    // == Length ==
    /// Returns the number of physically stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Returns true if `key` is physically stored, live or not.
    pub async fn contains_key(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }
}
