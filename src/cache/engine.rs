//! Cache Engine Module
//!
//! Public operation set composed from the store, the sweeper and a clock.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, CacheStore, Clock, SystemClock, TtlSpec};
use crate::error::Result;
use crate::tasks::Sweeper;

// == Engine Config ==
/// Construction-time settings, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// TTL applied when the caller's spec is absent or unparsable (zero = never expires)
    pub default_ttl: Duration,
    /// Period between sweeper passes
    pub sweep_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::ZERO,
            sweep_interval: Duration::from_secs(1),
        }
    }
}

// == Cache Engine ==
/// Thread-safe TTL cache.
///
/// All operations may be called concurrently through a shared reference.
#[derive(Debug)]
pub struct CacheEngine {
    store: Arc<CacheStore>,
    sweeper: Sweeper,
    config: EngineConfig,
}

impl CacheEngine {
    // == Constructors ==
    /// Creates an engine driven by the system clock.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime, since the sweeper is
    /// spawned here.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an engine driven by the given clock.
    pub fn with_clock(config: EngineConfig, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(CacheStore::new(clock));
        let sweeper = Sweeper::spawn(Arc::clone(&store), config.sweep_interval);

        Self {
            store,
            sweeper,
            config,
        }
    }

    /// Returns the configuration this engine was built with.
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<CacheStore> {
        &self.store
    }

    // == Add ==
    /// Stores `value` under `key`, overwriting any previous entry.
    ///
    /// `ttl_spec` is a duration string such as `"1m"`; see [`TtlSpec`] for
    /// how absent, zero and malformed specs resolve.
    pub async fn add(&self, key: &str, value: &str, ttl_spec: &str) -> CacheEntry {
        let ttl = TtlSpec::parse(ttl_spec).resolve(self.config.default_ttl);
        let entry = CacheEntry::new(
            key.to_string(),
            value.to_string(),
            ttl,
            self.store.clock().now(),
        );

        debug!(key, ?ttl, "Add");
        self.store.put(entry).await
    }

    // == Get ==
    /// Returns the live entry for `key`, or `NotFound`.
    pub async fn get(&self, key: &str) -> Result<CacheEntry> {
        self.store.get(key).await
    }

    // == Get By Prefix ==
    /// Returns all live entries whose key starts with `prefix`, or `NotFound`
    /// when there are none.
    pub async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<CacheEntry>> {
        self.store.get_by_prefix(prefix).await
    }

    // == Get All Items ==
    /// Returns every live entry.
    pub async fn get_all_items(&self) -> Vec<CacheEntry> {
        self.store.get_all().await
    }

    // == Delete Key ==
    /// Removes `key`; returns true iff something was removed.
    pub async fn delete_key(&self, key: &str) -> bool {
        let removed = self.store.delete(key).await;
        debug!(key, removed, "DeleteKey");
        removed
    }

    // == Delete All ==
    /// Clears the cache. Always reports success.
    pub async fn delete_all(&self) -> bool {
        self.store.delete_all().await;
        debug!("DeleteAll");
        true
    }

    // == Introspection ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.stats().await
    }

    /// Returns the number of physically stored entries.
    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.store.is_empty().await
    }

    // == Shutdown ==
    /// Stops the background sweeper and waits for it to exit.
    pub async fn shutdown(&self) {
        self.sweeper.shutdown().await;
    }

    /// Returns true once the background sweeper has exited.
    pub async fn is_shut_down(&self) -> bool {
        self.sweeper.is_finished().await
    }
}
