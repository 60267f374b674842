//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry: key, value and optional expiration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The key this entry is stored under
    pub key: String,
    /// The stored value
    pub value: String,
    /// Absolute expiration instant, None = never expires
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` after `now`.
    ///
    /// A `None` or zero TTL produces an entry that never expires.
    pub fn new(key: String, value: String, ttl: Option<Duration>, now: Instant) -> Self {
        let expires_at = ttl
            .filter(|ttl| !ttl.is_zero())
            .and_then(|ttl| now.checked_add(ttl));

        Self {
            key,
            value,
            expires_at,
        }
    }

    // == Liveness ==
    /// Returns true while the entry may be handed out to readers.
    ///
    /// An entry is expired once `now` reaches its expiration instant. Both the
    /// read path and the sweeper decide through this predicate.
    pub fn is_live_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => expires > now,
            None => true,
        }
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, or None if the entry never expires.
    ///
    /// # Returns
    /// - `Some(Duration::ZERO)` once the entry has expired
    /// - `Some(remaining)` if the entry is still live
    /// - `None` if the entry has no TTL
    pub fn ttl_remaining_at(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(now))
    }
}
