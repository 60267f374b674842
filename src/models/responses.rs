//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::time::Instant;

use serde::Serialize;

use crate::cache::{CacheEntry, CacheStats};

/// A single cache item as returned by Add, Get and the list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemResponse {
    /// The item key
    pub key: String,
    /// The stored value
    pub value: String,
    /// Remaining lifetime in milliseconds, absent if the item never expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_remaining_ms: Option<u64>,
}

impl ItemResponse {
    /// Builds the response for `entry` as seen at `now`.
    pub fn from_entry(entry: CacheEntry, now: Instant) -> Self {
        let ttl_remaining_ms = entry
            .ttl_remaining_at(now)
            .map(|remaining| u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX));

        Self {
            key: entry.key,
            value: entry.value,
            ttl_remaining_ms,
        }
    }
}

/// Response body for GetByPrefix and GetAllItems
#[derive(Debug, Clone, Serialize)]
pub struct ItemsResponse {
    /// Matching items, ordered by key
    pub items: Vec<ItemResponse>,
}

impl ItemsResponse {
    /// Builds the response for `entries` as seen at `now`.
    pub fn from_entries(entries: Vec<CacheEntry>, now: Instant) -> Self {
        Self {
            items: entries
                .into_iter()
                .map(|entry| ItemResponse::from_entry(entry, now))
                .collect(),
        }
    }
}

/// Response body for DeleteKey and DeleteAll
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    /// Whether the operation removed anything (DeleteKey) or completed (DeleteAll)
    pub success: bool,
}

impl SuccessResponse {
    /// Creates a new SuccessResponse
    pub fn new(success: bool) -> Self {
        Self { success }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries reclaimed after expiring
    pub expired: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expired: stats.expired,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
