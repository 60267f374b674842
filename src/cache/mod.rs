//! Cache Module
//!
//! Provides the in-memory TTL cache: entries, the concurrent store, the
//! engine that composes it with the expiration sweeper, and the clock
//! abstraction all expiration math goes through.

mod clock;
mod engine;
mod entry;
mod stats;
mod store;
mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{CacheEngine, EngineConfig};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use ttl::TtlSpec;
