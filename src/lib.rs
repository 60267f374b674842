//! TTL Cache - An in-memory key-value cache server
//!
//! Stores string key/value pairs with per-entry time-to-live, supports
//! prefix search, and reclaims expired entries both lazily on read and
//! through a background sweeper.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheEngine, EngineConfig};
pub use config::Config;
