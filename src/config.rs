//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::EngineConfig;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TTL for entries added without a usable expiration (zero = never expires)
    pub default_ttl: Duration,
    /// Background sweeper interval
    pub sweep_interval: Duration,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default TTL as a duration string, e.g. `10m` (default: `0s`, never expires)
    /// - `SWEEP_INTERVAL` - Sweeper period as a duration string (default: `1s`, must be non-zero)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            default_ttl: env_duration("DEFAULT_TTL").unwrap_or(defaults.default_ttl),
            sweep_interval: env_duration("SWEEP_INTERVAL")
                .filter(|interval| !interval.is_zero())
                .unwrap_or(defaults.sweep_interval),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Settings handed to the cache engine.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            default_ttl: self.default_ttl,
            sweep_interval: self.sweep_interval,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: Duration::ZERO,
            sweep_interval: Duration::from_secs(1),
            server_port: 3000,
        }
    }
}

fn env_duration(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|v| humantime::parse_duration(v.trim()).ok())
}
