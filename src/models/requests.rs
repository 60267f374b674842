//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the Add operation (PUT /items)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `expiration`: Optional TTL as a duration string such as `"1m"` or `"10s"`
#[derive(Debug, Clone, Deserialize)]
pub struct AddRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
    /// TTL spec, empty when not supplied
    #[serde(default)]
    pub expiration: String,
}

impl AddRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}
