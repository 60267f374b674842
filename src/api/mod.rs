//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `PUT /items` - Add a key-value pair with an optional TTL
//! - `GET /items` - List every live item
//! - `DELETE /items` - Remove every item
//! - `GET /items/:key` - Retrieve an item by key
//! - `DELETE /items/:key` - Delete an item by key
//! - `GET /prefix/:prefix` - List live items whose key starts with a prefix
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
