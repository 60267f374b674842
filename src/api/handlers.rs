//! API Handlers
//!
//! HTTP request handlers, one per cache operation. Each handler only
//! translates between JSON and engine calls.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::CacheEngine;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    AddRequest, HealthResponse, ItemResponse, ItemsResponse, StatsResponse, SuccessResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache engine
    pub cache: Arc<CacheEngine>,
}

impl AppState {
    /// Creates a new AppState around the given engine.
    pub fn new(cache: CacheEngine) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Must be called inside a Tokio runtime, since this starts the sweeper.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheEngine::new(config.engine_config()))
    }

    fn now(&self) -> std::time::Instant {
        self.cache.store().clock().now()
    }
}

/// Handler for PUT /items
///
/// Stores a key-value pair, overwriting any existing entry.
pub async fn add_handler(
    State(state): State<AppState>,
    Json(req): Json<AddRequest>,
) -> Result<Json<ItemResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let entry = state.cache.add(&req.key, &req.value, &req.expiration).await;

    Ok(Json(ItemResponse::from_entry(entry, state.now())))
}

/// Handler for GET /items/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ItemResponse>> {
    let entry = state.cache.get(&key).await?;

    Ok(Json(ItemResponse::from_entry(entry, state.now())))
}

/// Handler for GET /prefix/:prefix
///
/// Also mounted on `/prefix` and `/prefix/`, where the empty prefix matches
/// every live item.
pub async fn get_by_prefix_handler(
    State(state): State<AppState>,
    prefix: Option<Path<String>>,
) -> Result<Json<ItemsResponse>> {
    let prefix = prefix.map(|Path(prefix)| prefix).unwrap_or_default();
    let entries = state.cache.get_by_prefix(&prefix).await?;

    Ok(Json(ItemsResponse::from_entries(entries, state.now())))
}

/// Handler for GET /items
pub async fn get_all_items_handler(State(state): State<AppState>) -> Json<ItemsResponse> {
    let entries = state.cache.get_all_items().await;

    Json(ItemsResponse::from_entries(entries, state.now()))
}

/// Handler for DELETE /items/:key
///
/// Reports `success: false` for a missing key instead of an error.
pub async fn delete_key_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<SuccessResponse> {
    Json(SuccessResponse::new(state.cache.delete_key(&key).await))
}

/// Handler for DELETE /items
pub async fn delete_all_handler(State(state): State<AppState>) -> Json<SuccessResponse> {
    Json(SuccessResponse::new(state.cache.delete_all().await))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
