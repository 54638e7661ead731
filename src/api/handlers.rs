//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::{RenderCache, RenderCacheOptions, ResponseCache};
use crate::error::{CacheError, Result};
use crate::models::{
    CachedDataResponse, ClearResponse, EntryResponse, HealthResponse, RevalidateRequest,
    RevalidateResponse, SetEntryRequest, SetResponseRequest, StatsResponse, StoredResponse,
};

/// Application state shared across all handlers.
///
/// Both caches are explicitly constructed here and handed to handlers
/// through axum state rather than living as module globals, so tests can
/// build isolated instances.
#[derive(Clone)]
pub struct AppState {
    /// Render cache consulted by the rendering pipeline
    pub render: Arc<RwLock<RenderCache>>,
    /// Response cache shared with the sweep task
    pub responses: Arc<RwLock<ResponseCache<Value>>>,
}

impl AppState {
    /// Creates a new AppState around the given caches.
    pub fn new(render: RenderCache, responses: ResponseCache<Value>) -> Self {
        Self {
            render: Arc::new(RwLock::new(render)),
            responses: Arc::new(RwLock::new(responses)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            RenderCache::new(RenderCacheOptions::default()),
            ResponseCache::new(config.default_ttl_ms),
        )
    }
}

/// Handler for PUT /entries
///
/// Stores a render entry, with optional invalidation tags.
pub async fn set_entry_handler(
    State(state): State<AppState>,
    Json(req): Json<SetEntryRequest>,
) -> Result<Json<StoredResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut render = state.render.write().await;
    render.set(req.key.clone(), req.value, req.tags);

    Ok(Json(StoredResponse::new(req.key)))
}

/// Handler for GET /entries/:key
///
/// Returns the stored render entry. No staleness check is applied; the
/// caller owns freshness policy.
pub async fn get_entry_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<EntryResponse>> {
    let render = state.render.read().await;
    let entry = render
        .get(&key)
        .cloned()
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(EntryResponse::new(key, entry)))
}

/// Handler for POST /revalidate
///
/// Purges every render entry carrying the given tag.
pub async fn revalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<RevalidateRequest>,
) -> Result<Json<RevalidateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut render = state.render.write().await;
    let removed = render.revalidate_tag(&req.tag);

    Ok(Json(RevalidateResponse::new(req.tag, removed)))
}

/// Handler for PUT /responses
///
/// Memoizes a payload with the given or default TTL.
pub async fn set_response_handler(
    State(state): State<AppState>,
    Json(req): Json<SetResponseRequest>,
) -> Result<Json<StoredResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut responses = state.responses.write().await;
    responses.set(req.key.clone(), req.data, req.ttl_ms);

    Ok(Json(StoredResponse::new(req.key)))
}

/// Handler for GET /responses/:key
///
/// Returns the memoized payload if present and fresh. Reading an expired
/// key removes it as a side effect.
pub async fn get_response_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CachedDataResponse>> {
    // Write lock: the read path can delete an expired item
    let mut responses = state.responses.write().await;
    let data = responses
        .get(&key)
        .cloned()
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(CachedDataResponse::new(key, data)))
}

/// Handler for DELETE /responses
///
/// Clears the response cache unconditionally.
pub async fn clear_responses_handler(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>> {
    let mut responses = state.responses.write().await;
    responses.clear();

    Ok(Json(ClearResponse::cleared()))
}

/// Handler for GET /stats
///
/// Returns response-cache counters plus entry counts for both caches.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let responses = state.responses.read().await;
    let render = state.render.read().await;
    let stats = responses.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.expirations,
        stats.total_entries,
        render.len(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
