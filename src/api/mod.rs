//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `PUT /entries` - Store a render entry with optional tags
//! - `GET /entries/:key` - Retrieve a render entry by key
//! - `POST /revalidate` - Purge all entries carrying a tag
//! - `PUT /responses` - Memoize a payload with TTL
//! - `GET /responses/:key` - Retrieve a fresh memoized payload
//! - `DELETE /responses` - Clear the response cache
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
