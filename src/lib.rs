//! Route Cache - An in-memory render and response caching sidecar
//!
//! Provides a tag-invalidated render cache and a TTL-bounded response cache
//! behind a small HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
