//! Cache Module
//!
//! Two independent in-memory caches: a render cache with tag-based
//! invalidation and a generic TTL response cache.

mod entry;
mod render;
mod response;
mod stats;


// Re-export public types
pub use entry::{current_timestamp_ms, RenderEntry, ResponseItem};
pub use render::{RenderCache, RenderCacheOptions};
pub use response::ResponseCache;
pub use stats::CacheStats;

// == Public Constants ==
/// TTL applied to response-cache writes that do not specify one
pub const DEFAULT_TTL_MS: u64 = 30_000;

/// Default interval between proactive expiry sweeps, in seconds
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;
