//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::RenderEntry;

/// Response body for a render-entry read (GET /entries/:key)
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    /// The cache key
    pub key: String,
    /// The stored artifact
    pub value: Value,
    /// Write timestamp (Unix milliseconds)
    pub last_modified: u64,
    /// Invalidation tags, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl EntryResponse {
    /// Builds a response from a key and its stored entry.
    pub fn new(key: impl Into<String>, entry: RenderEntry) -> Self {
        Self {
            key: key.into(),
            value: entry.value,
            last_modified: entry.last_modified,
            tags: entry.tags,
        }
    }
}

/// Response body for a render-entry write (PUT /entries)
#[derive(Debug, Clone, Serialize)]
pub struct StoredResponse {
    /// Confirmation message naming the key
    pub message: String,
}

impl StoredResponse {
    /// Creates a confirmation for the given key.
    pub fn new(key: impl AsRef<str>) -> Self {
        Self {
            message: format!("Key '{}' stored successfully", key.as_ref()),
        }
    }
}

/// Response body for a response-cache read (GET /responses/:key)
#[derive(Debug, Clone, Serialize)]
pub struct CachedDataResponse {
    /// The cache key
    pub key: String,
    /// The memoized payload
    pub data: Value,
}

impl CachedDataResponse {
    /// Builds a response from a key and its cached payload.
    pub fn new(key: impl Into<String>, data: Value) -> Self {
        Self {
            key: key.into(),
            data,
        }
    }
}

/// Response body for tag-based invalidation (POST /revalidate)
#[derive(Debug, Clone, Serialize)]
pub struct RevalidateResponse {
    /// The tag that was purged
    pub tag: String,
    /// Number of entries removed
    pub removed: usize,
}

impl RevalidateResponse {
    /// Creates a summary of a completed invalidation.
    pub fn new(tag: impl Into<String>, removed: usize) -> Self {
        Self {
            tag: tag.into(),
            removed,
        }
    }
}

/// Response body for clearing the response cache (DELETE /responses)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Confirmation message
    pub message: String,
}

impl ClearResponse {
    /// Creates a confirmation of a completed clear.
    pub fn cleared() -> Self {
        Self {
            message: "Response cache cleared".to_string(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Response-cache hits
    pub hits: u64,
    /// Response-cache misses
    pub misses: u64,
    /// Items removed because their TTL elapsed
    pub expirations: u64,
    /// Hit rate as hits / (hits + misses)
    pub hit_rate: f64,
    /// Current response-cache item count
    pub response_entries: usize,
    /// Current render-cache entry count
    pub render_entries: usize,
}

impl StatsResponse {
    /// Builds a stats summary from raw counters.
    pub fn new(
        hits: u64,
        misses: u64,
        expirations: u64,
        response_entries: usize,
        render_entries: usize,
    ) -> Self {
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            expirations,
            hit_rate,
            response_entries,
            render_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_response_serialize() {
        let entry = RenderEntry::new(json!({"html": "<div/>"}), Some(vec!["easy".to_string()]));
        let resp = EntryResponse::new("page:/daily", entry);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("page:/daily"));
        assert!(json.contains("easy"));
        assert!(json.contains("last_modified"));
    }

    #[test]
    fn test_entry_response_omits_absent_tags() {
        let entry = RenderEntry::new(json!(1), None);
        let resp = EntryResponse::new("k", entry);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("tags"));
    }

    #[test]
    fn test_stored_response_serialize() {
        let resp = StoredResponse::new("my_key");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("my_key"));
        assert!(json.contains("successfully"));
    }

    #[test]
    fn test_revalidate_response_serialize() {
        let resp = RevalidateResponse::new("easy", 3);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("easy"));
        assert!(json.contains('3'));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let resp = StatsResponse::new(80, 20, 5, 10, 4);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_stats_response_zero_reads() {
        let resp = StatsResponse::new(0, 0, 0, 0, 0);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
