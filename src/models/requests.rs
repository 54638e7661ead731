//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Request body for storing a render entry (PUT /entries)
///
/// # Fields
/// - `key`: The cache key to store the entry under
/// - `value`: Opaque JSON artifact produced by the rendering pipeline
/// - `tags`: Optional invalidation tags, attached verbatim
#[derive(Debug, Clone, Deserialize)]
pub struct SetEntryRequest {
    /// The cache key
    pub key: String,
    /// The artifact to store
    pub value: Value,
    /// Optional invalidation tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl SetEntryRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

/// Request body for storing a response-cache item (PUT /responses)
///
/// # Fields
/// - `key`: The cache key to store the payload under
/// - `data`: The payload to memoize
/// - `ttl_ms`: Optional TTL in milliseconds (uses the default if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct SetResponseRequest {
    /// The cache key
    pub key: String,
    /// The payload to memoize
    pub data: Value,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}

impl SetResponseRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

/// Request body for tag-based invalidation (POST /revalidate)
#[derive(Debug, Clone, Deserialize)]
pub struct RevalidateRequest {
    /// The tag whose entries should be purged
    pub tag: String,
}

impl RevalidateRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Option<String> {
        if self.tag.is_empty() {
            return Some("Tag cannot be empty".to_string());
        }
        None
    }
}
