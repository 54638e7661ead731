//! Cache Entry Module
//!
//! Defines the stored-entry structures for both caches and the shared
//! millisecond clock helper.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

// == Render Entry ==
/// A computed render artifact held by the render cache.
///
/// The render cache never inspects `value`; it is opaque JSON produced by the
/// rendering pipeline. `tags` are attached verbatim at write time and are only
/// consulted by tag-based invalidation. An entry written without tags can
/// never be matched by `revalidate_tag`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderEntry {
    /// The stored artifact
    pub value: Value,
    /// Write timestamp (Unix milliseconds)
    pub last_modified: u64,
    /// Invalidation tags, if any were supplied on write
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl RenderEntry {
    /// Creates a new render entry stamped with the current time.
    pub fn new(value: Value, tags: Option<Vec<String>>) -> Self {
        Self {
            value,
            last_modified: current_timestamp_ms(),
            tags,
        }
    }

    /// Returns true if the entry carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        match &self.tags {
            Some(tags) => tags.iter().any(|t| t == tag),
            None => false,
        }
    }
}

// == Response Item ==
/// A memoized payload held by the response cache.
#[derive(Debug, Clone)]
pub struct ResponseItem<T> {
    /// The cached payload
    pub data: T,
    /// Write timestamp (Unix milliseconds)
    pub timestamp: u64,
    /// Time-to-live in milliseconds
    pub ttl_ms: u64,
}

impl<T> ResponseItem<T> {
    /// Creates a new item stamped with the current time.
    pub fn new(data: T, ttl_ms: u64) -> Self {
        Self {
            data,
            timestamp: current_timestamp_ms(),
            ttl_ms,
        }
    }

    /// Checks if the item has outlived its TTL.
    ///
    /// Boundary condition: an item is expired only once the elapsed time is
    /// strictly greater than its TTL. At `elapsed == ttl` the item is still
    /// served.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms().saturating_sub(self.timestamp) > self.ttl_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_render_entry_untagged() {
        let entry = RenderEntry::new(json!({"page": "/board"}), None);

        assert_eq!(entry.value, json!({"page": "/board"}));
        assert!(entry.tags.is_none());
        assert!(!entry.has_tag("anything"));
    }

    #[test]
    fn test_render_entry_tagged() {
        let entry = RenderEntry::new(json!("html"), Some(vec!["easy".into(), "daily".into()]));

        assert!(entry.has_tag("easy"));
        assert!(entry.has_tag("daily"));
        assert!(!entry.has_tag("hard"));
    }

    #[test]
    fn test_render_entry_timestamp() {
        let before = current_timestamp_ms();
        let entry = RenderEntry::new(json!(null), None);
        let after = current_timestamp_ms();

        assert!(entry.last_modified >= before);
        assert!(entry.last_modified <= after);
    }

    #[test]
    fn test_response_item_not_expired() {
        let item = ResponseItem::new("payload", 30_000);

        assert!(!item.is_expired());
    }

    #[test]
    fn test_response_item_expiration() {
        // TTL of zero means any measurable delay expires the item
        let item = ResponseItem::new("payload", 0);

        sleep(Duration::from_millis(5));

        assert!(item.is_expired());
    }

    #[test]
    fn test_expiry_requires_strictly_greater_elapsed() {
        let now = current_timestamp_ms();
        let item = ResponseItem {
            data: "payload",
            timestamp: now.saturating_sub(100),
            ttl_ms: 150,
        };

        // elapsed (~100ms) is below ttl, item is served
        assert!(!item.is_expired());
    }

    #[test]
    fn test_expired_after_ttl_elapsed() {
        let now = current_timestamp_ms();
        let item = ResponseItem {
            data: "payload",
            timestamp: now.saturating_sub(150),
            ttl_ms: 100,
        };

        assert!(item.is_expired());
    }
}
