//! Response Cache Module
//!
//! Generic TTL memoization store for expensive handler output.
//!
//! Expiry is enforced twice: lazily on read (an expired item is deleted and
//! reported absent) and proactively by the periodic sweep task calling
//! [`ResponseCache::cleanup`]. The combination keeps the hot read path free
//! of scans while bounding growth from keys that are written once and never
//! read again.

use std::collections::HashMap;

use crate::cache::{CacheStats, ResponseItem, DEFAULT_TTL_MS};

// == Response Cache ==
/// TTL-bounded memoization store, generic over the cached payload type.
#[derive(Debug)]
pub struct ResponseCache<T> {
    /// Key-value storage
    items: HashMap<String, ResponseItem<T>>,
    /// TTL applied when a write supplies none
    default_ttl_ms: u64,
    /// Hit/miss/expiration counters
    stats: CacheStats,
}

impl<T> ResponseCache<T> {
    // == Constructor ==
    /// Creates a new ResponseCache with the given default TTL in
    /// milliseconds.
    pub fn new(default_ttl_ms: u64) -> Self {
        Self {
            items: HashMap::new(),
            default_ttl_ms,
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores `data` under `key` with the given TTL, or the cache-wide
    /// default when `ttl_ms` is None. Unconditionally overwrites.
    pub fn set(&mut self, key: String, data: T, ttl_ms: Option<u64>) {
        let item = ResponseItem::new(data, ttl_ms.unwrap_or(self.default_ttl_ms));
        self.items.insert(key, item);
        self.stats.set_total_entries(self.items.len());
    }

    // == Get ==
    /// Retrieves the payload for `key` if present and fresh.
    ///
    /// An expired item is removed eagerly and reported as absent, so storage
    /// never serves a value past its TTL.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        let expired = match self.items.get(key) {
            Some(item) => item.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.items.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            self.stats.set_total_entries(self.items.len());
            return None;
        }

        self.stats.record_hit();
        self.items.get(key).map(|item| &item.data)
    }

    // == Has ==
    /// True iff `get` would return a value.
    ///
    /// Defined in terms of `get`, so probing an expired key deletes it.
    pub fn has(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }

    // == Clear ==
    /// Removes all items unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.stats.set_total_entries(0);
    }

    // == Cleanup ==
    /// Removes every item whose age exceeds its TTL.
    ///
    /// Full scan; intended to run from the periodic sweep task. Returns the
    /// number of items removed. Idempotent between writes.
    pub fn cleanup(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .items
            .iter()
            .filter(|(_, item)| item.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.items.remove(&key);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.items.len());
        count
    }

    // == Stats ==
    /// Returns current counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.items.len());
        stats
    }

    // == Length ==
    /// Returns the current number of items, including any not yet swept.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ResponseCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}
