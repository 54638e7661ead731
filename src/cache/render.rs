//! Render Cache Module
//!
//! Key-value shim for computed page/route output with tag-based invalidation.
//!
//! This cache deliberately performs no staleness check on reads: presence
//! alone is a hit, and the rendering pipeline that owns the entries decides
//! when a hit is too old to use. The only removal path is `revalidate_tag`.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::cache::{current_timestamp_ms, RenderEntry};

// == Render Cache Options ==
/// Options bag forwarded by the host pipeline at construction time.
///
/// Stored but not interpreted; reserved for future policy such as a
/// size limit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderCacheOptions {
    /// Maximum number of entries (not enforced)
    pub max_entries: Option<usize>,
}

// == Render Cache ==
/// Tag-invalidated store for render artifacts.
#[derive(Debug, Default)]
pub struct RenderCache {
    /// Key-value storage
    entries: HashMap<String, RenderEntry>,
    /// Host-supplied options, held for the pipeline to read back
    options: RenderCacheOptions,
}

impl RenderCache {
    // == Constructor ==
    /// Creates a new RenderCache with the options bag supplied by the host.
    pub fn new(options: RenderCacheOptions) -> Self {
        Self {
            entries: HashMap::new(),
            options,
        }
    }

    // == Get ==
    /// Returns the entry for `key` if present.
    ///
    /// No TTL or age check is applied; staleness policy belongs to the
    /// caller.
    pub fn get(&self, key: &str) -> Option<&RenderEntry> {
        self.entries.get(key)
    }

    // == Set ==
    /// Stores `value` under `key`, stamped with the current write time.
    ///
    /// Tags, when supplied, attach verbatim. Any prior entry for `key` is
    /// replaced unconditionally.
    pub fn set(&mut self, key: String, value: Value, tags: Option<Vec<String>>) {
        let entry = RenderEntry {
            value,
            last_modified: current_timestamp_ms(),
            tags,
        };
        self.entries.insert(key, entry);
    }

    // == Revalidate Tag ==
    /// Deletes every entry whose tag set contains `tag`.
    ///
    /// Full-table scan; removal is irreversible. Untagged entries are never
    /// matched. Returns the number of entries removed.
    pub fn revalidate_tag(&mut self, tag: &str) -> usize {
        let matched: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.has_tag(tag))
            .map(|(key, _)| key.clone())
            .collect();

        let count = matched.len();

        for key in matched {
            self.entries.remove(&key);
        }

        count
    }

    // == Options ==
    /// Returns the options bag supplied at construction.
    pub fn options(&self) -> &RenderCacheOptions {
        &self.options
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
