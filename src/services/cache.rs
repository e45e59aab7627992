// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side cache of gateway query results.
//!
//! Lists are re-fetched after mutations rather than patched in place, so
//! the cache only needs operation-level invalidation. Entries carry the
//! session epoch they were fetched under; an entry from an ended session
//! is never served.

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

struct CacheEntry {
    epoch: u64,
    value: Value,
}

/// Query result cache keyed by operation name and variables.
pub struct QueryCache {
    entries: DashMap<String, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Cache key for an operation and its variables.
    pub fn key(operation: &str, variables: &Value) -> String {
        format!("{operation}:{variables}")
    }

    /// Cached value for `key`, if fetched under the current epoch.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str, epoch: u64) -> Option<T> {
        let stale = match self.entries.get(key) {
            Some(entry) if entry.epoch == epoch => {
                return serde_json::from_value(entry.value.clone()).ok();
            }
            Some(_) => true,
            None => false,
        };
        if stale {
            self.entries.remove(key);
        }
        None
    }

    /// Store a value fetched under `epoch`.
    pub fn put<T: Serialize>(&self, key: String, epoch: u64, value: &T) {
        if let Ok(value) = serde_json::to_value(value) {
            self.entries.insert(key, CacheEntry { epoch, value });
        }
    }

    /// Drop every entry for `operation`, regardless of variables.
    pub fn invalidate_operation(&self, operation: &str) {
        let prefix = format!("{operation}:");
        self.entries.retain(|key, _| !key.starts_with(&prefix));
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
