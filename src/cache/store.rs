//! Cache Store Module
//!
//! Unsynchronised map of response bodies. Callers share it through
//! [`ResponseCache`](super::ResponseCache), which serialises every operation
//! behind a single lock.

use std::collections::HashMap;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Keyed storage of byte payloads with creation timestamps.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup and eviction statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores a copy of `payload` under `key`.
    ///
    /// An existing entry for the key is replaced and its age reset.
    pub fn add(&mut self, key: String, payload: &[u8]) {
        self.entries.insert(key, CacheEntry::new(payload));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Age is not checked here; an entry stays readable until a sweep
    /// removes it.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove Older Than ==
    /// Removes every entry created strictly before `cutoff`.
    ///
    /// Returns the number of entries removed.
    pub fn remove_older_than(&mut self, cutoff: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_older_than(cutoff));
        let removed = before - self.entries.len();

        self.stats.record_evictions(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns true if an entry exists for `key`, without touching statistics.
    #[cfg(test)]
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
