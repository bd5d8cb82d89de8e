//! Shared Response Cache
//!
//! Cloneable handle around a [`CacheStore`] guarded by one exclusive lock.
//! Reads, writes and the sweep all take the same lock and never await while
//! holding it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::cache::{CacheStats, CacheStore};

// == Response Cache ==
/// Time-bounded cache of raw response bodies keyed by request URL.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
}

impl ResponseCache {
    /// Creates an empty cache whose entries live for roughly `interval`.
    ///
    /// The sweep that enforces the interval is started separately with
    /// [`spawn_sweep_task`](crate::tasks::spawn_sweep_task).
    pub fn new(interval: Duration) -> Self {
        Self {
            store: Arc::new(Mutex::new(CacheStore::new())),
            interval,
        }
    }

    /// Configured entry interval, also the sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns a copy of the payload stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    /// Stores a copy of `payload` under `key`, replacing any previous entry.
    pub async fn add(&self, key: impl Into<String>, payload: &[u8]) {
        let key = key.into();
        self.store.lock().await.add(key, payload);
    }

    // == Sweep ==
    /// Removes every entry created strictly before `now - interval`.
    ///
    /// Returns the number of entries removed.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        // Nothing can predate a cutoff earlier than the clock's origin
        let Some(cutoff) = now.checked_sub(self.interval) else {
            return 0;
        };
        self.store.lock().await.remove_older_than(cutoff)
    }

    /// Returns current statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    /// Number of entries currently held.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }
}
