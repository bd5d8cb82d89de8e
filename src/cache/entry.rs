//! Cache Entry Module
//!
//! Defines the structure for individual cached response bodies.

use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body together with the instant it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Owned copy of the stored bytes
    payload: Vec<u8>,
    /// When the entry was added
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry holding a copy of `payload`, stamped with the current time.
    pub fn new(payload: &[u8]) -> Self {
        Self {
            payload: payload.to_vec(),
            created_at: Instant::now(),
        }
    }

    /// Returns a fresh copy of the stored bytes.
    pub fn payload(&self) -> Vec<u8> {
        self.payload.clone()
    }

    /// Creation instant.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    // == Is Older Than ==
    /// Checks whether the entry was created strictly before `cutoff`.
    ///
    /// An entry created exactly at the cutoff is kept.
    pub fn is_older_than(&self, cutoff: Instant) -> bool {
        self.created_at < cutoff
    }
}
