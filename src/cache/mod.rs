//! Cache Module
//!
//! Provides a time-bounded response cache whose entries are evicted by a
//! periodic sweep rather than on read.

mod entry;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::ResponseCache;
pub use stats::CacheStats;
pub use store::CacheStore;
