//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
///
/// None of these are fatal: the session reports them and keeps reading input.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level failure talking to the catalog service
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog service answered with a non-success status
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Response body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Requested name is not in the local collection
    #[error("you have not caught {0}")]
    NotCaught(String),

    /// Unrecognized ball selector
    #[error("unknown ball '{0}', using pokeball")]
    UnknownBall(String),

    /// Command invoked with missing arguments
    #[error("usage: {0}")]
    Usage(&'static str),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
