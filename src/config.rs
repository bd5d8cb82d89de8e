//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default catalog service root.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog service root, always ending in `/`
    pub api_base_url: String,
    /// Response cache interval in milliseconds (sweep period and max age)
    pub cache_interval_ms: u64,
    /// Optional seed for the session's random source
    pub seed: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - Catalog service root (default: https://pokeapi.co/api/v2/)
    /// - `CACHE_INTERVAL_MS` - Cache interval in milliseconds (default: 5000)
    /// - `POKEDEX_SEED` - Seed for reproducible catches and battles (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_base_url: normalize_base_url(
                lookup("POKEAPI_BASE_URL")
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            ),
            cache_interval_ms: lookup("CACHE_INTERVAL_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            seed: lookup("POKEDEX_SEED").and_then(|v| v.parse().ok()),
        }
    }

    /// Cache interval as a `Duration`.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_interval_ms: 5000,
            seed: None,
        }
    }
}

/// Appends the trailing slash that resource paths are joined onto.
pub fn normalize_base_url(url: String) -> String {
    if url.ends_with('/') {
        url
    } else {
        format!("{}/", url)
    }
}
