//! PokeAPI client
//!
//! Every request is keyed by its full URL. A cached body is decoded first;
//! if that fails the request goes to the network, and a successfully decoded
//! network body is cached for the next caller.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::config::normalize_base_url;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaList, Pokemon, PokemonResponse};

/// Async client for the catalog service.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: Option<ResponseCache>,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// Pass `None` for `cache` to always hit the network.
    pub fn new(base_url: impl Into<String>, cache: Option<ResponseCache>) -> Self {
        Self {
            http: Client::new(),
            base_url: normalize_base_url(base_url.into()),
            cache,
        }
    }

    /// Creates a client from configuration with the given cache.
    pub fn from_config(config: &crate::config::Config, cache: ResponseCache) -> Self {
        Self::new(config.api_base_url.clone(), Some(cache))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The response cache consulted before each request, if any.
    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_ref()
    }

    /// First page of the location-area listing.
    pub fn location_areas_url(&self) -> String {
        format!("{}location-area/", self.base_url)
    }

    /// Fetches one page of location areas from `url`.
    pub async fn fetch_location_areas(&self, url: &str) -> Result<LocationAreaList> {
        self.fetch_json(url).await
    }

    /// Fetches the detail of the named location area.
    pub async fn fetch_location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        let url = format!("{}{}/", self.location_areas_url(), name);
        self.fetch_json(&url).await
    }

    /// Fetches a Pokemon by name and maps it to a local record.
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}pokemon/{}/", self.base_url, name);
        let raw: PokemonResponse = self.fetch_json(&url).await?;
        Ok(Pokemon::from(raw))
    }

    // == Fetch JSON ==
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.get(url).await {
                match serde_json::from_slice(&body) {
                    Ok(value) => {
                        debug!("Cache hit for {}", url);
                        return Ok(value);
                    }
                    Err(err) => warn!("Discarding undecodable cached body for {}: {}", url, err),
                }
            } else {
                debug!("Cache miss for {}", url);
            }
        }

        let body = self.get_body(url).await?;
        let value = serde_json::from_slice(&body)?;

        if let Some(cache) = &self.cache {
            cache.add(url, &body).await;
        }
        Ok(value)
    }

    async fn get_body(&self, url: &str) -> Result<Vec<u8>> {
        let http_err = |source: reqwest::Error| PokedexError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(http_err)?;
        Ok(bytes.to_vec())
    }
}
