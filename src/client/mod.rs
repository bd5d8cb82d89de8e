//! Catalog Client Module
//!
//! HTTP access to the PokeAPI catalog, served from the response cache when
//! a fresh copy of the body is held.

mod pokeapi;

pub use pokeapi::PokeApiClient;
