//! Data models for the Pokedex client
//!
//! `Pokemon` is the record the engines consume; the remaining types mirror
//! the catalog service's JSON bodies.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetail, LocationAreaList, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonResponse, STAT_ORDER};
