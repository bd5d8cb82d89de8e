//! Pokedex - an interactive client for the PokeAPI catalog
//!
//! Caches raw catalog responses for a short interval, keeps a collection of
//! caught Pokemon, and simulates catches and battles between them.

pub mod cache;
pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use cache::ResponseCache;
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use pokedex::Pokedex;
pub use repl::Session;
pub use tasks::spawn_sweep_task;
