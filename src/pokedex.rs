//! Pokedex Module
//!
//! The collection of caught Pokemon, keyed by name.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::models::Pokemon;

/// Caught Pokemon, guarded by a single lock.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: Mutex<HashMap<String, Pokemon>>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `pokemon`, replacing any record with the same name.
    pub async fn add(&self, pokemon: Pokemon) {
        self.entries
            .lock()
            .await
            .insert(pokemon.name.clone(), pokemon);
    }

    /// Returns a copy of the named record.
    pub async fn get(&self, name: &str) -> Option<Pokemon> {
        self.entries.lock().await.get(name).cloned()
    }

    /// Names of every caught Pokemon, sorted.
    pub async fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.lock().await.keys().cloned().collect();
        names.sort();
        names
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}
