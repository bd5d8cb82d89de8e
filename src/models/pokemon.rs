//! Pokemon record
//!
//! The locally held snapshot of a Pokemon, built from `GET pokemon/<name>/`.

use std::collections::HashMap;

use serde::Deserialize;

/// Canonical display order for the six base stats.
pub const STAT_ORDER: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

// == Pokemon ==
/// Name, size, base stats and types of a Pokemon.
///
/// Records may be partially populated: only `name` is guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    /// Remote `base_experience`, used as catch difficulty
    pub base_experience: i64,
    pub height: i64,
    pub weight: i64,
    /// Base stat by stat name
    pub stats: HashMap<String, i64>,
    /// Type names in slot order
    pub types: Vec<String>,
}

impl Pokemon {
    /// Creates a record carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Looks up a base stat by name.
    pub fn stat(&self, name: &str) -> Option<i64> {
        self.stats.get(name).copied()
    }

    /// True when nothing beyond the name has been filled in.
    pub fn is_partial(&self) -> bool {
        self.height == 0 && self.weight == 0 && self.stats.is_empty()
    }

    /// Stats in canonical order, followed by any others sorted by name.
    pub fn ordered_stats(&self) -> Vec<(&str, i64)> {
        let mut ordered: Vec<(&str, i64)> = STAT_ORDER
            .iter()
            .filter_map(|name| self.stat(name).map(|value| (*name, value)))
            .collect();

        let mut extra: Vec<(&str, i64)> = self
            .stats
            .iter()
            .filter(|(name, _)| !STAT_ORDER.contains(&name.as_str()))
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        extra.sort_by(|a, b| a.0.cmp(b.0));

        ordered.extend(extra);
        ordered
    }
}

// == Wire Shape ==
/// Body of `GET pokemon/<name>/`, reduced to the fields the client uses.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<i64>,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub weight: i64,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: i64,
    pub stat: NameOnly,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NameOnly,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NameOnly {
    pub name: String,
}

impl From<PokemonResponse> for Pokemon {
    fn from(raw: PokemonResponse) -> Self {
        Self {
            name: raw.name,
            // Some catalog entries report a null base experience
            base_experience: raw.base_experience.unwrap_or(0),
            height: raw.height,
            weight: raw.weight,
            stats: raw
                .stats
                .into_iter()
                .map(|slot| (slot.stat.name, slot.base_stat))
                .collect(),
            types: raw.types.into_iter().map(|slot| slot.kind.name).collect(),
        }
    }
}
