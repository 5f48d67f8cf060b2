//! Catalog entity records.
//!
//! A [`Pokemon`] is the unit the whole application revolves around: the
//! catalog indexes them, the favorites store references them by id, and the
//! navigation layer browses them. All types here derive serde traits so the
//! data loader can read them straight from the catalog JSON file.

use crate::catalog::evolution::EvolutionChain;
use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// Favorite status is deliberately *not* part of this struct: it is owned by
/// the [`crate::favorites::FavoritesStore`] and computed on read, so it can
/// never go stale while navigating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    /// National-dex identifier. Unique within a catalog.
    pub id: u32,
    /// English display name.
    pub name: String,
    /// Localized display name (may equal `name` when no translation exists).
    #[serde(default)]
    pub name_local: String,
    /// Generation this record belongs to (1..=9). Exactly one per record.
    pub generation: u8,
    /// Type tags, 1-2 entries. The first entry is the primary type.
    pub types: Vec<String>,
    /// Height in decimeters, as reported by the source data.
    #[serde(default)]
    pub height: f64,
    /// Weight in hectograms, as reported by the source data.
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub base_experience: u32,
    #[serde(default)]
    pub stats: Stats,
    /// Ranked signature moves, at most five.
    #[serde(default)]
    pub moves: Vec<Move>,
    /// Evolution chain this record is part of, if any.
    #[serde(default)]
    pub evolution: Option<EvolutionChain>,
}

impl Pokemon {
    /// The primary type tag, when the record has at least one type.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Localized name when present, English name otherwise.
    pub fn display_name(&self) -> &str {
        if self.name_local.is_empty() {
            &self.name
        } else {
            &self.name_local
        }
    }
}

/// The six base stats.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_atk: u32,
    pub sp_def: u32,
    pub speed: u32,
}

/// A signature move attached to a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    #[serde(default)]
    pub name_local: String,
    /// Type tag of the move (same vocabulary as `Pokemon::types`).
    pub type_name: String,
    #[serde(default)]
    pub power: u32,
    /// Damage class: "physical", "special", or "status".
    #[serde(default)]
    pub category: String,
}

/// Filter for [`crate::catalog::Pokedex::search`].
///
/// Empty fields mean "no constraint": an all-empty filter matches the whole
/// catalog. A non-empty query matches either an exact numeric id or a
/// case-insensitive substring of either display name.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub query: String,
    pub type_name: String,
    pub generation: u8,
}

impl SearchFilter {
    /// Filter on the free-text query only.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}
