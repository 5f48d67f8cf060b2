//! The multi-index catalog.
//!
//! [`Pokedex`] owns every [`Pokemon`] record in an insertion-ordered master
//! list and maintains four derived indexes over it. Records are added during
//! the load phase and never removed; after loading, the catalog is
//! effectively read-only and may be shared freely for rendering.

use crate::catalog::entity::{Pokemon, SearchFilter};
use std::collections::HashMap;

/// The full catalog plus derived indexes.
///
/// Index values are positions into the master list — the catalog is the sole
/// owner of every record, and lookups hand out borrows.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: Vec<Pokemon>,
    by_id: HashMap<u32, usize>,
    /// Both name variants map here. On a name collision the later insertion
    /// overwrites the earlier one (known data-quality quirk, kept as-is).
    by_name: HashMap<String, usize>,
    by_generation: HashMap<u8, Vec<usize>>,
    by_type: HashMap<String, Vec<usize>>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record into the master list and every index.
    ///
    /// This is the only mutation the catalog supports. Duplicate ids are not
    /// rejected; the by-id index keeps the last insertion.
    pub fn add(&mut self, pokemon: Pokemon) {
        let idx = self.entries.len();

        self.by_id.insert(pokemon.id, idx);
        self.by_name.insert(pokemon.name.clone(), idx);
        if !pokemon.name_local.is_empty() {
            self.by_name.insert(pokemon.name_local.clone(), idx);
        }
        self.by_generation
            .entry(pokemon.generation)
            .or_default()
            .push(idx);
        for type_name in &pokemon.types {
            self.by_type.entry(type_name.clone()).or_default().push(idx);
        }

        self.entries.push(pokemon);
    }

    pub fn get_by_id(&self, id: u32) -> Option<&Pokemon> {
        self.by_id.get(&id).map(|&idx| &self.entries[idx])
    }

    /// Case-sensitive exact match against either display-name variant.
    pub fn get_by_name(&self, name: &str) -> Option<&Pokemon> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// Filter the catalog, preserving master-list insertion order.
    ///
    /// A record passes when every set field of the filter matches: the
    /// generation (0 = any), a type tag ("" = any), and the free-text query
    /// ("" = any; otherwise an exact numeric id or a case-insensitive
    /// substring of either name).
    pub fn search(&self, filter: &SearchFilter) -> Vec<&Pokemon> {
        let query_id: Option<u32> = filter.query.trim().parse().ok();
        let query_lower = filter.query.to_lowercase();

        self.entries
            .iter()
            .filter(|p| filter.generation == 0 || p.generation == filter.generation)
            .filter(|p| filter.type_name.is_empty() || p.types.iter().any(|t| *t == filter.type_name))
            .filter(|p| {
                if filter.query.is_empty() {
                    return true;
                }
                if query_id == Some(p.id) {
                    return true;
                }
                p.name.to_lowercase().contains(&query_lower)
                    || p.name_local.to_lowercase().contains(&query_lower)
            })
            .collect()
    }

    /// All records of a generation, in insertion order. Empty when absent.
    pub fn by_generation(&self, generation: u8) -> Vec<&Pokemon> {
        self.by_generation
            .get(&generation)
            .map(|idxs| idxs.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    /// All records carrying a type tag, in insertion order. Empty when absent.
    pub fn by_type(&self, type_name: &str) -> Vec<&Pokemon> {
        self.by_type
            .get(type_name)
            .map(|idxs| idxs.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    /// Cyclic successor of `id` in master-list order.
    ///
    /// The last record wraps to the first; an unknown id also falls back to
    /// the first record. `None` only for an empty catalog.
    pub fn next_after(&self, id: u32) -> Option<&Pokemon> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.by_id.get(&id) {
            Some(&idx) => (idx + 1) % self.entries.len(),
            None => 0,
        };
        Some(&self.entries[idx])
    }

    /// Cyclic predecessor of `id` in master-list order.
    ///
    /// The first record wraps to the last; an unknown id also falls back to
    /// the last record. `None` only for an empty catalog.
    pub fn prev_before(&self, id: u32) -> Option<&Pokemon> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.by_id.get(&id) {
            Some(&idx) => (idx + self.entries.len() - 1) % self.entries.len(),
            None => self.entries.len() - 1,
        };
        Some(&self.entries[idx])
    }

    /// First record in insertion order.
    pub fn first(&self) -> Option<&Pokemon> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entity::Stats;

    fn pokemon(id: u32, name: &str, generation: u8, types: &[&str]) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            name_local: String::new(),
            generation,
            types: types.iter().map(|t| (*t).to_string()).collect(),
            height: 0.0,
            weight: 0.0,
            base_experience: 0,
            stats: Stats::default(),
            moves: Vec::new(),
            evolution: None,
        }
    }

    /// The same lineup as the built-in sample dataset.
    fn kanto_pokedex() -> Pokedex {
        let mut dex = Pokedex::new();
        dex.add(pokemon(1, "Bulbasaur", 1, &["grass", "poison"]));
        dex.add(pokemon(4, "Charmander", 1, &["fire"]));
        dex.add(pokemon(7, "Squirtle", 1, &["water"]));
        dex.add(pokemon(25, "Pikachu", 1, &["electric"]));
        dex.add(pokemon(150, "Mewtwo", 1, &["psychic"]));
        dex
    }

    #[test]
    fn test_get_by_id() {
        let dex = kanto_pokedex();
        assert_eq!(dex.get_by_id(25).map(|p| p.name.as_str()), Some("Pikachu"));
        assert!(dex.get_by_id(9999).is_none());
    }

    #[test]
    fn test_get_by_name_both_variants() {
        let mut dex = Pokedex::new();
        let mut p = pokemon(4, "Charmander", 1, &["fire"]);
        p.name_local = "Glumanda".to_string();
        dex.add(p);

        assert_eq!(dex.get_by_name("Charmander").map(|p| p.id), Some(4));
        assert_eq!(dex.get_by_name("Glumanda").map(|p| p.id), Some(4));
        // Exact match is case-sensitive.
        assert!(dex.get_by_name("charmander").is_none());
    }

    #[test]
    fn test_get_by_name_last_insert_wins() {
        let mut dex = Pokedex::new();
        dex.add(pokemon(1, "Twin", 1, &["grass"]));
        dex.add(pokemon(2, "Twin", 1, &["fire"]));
        // Not a designed policy, but the observable behavior is stable.
        assert_eq!(dex.get_by_name("Twin").map(|p| p.id), Some(2));
    }

    #[test]
    fn test_search_empty_filter_returns_all_in_order() {
        let dex = kanto_pokedex();
        let results = dex.search(&SearchFilter::default());
        let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4, 7, 25, 150]);
    }

    #[test]
    fn test_search_numeric_query_matches_id() {
        let dex = kanto_pokedex();
        let results = dex.search(&SearchFilter::query("25"));
        let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
        // "25" matches Pikachu by id even though no name contains "25".
        assert_eq!(ids, vec![25]);
    }

    #[test]
    fn test_search_substring_case_insensitive() {
        let dex = kanto_pokedex();
        let results = dex.search(&SearchFilter::query("CHAR"));
        let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_search_combined_filters() {
        let dex = kanto_pokedex();

        let filter = SearchFilter {
            query: String::new(),
            type_name: "poison".to_string(),
            generation: 1,
        };
        let ids: Vec<u32> = dex.search(&filter).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);

        let filter = SearchFilter {
            query: "bulba".to_string(),
            type_name: "fire".to_string(),
            generation: 0,
        };
        assert!(dex.search(&filter).is_empty());
    }

    #[test]
    fn test_by_generation_and_by_type() {
        let mut dex = kanto_pokedex();
        dex.add(pokemon(152, "Chikorita", 2, &["grass"]));

        let gen2: Vec<u32> = dex.by_generation(2).iter().map(|p| p.id).collect();
        assert_eq!(gen2, vec![152]);

        let grass: Vec<u32> = dex.by_type("grass").iter().map(|p| p.id).collect();
        assert_eq!(grass, vec![1, 152]);

        assert!(dex.by_generation(9).is_empty());
        assert!(dex.by_type("shadow").is_empty());
    }

    #[test]
    fn test_next_prev_wrap_at_boundaries() {
        let dex = kanto_pokedex();
        assert_eq!(dex.next_after(150).map(|p| p.id), Some(1));
        assert_eq!(dex.prev_before(1).map(|p| p.id), Some(150));
    }

    #[test]
    fn test_next_prev_inverse_in_the_middle() {
        let dex = kanto_pokedex();
        for id in [4, 7, 25, 150] {
            let prev = dex.prev_before(id).map(|p| p.id).expect("non-empty");
            assert_eq!(dex.next_after(prev).map(|p| p.id), Some(id));
        }
    }

    #[test]
    fn test_next_prev_unknown_id_fallback() {
        let dex = kanto_pokedex();
        assert_eq!(dex.next_after(9999).map(|p| p.id), Some(1));
        assert_eq!(dex.prev_before(9999).map(|p| p.id), Some(150));
    }

    #[test]
    fn test_next_prev_empty_catalog() {
        let dex = Pokedex::new();
        assert!(dex.next_after(1).is_none());
        assert!(dex.prev_before(1).is_none());
    }
}
