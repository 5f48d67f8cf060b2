//! # Catalog Module
//!
//! This module provides the in-memory Pokémon catalog: the entity records,
//! the multi-index collection built over them, evolution chains, and the
//! static generation/type metadata used by the browse menus.
//!
//! ## Components
//!
//! - [`Pokemon`] - a single catalog record with stats, types, and moves
//! - [`Pokedex`] - the insertion-ordered master list plus derived indexes
//!   (by id, by name, by generation, by type)
//! - [`EvolutionChain`] - ordered evolution progression for a record
//! - [`generation`] - the nine-generation table and canonical type names
//!
//! The catalog is populated once at startup (see the [`crate::data`] module)
//! and is read-only afterwards; the navigation layer refers to entries by id
//! and never copies them.

pub mod entity;
pub mod evolution;
pub mod generation;
pub mod pokedex;

pub use entity::{Move, Pokemon, SearchFilter, Stats};
pub use evolution::{EvolutionChain, EvolutionStage, EvolutionTrigger};
pub use generation::{Generation, GENERATIONS, TYPE_NAMES};
pub use pokedex::Pokedex;
