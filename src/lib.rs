//! Pokédex TUI - A terminal Pokédex for browsing, searching, and favoriting Pokémon
//!
//! This library provides the core functionality for indexing a Pokémon
//! catalog, persisting a favorites list, and driving the interactive
//! navigation state machine behind the TUI.

pub mod catalog;
pub mod data;
pub mod favorites;
pub mod ui;
