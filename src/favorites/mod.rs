//! # Favorites Module
//!
//! This module provides the persisted favorites list: a set of catalog ids
//! stored in a small JSON file.
//!
//! ## Storage
//!
//! The store is constructed with an explicit file path — the default is
//! resolved in `main.rs` from the XDG data directory:
//!
//! - Linux: `~/.local/share/pokedex/favorites.json`
//! - macOS: `~/Library/Application Support/pokedex/favorites.json`
//! - Windows: `%APPDATA%\pokedex\favorites.json`
//!
//! ## Data Format
//!
//! A JSON object mapping string-encoded ids to `true`:
//!
//! ```json
//! {
//!   "7": true,
//!   "25": true
//! }
//! ```
//!
//! Unfavorited entries are removed rather than written as `false`.

mod store;

pub use store::FavoritesStore;
