//! # UI Module
//!
//! This module provides the interactive layer of the Pokédex: the
//! navigation state machine and the terminal rendering built on top of it.
//!
//! ## Components
//!
//! - [`App`] - the navigation state machine (active screen, cursors, search
//!   state, current entity)
//! - [`mod@render`] - rendering functions for drawing the TUI
//! - [`mod@theme`] - semantic color themes and per-type colors/glyphs
//! - [`mod@art`] - the pluggable ASCII-art provider seam
//!
//! ## Screens
//!
//! ```text
//!                  ┌──────────────┐
//!        ┌── 1 ───▶│    Search    │
//!        │         ├──────────────┤
//!        ├── 2 ───▶│ BrowseByType │
//! ┌──────┴─────┐   ├──────────────┴───┐   ┌────────────────┐
//! │  MainView  ├3─▶│BrowseByGeneration│──▶│ GenerationList │
//! │ (initial)  │   ├──────────────────┘   └────────────────┘
//! │            ├── 4 ───▶ Favorites
//! └──────┬─────┘
//!        └─ enter ─▶ Detail
//! ```
//!
//! `q`/`esc` walks back up: `GenerationList` returns to
//! `BrowseByGeneration`, every other screen returns to `MainView`, and from
//! `MainView` it quits the session.

pub mod app;
pub mod art;
pub mod config;
pub mod render;
pub mod theme;

pub use app::{App, Screen};
pub use render::render;
