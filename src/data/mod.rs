//! # Data Module
//!
//! The catalog-loading collaborator: builds a fully populated
//! [`crate::catalog::Pokedex`] before the navigation layer starts.
//!
//! Two sources are supported:
//!
//! - [`load_catalog`] reads a JSON array of records from a file
//!   (`--data <FILE>` or the configured data file)
//! - [`sample_catalog`] is the built-in dataset used when no data file is
//!   configured
//!
//! The rest of the application has no knowledge of where records come from.

mod loader;
mod sample;

pub use loader::{load_catalog, parse_catalog};
pub use sample::sample_catalog;
