//! Pluggable ASCII-art lookup.
//!
//! The renderer only knows the [`ArtProvider`] capability; which sources
//! exist and in which order they are tried is decided by whoever builds the
//! provider chain (see `main.rs`).

use std::fs;
use std::path::PathBuf;

/// Supplies display art for a catalog id, in standard or shiny variant.
pub trait ArtProvider {
    /// The art block for `id`, or `None` when this source has nothing.
    fn art(&self, id: u32, shiny: bool) -> Option<String>;
}

/// Reads art from a directory of `<id>.txt` / `<id>_shiny.txt` files.
#[derive(Debug, Clone)]
pub struct FileArtProvider {
    root: PathBuf,
}

impl FileArtProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtProvider for FileArtProvider {
    fn art(&self, id: u32, shiny: bool) -> Option<String> {
        let suffix = if shiny { "_shiny" } else { "" };
        let path = self.root.join(format!("{id}{suffix}.txt"));
        fs::read_to_string(path).ok()
    }
}

/// Tries a sequence of providers in order and returns the first hit.
pub struct LayeredArtProvider {
    layers: Vec<Box<dyn ArtProvider>>,
}

impl LayeredArtProvider {
    pub fn new(layers: Vec<Box<dyn ArtProvider>>) -> Self {
        Self { layers }
    }
}

impl ArtProvider for LayeredArtProvider {
    fn art(&self, id: u32, shiny: bool) -> Option<String> {
        self.layers.iter().find_map(|l| l.art(id, shiny))
    }
}

/// Generic silhouette used when no provider has art for an id.
pub fn placeholder_art() -> &'static str {
    concat!(
        "    ⠀⠀⢀⣀⣀⣀⣀⣀⡀⠀⠀\n",
        "    ⢀⣴⣿⣿⣿⣿⣿⣿⣿⣦⡀\n",
        "    ⣾⣿⣿⡟⠉⠉⠉⢻⣿⣿⣷\n",
        "    ⣿⣿⣿⡇⠀⠀⠀⢸⣿⣿⣿\n",
        "    ⢿⣿⣿⣷⣄⣀⣠⣾⣿⣿⡿\n",
        "    ⠈⠻⣿⣿⣿⣿⣿⣿⣿⠟⠁\n",
        "    ⠀⠀⠀⠈⠉⠉⠉⠁⠀⠀⠀\n",
    )
}
