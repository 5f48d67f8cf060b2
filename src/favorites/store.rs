//! Persistent favorites storage.
//!
//! Every mutation writes the whole set back to disk synchronously, so the
//! in-memory state and the file agree after each successful call. On a
//! write failure the in-memory change is kept and the error is returned to
//! the caller — best-effort durability, never a crash.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A persisted set of favorited catalog ids.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    favorites: HashMap<u32, bool>,
}

impl FavoritesStore {
    /// Load the store from `path`.
    ///
    /// A missing file yields an empty set; a present-but-malformed file is
    /// an error the caller decides what to do with.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let favorites = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse favorites file: {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read favorites file: {}", path.display())
                })
            }
        };

        Ok(Self { path, favorites })
    }

    /// An empty store persisting to `path`, without touching the disk.
    ///
    /// Used to keep a session going when the existing file cannot be read;
    /// the first successful mutation overwrites it.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            favorites: HashMap::new(),
        }
    }

    /// Whether `id` is currently favorited. Defaults to false for unknown
    /// ids and for explicit `false` entries.
    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.get(&id).copied().unwrap_or(false)
    }

    /// Mark `id` as a favorite and persist.
    pub fn add(&mut self, id: u32) -> Result<()> {
        self.favorites.insert(id, true);
        self.save()
    }

    /// Remove `id` from the favorites and persist. The entry is deleted,
    /// not written as `false`.
    pub fn remove(&mut self, id: u32) -> Result<()> {
        self.favorites.remove(&id);
        self.save()
    }

    /// Flip the favorite state of `id`, persist, and return the new state.
    pub fn toggle(&mut self, id: u32) -> Result<bool> {
        let now_favorite = if self.is_favorite(id) {
            self.favorites.remove(&id);
            false
        } else {
            self.favorites.insert(id, true);
            true
        };
        self.save()?;
        Ok(now_favorite)
    }

    /// All favorited ids, in no particular order. Callers sort when they
    /// need a stable display order.
    pub fn all(&self) -> Vec<u32> {
        self.favorites
            .iter()
            .filter(|(_, &fav)| fav)
            .map(|(&id, _)| id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.favorites.values().filter(|&&fav| fav).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create favorites directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(&self.favorites)
            .context("Failed to serialize favorites")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write favorites file: {}", self.path.display()))?;

        Ok(())
    }
}
