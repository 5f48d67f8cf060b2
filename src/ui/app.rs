//! Navigation state machine.
//!
//! [`App`] owns the catalog and the favorites store and tracks everything
//! the renderer needs: the active screen, per-screen cursors, the search
//! query and its results, the shared list buffer the browse screens fill,
//! and the current entity. One key event is fully processed before the next
//! is read, so none of this needs locking.
//!
//! Entities are referred to by id everywhere; the catalog stays the sole
//! owner of the records, and favorite status is computed from the store on
//! read rather than cached.

use crate::catalog::{Pokedex, Pokemon, SearchFilter, GENERATIONS, TYPE_NAMES};
use crate::favorites::FavoritesStore;
use crossterm::event::KeyCode;

/// Rows visible at once in the search result list.
pub const SEARCH_WINDOW: usize = 8;
/// Rows visible at once in the browse and favorites lists.
pub const LIST_WINDOW: usize = 10;

/// The screens of the state machine. `MainView` is initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainView,
    Search,
    BrowseByType,
    BrowseByGeneration,
    GenerationList,
    Favorites,
    Detail,
}

pub struct App {
    pokedex: Pokedex,
    favorites: FavoritesStore,
    /// Id of the current entity. `None` only for an empty catalog.
    current: Option<u32>,

    pub screen: Screen,
    pub show_shiny: bool,
    pub should_quit: bool,

    pub search_query: String,
    pub search_results: Vec<u32>,
    pub search_cursor: usize,

    pub type_cursor: usize,
    pub generation_cursor: usize,
    pub generation_list_cursor: usize,
    pub favorites_cursor: usize,

    /// Shared list buffer filled by the type/generation/favorites screens.
    pub current_list: Vec<u32>,

    // Terminal dimensions for responsive layout
    pub width: u16,
    pub height: u16,

    /// Latest non-fatal problem (favorites write failure), shown in the
    /// footer until the next successful mutation.
    pub warning: Option<String>,
}

impl App {
    pub fn new(pokedex: Pokedex, favorites: FavoritesStore) -> Self {
        let current = pokedex.first().map(|p| p.id);
        Self {
            pokedex,
            favorites,
            current,
            screen: Screen::MainView,
            show_shiny: false,
            should_quit: false,
            search_query: String::new(),
            search_results: Vec::new(),
            search_cursor: 0,
            type_cursor: 0,
            generation_cursor: 0,
            generation_list_cursor: 0,
            favorites_cursor: 0,
            current_list: Vec::new(),
            width: 80,
            height: 24,
            warning: None,
        }
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// The current entity, falling back to the first catalog entry.
    /// `None` only when the catalog is empty.
    pub fn current_pokemon(&self) -> Option<&Pokemon> {
        self.current
            .and_then(|id| self.pokedex.get_by_id(id))
            .or_else(|| self.pokedex.first())
    }

    /// Favorite status of the current entity, computed from the store.
    pub fn current_is_favorite(&self) -> bool {
        self.current_pokemon()
            .is_some_and(|p| self.favorites.is_favorite(p.id))
    }

    /// Resolve the shared list buffer to catalog records, skipping ids the
    /// catalog cannot resolve.
    pub fn current_list_pokemon(&self) -> Vec<&Pokemon> {
        self.current_list
            .iter()
            .filter_map(|&id| self.pokedex.get_by_id(id))
            .collect()
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Feed one key event into the state machine.
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.screen {
            Screen::MainView => self.update_main_view(key),
            Screen::Search => self.update_search(key),
            Screen::BrowseByType => self.update_browse_type(key),
            Screen::BrowseByGeneration => self.update_browse_generation(key),
            Screen::GenerationList => self.update_generation_list(key),
            Screen::Favorites => self.update_favorites(key),
            Screen::Detail => self.update_detail(key),
        }
    }

    fn update_main_view(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => self.step_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.step_next(),
            KeyCode::Char('1') => {
                self.screen = Screen::Search;
                self.search_query.clear();
                self.search_results.clear();
                self.search_cursor = 0;
            }
            KeyCode::Char('2') => {
                self.screen = Screen::BrowseByType;
                self.type_cursor = 0;
            }
            KeyCode::Char('3') => {
                self.screen = Screen::BrowseByGeneration;
                self.generation_cursor = 0;
            }
            KeyCode::Char('4') => {
                self.enter_favorites();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.current_pokemon().is_some() {
                    self.screen = Screen::Detail;
                }
            }
            _ => {}
        }
    }

    fn update_search(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.screen = Screen::MainView;
            }
            KeyCode::Backspace => {
                if self.search_query.pop().is_some() {
                    self.refresh_search_results();
                }
            }
            KeyCode::Enter => {
                if let Some(&id) = self.search_results.get(self.search_cursor) {
                    self.current = Some(id);
                    self.screen = Screen::MainView;
                }
            }
            KeyCode::Up => {
                self.search_cursor = self.search_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.search_cursor + 1 < self.search_results.len() {
                    self.search_cursor += 1;
                }
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.refresh_search_results();
            }
            _ => {}
        }
    }

    /// Re-run the search and reset the result cursor. An empty query yields
    /// an empty result list, not the whole catalog.
    fn refresh_search_results(&mut self) {
        self.search_cursor = 0;
        if self.search_query.is_empty() {
            self.search_results.clear();
            return;
        }
        self.search_results = self
            .pokedex
            .search(&SearchFilter::query(self.search_query.clone()))
            .iter()
            .map(|p| p.id)
            .collect();
    }

    fn update_browse_type(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.screen = Screen::MainView;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.type_cursor = self.type_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.type_cursor + 1 < TYPE_NAMES.len() {
                    self.type_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let type_name = TYPE_NAMES[self.type_cursor];
                self.current_list = self.pokedex.by_type(type_name).iter().map(|p| p.id).collect();
                if let Some(&first) = self.current_list.first() {
                    self.current = Some(first);
                }
                self.screen = Screen::MainView;
            }
            _ => {}
        }
    }

    fn update_browse_generation(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.screen = Screen::MainView;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.generation_cursor = self.generation_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.generation_cursor + 1 < GENERATIONS.len() {
                    self.generation_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let generation = GENERATIONS[self.generation_cursor];
                self.current_list = self
                    .pokedex
                    .by_generation(generation.id)
                    .iter()
                    .map(|p| p.id)
                    .collect();
                self.generation_list_cursor = 0;
                // An empty generation stays on the picker.
                if !self.current_list.is_empty() {
                    self.screen = Screen::GenerationList;
                }
            }
            _ => {}
        }
    }

    fn update_generation_list(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.screen = Screen::BrowseByGeneration;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.generation_list_cursor = self.generation_list_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.generation_list_cursor + 1 < self.current_list.len() {
                    self.generation_list_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(&id) = self.current_list.get(self.generation_list_cursor) {
                    self.current = Some(id);
                    self.screen = Screen::MainView;
                }
            }
            _ => {}
        }
    }

    fn update_favorites(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.screen = Screen::MainView;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.favorites_cursor = self.favorites_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.favorites_cursor + 1 < self.current_list.len() {
                    self.favorites_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(&id) = self.current_list.get(self.favorites_cursor) {
                    self.current = Some(id);
                    self.screen = Screen::MainView;
                }
            }
            _ => {}
        }
    }

    fn update_detail(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.screen = Screen::MainView;
            }
            KeyCode::Char('s') => {
                self.show_shiny = !self.show_shiny;
            }
            KeyCode::Char('f') => self.toggle_current_favorite(),
            KeyCode::Left | KeyCode::Char('h') => self.step_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.step_next(),
            _ => {}
        }
    }

    /// Enter the favorites screen, rebuilding the list from the store:
    /// favorite ids sorted ascending, unresolvable ids skipped.
    fn enter_favorites(&mut self) {
        let mut ids = self.favorites.all();
        ids.sort_unstable();
        self.current_list = ids
            .into_iter()
            .filter(|&id| self.pokedex.get_by_id(id).is_some())
            .collect();
        self.favorites_cursor = 0;
        self.screen = Screen::Favorites;
    }

    fn step_next(&mut self) {
        let Some(id) = self.current_pokemon().map(|p| p.id) else {
            return;
        };
        self.current = self.pokedex.next_after(id).map(|p| p.id);
    }

    fn step_prev(&mut self) {
        let Some(id) = self.current_pokemon().map(|p| p.id) else {
            return;
        };
        self.current = self.pokedex.prev_before(id).map(|p| p.id);
    }

    /// Toggle the favorite state of the current entity. A persistence
    /// failure keeps the in-memory change and surfaces a warning instead of
    /// crashing the session.
    fn toggle_current_favorite(&mut self) {
        let Some(id) = self.current_pokemon().map(|p| p.id) else {
            return;
        };
        match self.favorites.toggle(id) {
            Ok(_) => self.warning = None,
            Err(e) => self.warning = Some(format!("Could not save favorites: {e:#}")),
        }
    }
}

/// The window of `[start, end)` indices visible for a cursor in a list of
/// `len` items: the cursor stays inside a fixed-size window whose start is
/// `max(0, cursor - window + 1)`.
pub fn scroll_window(cursor: usize, len: usize, window: usize) -> (usize, usize) {
    let start = if cursor >= window {
        cursor + 1 - window
    } else {
        0
    };
    (start, len.min(start + window))
}
