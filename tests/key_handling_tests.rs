//! Keyboard event handling tests
//!
//! Tests for the per-screen key bindings: quit keys, screen entry hotkeys,
//! search input editing, cursor movement, and back-navigation.

use crossterm::event::KeyCode;
use pokedex::catalog::{Pokedex, Pokemon, Stats};
use pokedex::favorites::FavoritesStore;
use pokedex::ui::{App, Screen};
use tempfile::TempDir;

fn entry(id: u32, name: &str, generation: u8, types: &[&str]) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        name_local: String::new(),
        generation,
        types: types.iter().map(|t| t.to_string()).collect(),
        height: 7.0,
        weight: 69.0,
        base_experience: 64,
        stats: Stats::default(),
        moves: Vec::new(),
        evolution: None,
    }
}

/// Helper to create a test app over a small Kanto/Johto catalog.
///
/// The temp dir backing the favorites store must outlive the app, so it is
/// returned alongside it.
fn create_test_app() -> (App, TempDir) {
    let mut pokedex = Pokedex::new();
    pokedex.add(entry(1, "Bulbasaur", 1, &["grass", "poison"]));
    pokedex.add(entry(4, "Charmander", 1, &["fire"]));
    pokedex.add(entry(6, "Charizard", 1, &["fire", "flying"]));
    pokedex.add(entry(25, "Pikachu", 1, &["electric"]));
    pokedex.add(entry(152, "Chikorita", 2, &["grass"]));

    let temp_dir = TempDir::new().unwrap();
    let favorites = FavoritesStore::empty(temp_dir.path().join("favorites.json"));

    (App::new(pokedex, favorites), temp_dir)
}

#[test]
fn test_quit_with_q_key() {
    let (mut app, _dir) = create_test_app();

    assert!(!app.should_quit);
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_quit_with_esc_key() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Esc);
    assert!(app.should_quit);
}

#[test]
fn test_unbound_key_is_ignored() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Tab);
    assert_eq!(app.screen, Screen::MainView);
    assert!(!app.should_quit);
}

#[test]
fn test_hotkeys_enter_each_screen() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Char('1'));
    assert_eq!(app.screen, Screen::Search);
    app.handle_key(KeyCode::Esc);

    app.handle_key(KeyCode::Char('2'));
    assert_eq!(app.screen, Screen::BrowseByType);
    app.handle_key(KeyCode::Esc);

    app.handle_key(KeyCode::Char('3'));
    assert_eq!(app.screen, Screen::BrowseByGeneration);
    app.handle_key(KeyCode::Esc);

    app.handle_key(KeyCode::Char('4'));
    assert_eq!(app.screen, Screen::Favorites);
    app.handle_key(KeyCode::Esc);

    assert_eq!(app.screen, Screen::MainView);
}

#[test]
fn test_enter_opens_detail_view() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Enter);
    assert_eq!(app.screen, Screen::Detail);

    app.handle_key(KeyCode::Char('q'));
    assert_eq!(app.screen, Screen::MainView);

    app.handle_key(KeyCode::Char(' '));
    assert_eq!(app.screen, Screen::Detail);
}

#[test]
fn test_main_view_arrows_cycle_entries() {
    let (mut app, _dir) = create_test_app();

    assert_eq!(app.current_pokemon().unwrap().id, 1);

    app.handle_key(KeyCode::Right);
    assert_eq!(app.current_pokemon().unwrap().id, 4);

    app.handle_key(KeyCode::Char('l'));
    assert_eq!(app.current_pokemon().unwrap().id, 6);

    app.handle_key(KeyCode::Char('h'));
    app.handle_key(KeyCode::Left);
    assert_eq!(app.current_pokemon().unwrap().id, 1);

    // Stepping back from the first entry wraps to the last
    app.handle_key(KeyCode::Left);
    assert_eq!(app.current_pokemon().unwrap().id, 152);
}

#[test]
fn test_search_entry_resets_query_state() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('p'));
    assert_eq!(app.search_query, "p");

    // Re-entering the search screen starts from a blank query
    app.handle_key(KeyCode::Esc);
    app.handle_key(KeyCode::Char('1'));
    assert_eq!(app.search_query, "");
    assert!(app.search_results.is_empty());
    assert_eq!(app.search_cursor, 0);
}

#[test]
fn test_search_typing_and_backspace() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('p'));
    app.handle_key(KeyCode::Char('i'));
    assert_eq!(app.search_query, "pi");
    assert_eq!(app.search_results, vec![25]);

    app.handle_key(KeyCode::Backspace);
    assert_eq!(app.search_query, "p");

    // Emptying the query clears the results instead of listing everything
    app.handle_key(KeyCode::Backspace);
    assert_eq!(app.search_query, "");
    assert!(app.search_results.is_empty());

    // Backspace on an empty query is a no-op
    app.handle_key(KeyCode::Backspace);
    assert_eq!(app.search_query, "");
}

#[test]
fn test_search_cursor_is_bounded() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('a'));
    // "a" matches Bulbasaur, Charmander, Charizard, Pikachu, Chikorita
    assert_eq!(app.search_results.len(), 5);

    app.handle_key(KeyCode::Up);
    assert_eq!(app.search_cursor, 0);

    for _ in 0..10 {
        app.handle_key(KeyCode::Down);
    }
    assert_eq!(app.search_cursor, 4);
}

#[test]
fn test_search_q_leaves_instead_of_typing() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('q'));
    assert_eq!(app.screen, Screen::MainView);
    assert!(!app.should_quit);
}

#[test]
fn test_search_enter_without_results_stays() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('z'));
    assert!(app.search_results.is_empty());

    app.handle_key(KeyCode::Enter);
    assert_eq!(app.screen, Screen::Search);
}

#[test]
fn test_type_browser_cursor_movement() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Char('2'));
    assert_eq!(app.type_cursor, 0);

    app.handle_key(KeyCode::Down);
    app.handle_key(KeyCode::Char('j'));
    assert_eq!(app.type_cursor, 2);

    app.handle_key(KeyCode::Char('k'));
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Up);
    assert_eq!(app.type_cursor, 0);

    // Bounded at the end of the 18-entry type table
    for _ in 0..30 {
        app.handle_key(KeyCode::Down);
    }
    assert_eq!(app.type_cursor, 17);
}

#[test]
fn test_generation_list_back_returns_to_picker() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Char('3'));
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.screen, Screen::GenerationList);

    app.handle_key(KeyCode::Char('q'));
    assert_eq!(app.screen, Screen::BrowseByGeneration);

    app.handle_key(KeyCode::Esc);
    assert_eq!(app.screen, Screen::MainView);
}

#[test]
fn test_detail_shiny_toggle() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Enter);
    assert!(!app.show_shiny);

    app.handle_key(KeyCode::Char('s'));
    assert!(app.show_shiny);

    app.handle_key(KeyCode::Char('s'));
    assert!(!app.show_shiny);
}

#[test]
fn test_detail_arrows_step_entries() {
    let (mut app, _dir) = create_test_app();

    app.handle_key(KeyCode::Enter);
    app.handle_key(KeyCode::Right);
    assert_eq!(app.screen, Screen::Detail);
    assert_eq!(app.current_pokemon().unwrap().id, 4);

    app.handle_key(KeyCode::Left);
    assert_eq!(app.current_pokemon().unwrap().id, 1);
}

#[test]
fn test_resize_updates_dimensions() {
    let (mut app, _dir) = create_test_app();

    app.resize(120, 40);
    assert_eq!(app.width, 120);
    assert_eq!(app.height, 40);
}
