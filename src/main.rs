//! # Pokédex CLI Entry Point
//!
//! This is the main entry point for the Pokédex TUI application.
//!
//! ## Overview
//!
//! The Pokédex is a terminal browser over a fixed Pokémon catalog: cycle
//! through entries, search by name or number, browse by type or generation,
//! and keep a persisted favorites list.
//!
//! ## Usage
//!
//! ```bash
//! # Browse the built-in sample catalog
//! pokedex
//!
//! # Load a catalog file
//! pokedex --data ./pokedex.json
//!
//! # Use a specific favorites file
//! pokedex --favorites ~/.pokedex-favorites.json
//!
//! # Debug mode - print the loaded catalog and exit
//! pokedex --debug
//! ```
//!
//! ## Key Bindings
//!
//! ### Main view
//! - `q` / `Esc` - Quit the application
//! - `◀` / `▶` (or `h` / `l`) - Previous / next entry
//! - `1` - Search, `2` - Browse by type, `3` - Browse by generation,
//!   `4` - Favorites
//! - `Enter` / `Space` - Open the detail view
//!
//! ### Detail view
//! - `s` - Toggle shiny art
//! - `f` - Toggle favorite
//! - `◀` / `▶` - Previous / next entry
//! - `q` / `Esc` - Back
//!
//! ### Everywhere else
//! - `↑` / `↓` - Move the cursor
//! - `Enter` - Confirm the selection
//! - `q` / `Esc` - Back to the parent screen

use pokedex::data;
use pokedex::favorites::FavoritesStore;
use pokedex::ui::art::{ArtProvider, FileArtProvider, LayeredArtProvider};
use pokedex::ui::config::Config;
use pokedex::ui::theme::Theme;
use pokedex::ui::{render, App};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Pokédex - a terminal browser for a Pokémon catalog
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse, search, and favorite Pokémon in your terminal", long_about = None)]
struct Args {
    /// Path to a catalog JSON file (defaults to the built-in sample set)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Path to the favorites file (defaults to the user data directory)
    #[arg(short = 'f', long, value_name = "FILE")]
    favorites: Option<PathBuf>,

    /// Directory of ASCII art files (<id>.txt / <id>_shiny.txt)
    #[arg(long, value_name = "DIR")]
    art: Option<PathBuf>,

    /// Print debug information about the loaded catalog and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    let config = Config::load();

    // Load the catalog: explicit file, configured file, or the sample set
    let data_path = args.data.or_else(|| config.data_file.clone());
    let pokedex = match &data_path {
        Some(path) => data::load_catalog(path)?,
        None => data::sample_catalog(),
    };

    // Debug mode: print the loaded catalog and exit
    if args.debug {
        println!("=== Catalog ===");
        for p in pokedex.iter() {
            println!(
                "  #{:<4} {:<20} gen {}  [{}]",
                p.id,
                p.name,
                p.generation,
                p.types.join(", ")
            );
        }
        println!("\nTotal: {} entries", pokedex.len());
        return Ok(());
    }

    // Favorites: explicit path, configured path, or the XDG data directory.
    // A corrupted file is reported and replaced by an empty set rather than
    // aborting the session.
    let favorites_path = match args.favorites.or_else(|| config.favorites_file.clone()) {
        Some(path) => path,
        None => default_favorites_path()?,
    };
    let favorites = match FavoritesStore::load(&favorites_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Warning: Could not load favorites: {e:#}");
            FavoritesStore::empty(&favorites_path)
        }
    };

    let theme = Theme::by_name(&config.theme).unwrap_or_else(Theme::default_theme);

    // Art sources, tried in order: an explicit --art directory, then the
    // local assets directory.
    let mut layers: Vec<Box<dyn ArtProvider>> = Vec::new();
    if let Some(dir) = args.art {
        layers.push(Box::new(FileArtProvider::new(dir)));
    }
    layers.push(Box::new(FileArtProvider::new("assets/art")));
    let art = LayeredArtProvider::new(layers);

    let mut app = App::new(pokedex, favorites);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, theme, &art, &mut event_reader).await;

    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Resolve the default favorites file in the platform data directory.
fn default_favorites_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "pokedex")
        .context("Failed to determine application data directory")?;
    Ok(dirs.data_dir().join("favorites.json"))
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    theme: &Theme,
    art: &dyn ArtProvider,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| render(f, app, theme, art))
            .context("Failed to draw terminal UI")?;

        let event = match event_reader.read_event(Duration::from_millis(100))? {
            Some(e) => e,
            None => continue,
        };

        match event {
            Event::Key(key) => app.handle_key(key.code),
            Event::Resize(width, height) => app.resize(width, height),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
