//! Rendering functions for drawing the TUI.
//!
//! Every screen is drawn purely from [`App`] read accessors: the renderer
//! never mutates navigation state, and art comes from the injected
//! [`ArtProvider`]. Layout is a fixed header / body / footer split; the body
//! changes with the active screen.

use crate::catalog::{Pokemon, GENERATIONS, TYPE_NAMES};
use crate::ui::app::{scroll_window, App, Screen, LIST_WINDOW, SEARCH_WINDOW};
use crate::ui::art::{placeholder_art, ArtProvider};
use crate::ui::theme::{type_color, type_glyph, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App, theme: &Theme, art: &dyn ArtProvider) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, theme, chunks[0]);

    match app.screen {
        Screen::MainView => render_main_view(frame, app, theme, art, chunks[1]),
        Screen::Search => render_search(frame, app, theme, chunks[1]),
        Screen::BrowseByType => render_browse_type(frame, app, theme, chunks[1]),
        Screen::BrowseByGeneration => render_browse_generation(frame, app, theme, chunks[1]),
        Screen::GenerationList => render_generation_list(frame, app, theme, chunks[1]),
        Screen::Favorites => render_favorites(frame, app, theme, chunks[1]),
        Screen::Detail => render_detail(frame, app, theme, art, chunks[1]),
    }

    render_footer(frame, app, theme, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let title = match app.screen {
        Screen::MainView | Screen::Detail => "  📖 POKÉDEX  ",
        Screen::Search => "  🔍 Search  ",
        Screen::BrowseByType => "  🎨 Browse by Type  ",
        Screen::BrowseByGeneration | Screen::GenerationList => "  📚 Browse by Generation  ",
        Screen::Favorites => "  ⭐ Favorites  ",
    };

    let header = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let (text, style) = if let Some(warning) = &app.warning {
        (warning.as_str(), Style::default().fg(theme.error))
    } else {
        let hint = match app.screen {
            Screen::MainView => " q quit   ◀ ▶ browse   Enter details ",
            Screen::Detail => " s shiny   f favorite   ◀ ▶ browse   q back ",
            Screen::Search => " type to search   ↑ ↓ select   Enter confirm   Esc back ",
            _ => " ↑ ↓ select   Enter confirm   q back ",
        };
        (hint, Style::default().fg(theme.fg_dim))
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center),
        area,
    );
}

fn render_main_view(frame: &mut Frame, app: &App, theme: &Theme, art: &dyn ArtProvider, area: Rect) {
    let Some(pokemon) = app.current_pokemon() else {
        render_empty_catalog(frame, theme, area);
        return;
    };

    let mut lines = art_lines(pokemon, app.show_shiny, art);
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            format!("#{} {} {}", pokemon.id, pokemon.display_name(), type_glyphs(pokemon)),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));

    for (hotkey, label) in [
        ("1", "🔍 Search"),
        ("2", "🎨 Types"),
        ("3", "📚 Generations"),
        ("4", "⭐ Favorites"),
    ] {
        lines.push(
            Line::from(vec![
                Span::styled(format!("[{hotkey}] "), Style::default().fg(theme.secondary)),
                Span::styled(label, Style::default().fg(theme.fg)),
            ])
            .alignment(Alignment::Center),
        );
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_search(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Type a name or number:",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("> {}_", app.search_query),
            Style::default().fg(theme.secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Results:",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
    ];

    if app.search_results.is_empty() {
        if !app.search_query.is_empty() {
            lines.push(Line::from(Span::styled(
                "No results found",
                Style::default().fg(theme.fg_dim),
            )));
        }
    } else {
        let (start, end) = scroll_window(app.search_cursor, app.search_results.len(), SEARCH_WINDOW);
        for i in start..end {
            if let Some(pokemon) = app
                .search_results
                .get(i)
                .and_then(|&id| app.pokedex().get_by_id(id))
            {
                lines.push(entry_row(pokemon, i == app.search_cursor, theme));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines).block(content_block(theme)), area);
}

fn render_browse_type(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let lines: Vec<Line> = TYPE_NAMES
        .iter()
        .enumerate()
        .map(|(i, type_name)| {
            let selected = i == app.type_cursor;
            let count = app.pokedex().by_type(type_name).len();
            let marker = if selected { ">" } else { " " };
            Line::from(vec![
                Span::styled(
                    format!("{marker} {} ", type_glyph(type_name)),
                    cursor_style(selected, theme),
                ),
                Span::styled(format!("{type_name:<12}"), Style::default().fg(type_color(type_name))),
                Span::styled(format!(" {count:>4}"), Style::default().fg(theme.fg_dim)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(content_block(theme)), area);
}

fn render_browse_generation(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let lines: Vec<Line> = GENERATIONS
        .iter()
        .enumerate()
        .map(|(i, gen)| {
            let selected = i == app.generation_cursor;
            let count = app.pokedex().by_generation(gen.id).len();
            let marker = if selected { ">" } else { " " };
            Line::from(vec![
                Span::styled(
                    format!("{marker} {:<16} ({:<8})", gen.name, gen.region),
                    cursor_style(selected, theme),
                ),
                Span::styled(format!(" {count:>4}"), Style::default().fg(theme.fg_dim)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(content_block(theme)), area);
}

fn render_generation_list(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let gen = &GENERATIONS[app.generation_cursor];
    let title = format!(" {} - {} ", gen.name, gen.region);
    render_entity_list(
        frame,
        app,
        theme,
        area,
        &title,
        app.generation_list_cursor,
        "This generation is empty",
    );
}

fn render_favorites(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    render_entity_list(
        frame,
        app,
        theme,
        area,
        " ⭐ Favorites ",
        app.favorites_cursor,
        "No favorites yet",
    );
}

/// Shared windowed list view over `App::current_list`.
fn render_entity_list(
    frame: &mut Frame,
    app: &App,
    theme: &Theme,
    area: Rect,
    title: &str,
    cursor: usize,
    empty_text: &str,
) {
    let entries = app.current_list_pokemon();
    let mut lines = Vec::new();

    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            empty_text,
            Style::default().fg(theme.fg_dim),
        )));
    } else {
        let (start, end) = scroll_window(cursor, entries.len(), LIST_WINDOW);
        for (i, pokemon) in entries.iter().enumerate().take(end).skip(start) {
            lines.push(entry_row(pokemon, i == cursor, theme));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Total: {}", entries.len()),
            Style::default().fg(theme.fg_dim),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(content_block(theme).title(title.to_string())),
        area,
    );
}

fn render_detail(frame: &mut Frame, app: &App, theme: &Theme, art: &dyn ArtProvider, area: Rect) {
    let Some(pokemon) = app.current_pokemon() else {
        render_empty_catalog(frame, theme, area);
        return;
    };

    let favorite_mark = if app.current_is_favorite() { " ⭐" } else { "" };
    let mut lines = vec![Line::from(Span::styled(
        format!(
            "#{} {} {}{}",
            pokemon.id,
            pokemon.display_name(),
            type_glyphs(pokemon),
            favorite_mark
        ),
        Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
    ))];

    lines.extend(art_lines(pokemon, app.show_shiny, art));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(
            format!(
                "Height: {:.1}m   Weight: {:.1}kg   Base XP: {}",
                pokemon.height / 10.0,
                pokemon.weight / 10.0,
                pokemon.base_experience
            ),
            Style::default().fg(theme.fg),
        ),
        Span::styled(
            if app.show_shiny { "   [shiny ✨]" } else { "   [normal]" },
            Style::default().fg(theme.secondary),
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Stats:",
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )));
    for (label, value) in [
        ("HP", pokemon.stats.hp),
        ("Attack", pokemon.stats.attack),
        ("Defense", pokemon.stats.defense),
        ("Sp.Atk", pokemon.stats.sp_atk),
        ("Sp.Def", pokemon.stats.sp_def),
        ("Speed", pokemon.stats.speed),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label:<10}"), Style::default().fg(theme.fg)),
            Span::styled(stat_bar(value, 150), Style::default().fg(theme.accent)),
            Span::styled(format!(" {value:>3}"), Style::default().fg(theme.fg)),
        ]));
    }

    if let Some(chain) = &pokemon.evolution {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Evolution:",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", evolution_line(chain, pokemon.id)),
            Style::default().fg(theme.fg),
        )));
    }

    if !pokemon.moves.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Signature moves:",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        for mv in &pokemon.moves {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  • {} ", mv.name),
                    Style::default().fg(theme.fg),
                ),
                Span::styled(
                    format!("({} {})", type_glyph(&mv.type_name), mv.type_name),
                    Style::default().fg(type_color(&mv.type_name)),
                ),
                Span::styled(
                    format!(" - {} power", mv.power),
                    Style::default().fg(theme.fg_dim),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(content_block(theme)), area);
}

fn render_empty_catalog(frame: &mut Frame, theme: &Theme, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "The catalog is empty",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Load a data file with --data <FILE>",
            Style::default().fg(theme.fg_dim),
        ))
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

// -- Helpers ---------------------------------------------------------------

fn content_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
}

fn cursor_style(selected: bool, theme: &Theme) -> Style {
    if selected {
        Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg)
    }
}

/// A `> #  25 Pikachu ⚡` row shared by the search and list screens.
fn entry_row<'a>(pokemon: &Pokemon, selected: bool, theme: &Theme) -> Line<'a> {
    let marker = if selected { ">" } else { " " };
    let glyph = pokemon.primary_type().map(type_glyph).unwrap_or_default();
    Line::from(Span::styled(
        format!("{marker} #{:>4} {:<20} {glyph}", pokemon.id, pokemon.display_name()),
        cursor_style(selected, theme),
    ))
}

fn type_glyphs(pokemon: &Pokemon) -> String {
    pokemon
        .types
        .iter()
        .map(|t| type_glyph(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Art block for a record, colored by primary type, centered.
fn art_lines<'a>(pokemon: &Pokemon, shiny: bool, art: &dyn ArtProvider) -> Vec<Line<'a>> {
    let block = art
        .art(pokemon.id, shiny)
        .unwrap_or_else(|| placeholder_art().to_string());
    let color = pokemon
        .primary_type()
        .map(type_color)
        .unwrap_or_default();

    block
        .lines()
        .map(|l| {
            Line::from(Span::styled(l.to_string(), Style::default().fg(color)))
                .alignment(Alignment::Center)
        })
        .collect()
}

/// `█████░░░░░░░░░░` bar of fixed width 15.
fn stat_bar(value: u32, max: u32) -> String {
    const WIDTH: usize = 15;
    let max = if max == 0 { 150 } else { max };
    let filled = ((value as usize * WIDTH) / max as usize).min(WIDTH);
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(WIDTH - filled));
    bar
}

/// `Bulbasaur → (Lv16) Ivysaur → (Lv32) Venusaur` with the current stage
/// marked by a `←`.
fn evolution_line(chain: &crate::catalog::EvolutionChain, current_id: u32) -> String {
    let current_stage = chain.find_stage(current_id);
    let mut out = chain.base.name.clone();
    if current_stage == Some(0) {
        out.push_str(" ←");
    }

    for (i, stage) in chain.stages.iter().enumerate() {
        let trigger = if stage.min_level > 0 {
            format!("(Lv{})", stage.min_level)
        } else if let Some(item) = &stage.item {
            format!("({item})")
        } else {
            String::new()
        };

        if trigger.is_empty() {
            out.push_str(&format!(" → {}", stage.name));
        } else {
            out.push_str(&format!(" → {trigger} {}", stage.name));
        }
        if current_stage == Some(i + 1) {
            out.push_str(" ←");
        }
    }
    out
}
