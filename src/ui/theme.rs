//! # Theme System
//!
//! Provides a centralized color theme for the Pokédex TUI.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines the semantic colors used throughout the UI.
//! Instead of hardcoding `ratatui::style::Color` values, rendering code
//! references theme fields. The theme is selected by name in the config
//! file.
//!
//! Per-type accents are separate from the theme: every one of the 18 type
//! tags has a fixed color and glyph, looked up with [`type_color`] and
//! [`type_glyph`].

use ratatui::style::Color;

/// All semantic colors used by the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name matched against the config file.
    pub name: &'static str,

    /// Primary text color (list items, stat values).
    pub fg: Color,
    /// Muted/secondary text (hints, footers, counts).
    pub fg_dim: Color,
    /// Primary accent: titles, borders, selected menu items.
    pub accent: Color,
    /// Secondary accent: the search prompt, cursor rows, favorite marks.
    pub secondary: Color,
    /// Error / warning indicator (footer warnings).
    pub error: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme.
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

static BUILT_IN_THEMES: [Theme; 3] = [
    // 0 - Kanto (default): the classic blue-and-yellow handheld palette
    Theme {
        name: "Kanto",
        fg: Color::Rgb(235, 235, 235),
        fg_dim: Color::Rgb(130, 130, 140),
        accent: Color::Rgb(66, 165, 245),
        secondary: Color::Rgb(255, 222, 0),
        error: Color::Rgb(239, 83, 80),
    },
    // 1 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        fg: Color::Rgb(205, 214, 244),
        fg_dim: Color::Rgb(108, 112, 134),
        accent: Color::Rgb(137, 180, 250),
        secondary: Color::Rgb(249, 226, 175),
        error: Color::Rgb(243, 139, 168),
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(97, 110, 136),
        accent: Color::Rgb(136, 192, 208),
        secondary: Color::Rgb(235, 203, 139),
        error: Color::Rgb(191, 97, 106),
    },
];

/// Accent color for a type tag. Unknown tags render plain white.
pub fn type_color(type_name: &str) -> Color {
    match type_name {
        "normal" => Color::Indexed(248),
        "fire" => Color::Indexed(208),
        "water" => Color::Indexed(27),
        "grass" => Color::Indexed(82),
        "electric" => Color::Indexed(226),
        "ice" => Color::Indexed(45),
        "fighting" => Color::Indexed(160),
        "poison" => Color::Indexed(153),
        "ground" => Color::Indexed(172),
        "flying" => Color::Indexed(163),
        "psychic" => Color::Indexed(203),
        "bug" => Color::Indexed(166),
        "rock" => Color::Indexed(179),
        "ghost" => Color::Indexed(111),
        "dragon" => Color::Indexed(169),
        "dark" => Color::Indexed(88),
        "steel" => Color::Indexed(201),
        "fairy" => Color::Indexed(197),
        _ => Color::Indexed(255),
    }
}

/// Emoji glyph for a type tag. Unknown tags fall back to the normal glyph.
pub fn type_glyph(type_name: &str) -> &'static str {
    match type_name {
        "fire" => "🔥",
        "water" => "💧",
        "grass" => "🌿",
        "electric" => "⚡",
        "ice" => "❄️",
        "fighting" => "👊",
        "poison" => "☠️",
        "ground" => "🌍",
        "flying" => "🕊️",
        "psychic" => "🔮",
        "bug" => "🐛",
        "rock" => "🪨",
        "ghost" => "👻",
        "dragon" => "🐉",
        "dark" => "🌑",
        "steel" => "⚙️",
        "fairy" => "🧚",
        _ => "⚪",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TYPE_NAMES;

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("kanto").is_some());
        assert!(Theme::by_name("NORD").is_some());
        assert!(Theme::by_name("missing").is_none());
    }

    #[test]
    fn test_default_theme_is_first() {
        assert_eq!(Theme::default_theme().name, Theme::all()[0].name);
    }

    #[test]
    fn test_every_canonical_type_has_a_distinct_color() {
        for name in TYPE_NAMES {
            assert_ne!(type_color(name), Color::Indexed(255), "{name}");
        }
    }
}
