//! Neon palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const ELECTRIC_PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const CORAL: Color = Color::Rgb(255, 106, 193); // #ff6ac1
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29
pub const LIGHT_BLUE: Color = Color::Rgb(139, 233, 253); // #8be9fd

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(ELECTRIC_PURPLE)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(NEON_CYAN)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Cursor row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Delete control in the ACTION column.
pub fn delete_control() -> Style {
    Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)
}

/// Section heading inside the detail overlay.
pub fn section_heading() -> Style {
    Style::default().fg(CORAL).add_modifier(Modifier::BOLD)
}

/// Outbound URL text.
pub fn link() -> Style {
    Style::default()
        .fg(LIGHT_BLUE)
        .add_modifier(Modifier::UNDERLINED)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}
