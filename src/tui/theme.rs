//! Color theme for the LifeWappen card and menus.
//!
//! Views import from here instead of using inline `Color::*` literals.
//! Rarity colors use the 16 named ANSI colors so printed cards keep their
//! meaning on basic terminals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::badge::Rarity;

// ── Primary palette ─────────────────────────────────────────────────────────

/// Cyan: card frame, headings.
pub const PRIMARY: Color = Color::Cyan;
/// Light cyan: hints, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::LightCyan;

// ── Accent ──────────────────────────────────────────────────────────────────

/// Coral: selection cursor, brand badge.
pub const ACCENT: Color = Color::Rgb(0xFF, 0x7F, 0x50);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
/// Muted text: secondary labels, dates.
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
/// Dim text: empty bar cells, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
/// Filled attribute bar cells, confirmations.
pub const SUCCESS: Color = Color::Green;
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

// ── Domain ──────────────────────────────────────────────────────────────────

/// Display color of a badge rarity.
pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::White,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Yellow,
    }
}

/// Badge name style for a rarity; Legendary names are bold.
pub fn rarity_style(rarity: Rarity) -> Style {
    let style = Style::default().fg(rarity_color(rarity));
    match rarity {
        Rarity::Legendary => style.add_modifier(Modifier::BOLD),
        Rarity::Common | Rarity::Rare | Rarity::Epic => style,
    }
}

// ── Style helpers ───────────────────────────────────────────────────────────

/// Accent bold text (titles).
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Emphasized number (days survived, scores).
pub fn emphasis() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

/// Key hint style (e.g., "q:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// The card frame.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PRIMARY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_colors_distinct() {
        let colors: Vec<Color> = Rarity::ALL.into_iter().map(rarity_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_rarity_color_values() {
        assert_eq!(rarity_color(Rarity::Common), Color::White);
        assert_eq!(rarity_color(Rarity::Rare), Color::Blue);
        assert_eq!(rarity_color(Rarity::Epic), Color::Magenta);
        assert_eq!(rarity_color(Rarity::Legendary), Color::Yellow);
    }

    #[test]
    fn test_style_helpers_return_non_default() {
        assert_ne!(title(), Style::default());
        assert_ne!(heading(), Style::default());
        assert_ne!(highlight(), Style::default());
        assert_ne!(muted(), Style::default());
    }
}
