//! Printable renditions of the views for non-interactive output.
//!
//! View lines are converted span by span into crossterm styled content, or
//! into bare text when color is off. The profile card gets a double-line
//! frame whose right edge stays aligned for wide characters.

use std::fmt::Write as _;

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use super::theme;
use super::views::{card, ViewContext};
use super::widgets::width::box_padding;
use crate::config::DisplayConfig;
use crate::core::logging::{ColorLevel, TerminalCapabilities};

/// Columns taken by `║ ` and ` ║` around each card line.
pub const CARD_BORDER_OVERHEAD: usize = 4;

/// How much styling printed output may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// No escape sequences at all.
    Plain,
    /// Named ANSI colors and attributes; RGB colors are dropped.
    Basic,
    TrueColor,
}

impl ColorMode {
    /// Pick a mode from the detected terminal and the user's color setting.
    pub fn detect(caps: &TerminalCapabilities, enabled: bool) -> Self {
        if !enabled || !caps.should_colorize() {
            return ColorMode::Plain;
        }
        match caps.color_level {
            ColorLevel::TrueColor => ColorMode::TrueColor,
            ColorLevel::Ansi256 | ColorLevel::Ansi16 => ColorMode::Basic,
            ColorLevel::NoColor => ColorMode::Plain,
        }
    }
}

/// Content columns inside the card frame.
pub fn card_content_width(display: &DisplayConfig) -> usize {
    usize::from(display.card_width).saturating_sub(CARD_BORDER_OVERHEAD)
}

fn term_color(color: Color, mode: ColorMode) -> Option<TermColor> {
    let mapped = match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Indexed(i) => TermColor::AnsiValue(i),
        Color::Rgb(r, g, b) => match mode {
            ColorMode::TrueColor => TermColor::Rgb { r, g, b },
            ColorMode::Basic | ColorMode::Plain => return None,
        },
    };
    Some(mapped)
}

fn content_style(style: Style, mode: ColorMode) -> ContentStyle {
    let mut out = ContentStyle::new();
    out.foreground_color = style.fg.and_then(|c| term_color(c, mode));
    out.background_color = style.bg.and_then(|c| term_color(c, mode));

    let modifiers = [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::REVERSED, Attribute::Reverse),
    ];
    for (modifier, attribute) in modifiers {
        if style.add_modifier.contains(modifier) {
            out.attributes.set(attribute);
        }
    }
    out
}

fn styled(text: &str, style: Style, mode: ColorMode) -> String {
    match mode {
        ColorMode::Plain => text.to_string(),
        ColorMode::Basic | ColorMode::TrueColor => {
            content_style(style, mode).apply(text).to_string()
        }
    }
}

/// One line as printable text.
pub fn line_to_ansi(line: &Line<'_>, mode: ColorMode) -> String {
    let mut out = String::new();
    for span in &line.spans {
        out.push_str(&styled(&span.content, line.style.patch(span.style), mode));
    }
    out
}

/// Lines joined with newlines, ready to print.
pub fn render_lines(lines: &[Line<'_>], mode: ColorMode) -> String {
    lines
        .iter()
        .map(|line| line_to_ansi(line, mode))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The profile card inside a double-line frame.
///
/// `ctx.width` should be [`card_content_width`] of `ctx.display`.
pub fn render_card(ctx: &ViewContext<'_>, mode: ColorMode) -> String {
    let card_width = usize::from(ctx.display.card_width);
    let inner = card_width.saturating_sub(2);
    let frame = Style::default().fg(theme::PRIMARY);
    let edge = |s: &str| styled(s, frame, mode);

    let mut out = String::new();
    let _ = writeln!(out, "{}", edge(&format!("╔{}╗", "═".repeat(inner))));
    for (i, section) in card::sections(ctx).iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out, "{}", edge(&format!("╟{}╢", "─".repeat(inner))));
        }
        for line in section {
            let content = line_to_ansi(line, mode);
            let pad = box_padding(card_width, CARD_BORDER_OVERHEAD, &content);
            let _ = writeln!(
                out,
                "{} {content}{} {}",
                edge("║"),
                " ".repeat(pad),
                edge("║")
            );
        }
    }
    let _ = write!(out, "{}", edge(&format!("╚{}╝", "═".repeat(inner))));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::badge::BadgeCatalog;
    use crate::core::profile::Profile;
    use crate::tui::views::test_support::*;
    use crate::tui::widgets::width::{display_width, strip_markup};

    fn card_text(profile: &Profile, catalog: &BadgeCatalog, mode: ColorMode) -> String {
        let display = DisplayConfig::default();
        let ctx = ViewContext {
            profile,
            catalog,
            display: &display,
            today: date("2024-08-15"),
            cursor: 0,
            width: card_content_width(&display),
        };
        render_card(&ctx, mode)
    }

    #[test]
    fn test_card_lines_share_one_width() {
        let catalog = BadgeCatalog::builtin();
        let p = sample_profile(&catalog);
        for mode in [ColorMode::Plain, ColorMode::Basic, ColorMode::TrueColor] {
            let card = card_text(&p, &catalog, mode);
            for line in card.lines() {
                assert_eq!(display_width(line), 70, "{mode:?}: {}", strip_markup(line));
            }
        }
    }

    #[test]
    fn test_card_frame_shape() {
        let catalog = BadgeCatalog::builtin();
        let p = Profile::create("Alex", "2000-01-01").unwrap();
        let card = card_text(&p, &catalog, ColorMode::Plain);
        let lines: Vec<&str> = card.lines().collect();
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert!(lines.last().unwrap().starts_with('╚'));
        assert!(lines[1].starts_with("║  LIFEWAPPEN"));
        assert_eq!(lines.iter().filter(|l| l.starts_with('╟')).count(), 3);
        assert!(card.contains("Nothing yet."));
    }

    #[test]
    fn test_plain_mode_has_no_escapes() {
        let catalog = BadgeCatalog::builtin();
        let p = sample_profile(&catalog);
        assert!(!card_text(&p, &catalog, ColorMode::Plain).contains('\x1b'));
    }

    #[test]
    fn test_color_mode_emits_escapes() {
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let catalog = BadgeCatalog::builtin();
        let p = sample_profile(&catalog);
        assert!(card_text(&p, &catalog, ColorMode::TrueColor).contains("\x1b["));
    }

    #[test]
    fn test_basic_mode_drops_rgb() {
        assert_eq!(term_color(Color::Rgb(1, 2, 3), ColorMode::Basic), None);
        assert_eq!(
            term_color(Color::Rgb(1, 2, 3), ColorMode::TrueColor),
            Some(TermColor::Rgb { r: 1, g: 2, b: 3 })
        );
        assert_eq!(term_color(Color::Magenta, ColorMode::Basic), Some(TermColor::DarkMagenta));
    }

    #[test]
    fn test_detect_respects_setting() {
        let caps = TerminalCapabilities {
            color_level: ColorLevel::TrueColor,
            supports_unicode: true,
            is_interactive: true,
            width: 80,
        };
        assert_eq!(ColorMode::detect(&caps, true), ColorMode::TrueColor);
        assert_eq!(ColorMode::detect(&caps, false), ColorMode::Plain);
        let piped = TerminalCapabilities {
            is_interactive: false,
            ..caps
        };
        assert_eq!(ColorMode::detect(&piped, true), ColorMode::Plain);
    }

    #[test]
    fn test_render_lines_plain() {
        let lines = vec![Line::from("a"), Line::from("b")];
        assert_eq!(render_lines(&lines, ColorMode::Plain), "a\nb");
    }
}
