//! Display-width helpers for aligning mixed-width text.
//!
//! Wide characters (CJK, most emoji) take two terminal columns, every other
//! character takes one. Escape sequences embedded in a string are stripped
//! before measuring, so styled and unstyled text measure the same.

use std::borrow::Cow;

use ratatui::text::Line;
use unicode_width::UnicodeWidthChar;

/// Remove ANSI escape sequences.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    console::strip_ansi_codes(text)
}

/// Columns occupied by a single character: 2 if wide, else 1.
pub fn char_width(c: char) -> usize {
    match c.width() {
        Some(2) => 2,
        _ => 1,
    }
}

/// Terminal columns occupied by `text`, ignoring escape sequences.
pub fn display_width(text: &str) -> usize {
    strip_markup(text).chars().map(char_width).sum()
}

/// Display width of a styled line.
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|s| display_width(&s.content)).sum()
}

/// Spaces needed to fill a boxed line: `target - overhead - width(content)`,
/// never negative.
pub fn box_padding(target_width: usize, border_overhead: usize, content: &str) -> usize {
    target_width
        .saturating_sub(border_overhead)
        .saturating_sub(display_width(content))
}

/// Right-pad `text` with spaces to `width` columns. Longer text is returned
/// unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(pad))
}

/// Cut `text` to at most `max` columns, marking the cut with `…`. A wide
/// character that would straddle the limit is dropped.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
