//! Property-based tests for display width measurement
//!
//! Tests invariants:
//! - `k` wide and `m` narrow characters measure `2k + m`
//! - Escape sequences never change the measured width
//! - Padding always lands on the target width

use proptest::prelude::*;

use crate::tui::widgets::width::{box_padding, display_width, pad_to_width, truncate_to_width};

// ============================================================================
// Strategies
// ============================================================================

/// A mix of CJK ideographs and printable ASCII, with the counts of each.
fn arb_mixed() -> impl Strategy<Value = (String, usize, usize)> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('\u{4E00}', '\u{9FA5}').prop_map(|c| (c, true)),
            prop::char::range(' ', '~').prop_map(|c| (c, false)),
        ],
        0..60,
    )
    .prop_map(|chars| {
        let wide = chars.iter().filter(|(_, w)| *w).count();
        let narrow = chars.len() - wide;
        (chars.into_iter().map(|(c, _)| c).collect(), wide, narrow)
    })
}

/// SGR sequences as emitted for colors and bold.
fn arb_sgr() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("\x1b[0m".to_string()),
        Just("\x1b[1m".to_string()),
        (30u8..38).prop_map(|c| format!("\x1b[{c}m")),
        (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| format!("\x1b[38;2;{r};{g};{b}m")),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: width is 2 per wide character and 1 per other character.
    #[test]
    fn prop_width_counts_wide_twice((text, wide, narrow) in arb_mixed()) {
        prop_assert_eq!(display_width(&text), 2 * wide + narrow);
    }

    /// Property: wrapping text in escape sequences does not change its width.
    #[test]
    fn prop_markup_is_invisible(
        (text, _, _) in arb_mixed(),
        open in arb_sgr(),
        close in arb_sgr()
    ) {
        let styled = format!("{open}{text}{close}");
        prop_assert_eq!(display_width(&styled), display_width(&text));
    }

    /// Property: content plus padding plus border fills the target exactly
    /// whenever the content fits.
    #[test]
    fn prop_box_padding_fills_target((text, _, _) in arb_mixed(), target in 4usize..140) {
        let pad = box_padding(target, 4, &text);
        let width = display_width(&text);
        if width + 4 <= target {
            prop_assert_eq!(width + pad + 4, target);
        } else {
            prop_assert_eq!(pad, 0);
        }
    }

    /// Property: padding reaches the width, truncation never exceeds it.
    #[test]
    fn prop_pad_and_truncate_bounds((text, _, _) in arb_mixed(), width in 0usize..80) {
        let padded = pad_to_width(&text, width);
        prop_assert_eq!(display_width(&padded), display_width(&text).max(width));
        prop_assert!(display_width(&truncate_to_width(&text, width)) <= width);
    }
}
