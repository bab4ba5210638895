//! Footer component renderer.
//!
//! Keybinding hints are centered and dimmed. A status message, when present,
//! replaces them in the error color until the next successful open.

use crate::ui::helpers::{center_padding, clip, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer at `row`; returns the next row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let (text, color) = footer.status.as_ref().map_or_else(
        || (&footer.keybindings, &theme.colors.text_dim),
        |status| (status, &theme.colors.error_fg),
    );

    let text = clip(text, cols);
    let text_len = text_width(&text);
    let padding = center_padding(&text, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
