//! Empty state component renderer.
//!
//! Used both for "nothing matches" inside the browser and for the splash
//! screen shown before a catalog is available.

use crate::ui::helpers::{center_padding, clip, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message with its first line at `row`.
///
/// `color` is the message color; the subtitle is always dimmed.
pub fn render_empty_state(row: usize, empty: &EmptyState, color: &str, cols: usize) {
    let message = clip(&empty.message, cols);
    let msg_len = text_width(&message);
    let msg_padding = center_padding(&message, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let subtitle = clip(&empty.subtitle, cols);
    let sub_len = text_width(&subtitle);
    let sub_padding = center_padding(&subtitle, cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
