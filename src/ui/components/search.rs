//! Search bar component renderer.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box.
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box at `row`; returns the next row.
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// A focused box gets the accent border and a block cursor; an unfocused,
/// empty one shows a dimmed `/` hint instead.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let (search_text, text_color) = if search.query.is_empty() && !search.is_focused {
        (" Press / to search".to_string(), &theme.colors.text_dim)
    } else {
        let cursor = if search.is_focused { "█" } else { "" };
        (format!(" Search: {}{cursor}", search.query), &theme.colors.text_normal)
    };
    let search_text = visible_tail(&search_text, inner_width);
    let padding = inner_width.saturating_sub(text_width(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(text_color));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Keeps the end of a long query visible, where the cursor is.
fn visible_tail(text: &str, width: usize) -> String {
    let len = text_width(text);
    text.chars().skip(len.saturating_sub(width)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_query_keeps_its_tail() {
        assert_eq!(visible_tail(" Search: dragon", 6), "dragon");
        assert_eq!(visible_tail("short", 10), "short");
    }
}
