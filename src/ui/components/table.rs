//! Result table component renderer.
//!
//! Three columns: TITLE and CATEGORY at fixed widths, DESCRIPTION taking the
//! rest. Rows arrive pre-truncated from the view model.

use crate::ui::helpers::{self, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const TITLE_WIDTH: usize = 30;
const CATEGORY_WIDTH: usize = 14;

/// Renders the bold column headers at `row`; returns the next row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        " {:<title$}{:<category$}{}",
        "TITLE",
        "CATEGORY",
        "DESCRIPTION",
        title = TITLE_WIDTH - 1,
        category = CATEGORY_WIDTH
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders `items` one per row starting at `row`; returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// One row, padded to full width so the selection background spans the line.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("▶");
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!(" ");
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    let title_len = text_width(&item.title) + 1;
    print!("{}", " ".repeat(TITLE_WIDTH.saturating_sub(title_len)));

    print!("{}", item.category);
    print!("{}", " ".repeat(CATEGORY_WIDTH.saturating_sub(text_width(&item.category))));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.description);

    let line_len = TITLE_WIDTH.max(title_len) + CATEGORY_WIDTH + text_width(&item.description);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
