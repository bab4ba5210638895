//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with result counts
//! - [`categories`]: Category tab bar
//! - [`search`]: Search input box
//! - [`table`]: Result list (TITLE, CATEGORY, DESCRIPTION)
//! - [`empty`]: Centered message for empty results and the splash screen
//! - [`viewer`]: Item viewer panel
//! - [`footer`]: Keybinding hints or status message
//!
//! # Layouts
//!
//! - [`render_splash`]: Header + message + Footer
//! - [`render_browser`]: Header + Categories + Search + Table + Footer, with
//!   the windowed viewer drawn over the table when open
//! - [`render_fullscreen_viewer`]: Header + Viewer + Footer

mod categories;
mod empty;
mod footer;
mod header;
mod search;
mod table;
mod viewer;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, UIViewModel, ViewerInfo};

use categories::render_category_bar;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};
use viewer::{render_viewer, Frame};

/// Widest the windowed viewer gets.
const WINDOWED_VIEWER_MAX_WIDTH: usize = 72;

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_footer_block(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Loading or failure screen shown until a catalog is installed.
pub fn render_splash(vm: &UIViewModel, splash: &EmptyState, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let color = if splash.message == "Loading catalog..." {
        &theme.colors.empty_state_fg
    } else {
        &theme.colors.error_fg
    };
    render_empty_state(current_row + 3, splash, color, cols);

    render_footer_block(vm, theme, cols, rows);
}

/// Browser layout:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Category bar]
/// [Search Bar - 3 lines]
/// [Table Headers]
/// [Table Rows | Empty state]
/// [Border]
/// [Footer]
/// ```
pub fn render_browser(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_category_bar(current_row, &vm.categories, theme, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_table_headers(current_row, theme);
    let table_top = current_row;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(table_top + 1, empty, &theme.colors.empty_state_fg, cols);
    } else {
        render_table_rows(table_top, &vm.display_items, theme, cols);
    }

    render_footer_block(vm, theme, cols, rows);

    if let Some(viewer) = vm.viewer.as_ref().filter(|v| !v.is_fullscreen) {
        let top = table_top - 1;
        let height = rows.saturating_sub(2).saturating_sub(top);
        let frame = Frame::centered(top, height, cols, WINDOWED_VIEWER_MAX_WIDTH);
        render_viewer(frame, viewer, theme);
    }
}

/// Fullscreen viewer: the panel takes every row between header and footer.
pub fn render_fullscreen_viewer(
    vm: &UIViewModel,
    viewer: &ViewerInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let current_row = render_header(1, &vm.header, theme, cols);

    let frame = Frame {
        top: current_row,
        left: 1,
        height: rows.saturating_sub(current_row + 1),
        width: cols,
    };
    render_viewer(frame, viewer, theme);

    render_footer(rows, &vm.footer, theme, cols);
}
