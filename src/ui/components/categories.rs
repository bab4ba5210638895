//! Category bar component renderer.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CategoryTab;

/// Renders category tabs on one line at `row`; returns the next row.
///
/// The selected tab is bold in the accent color. Tabs that do not fit are
/// replaced by a trailing `…`, except the selected one, which is always
/// shown by scrolling the bar.
pub fn render_category_bar(row: usize, tabs: &[CategoryTab], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let labels: Vec<String> = tabs.iter().map(|tab| format!(" {} ", tab.label)).collect();
    let first = first_visible_tab(&labels, tabs, cols);

    let mut used = 1;
    print!(" ");
    for (tab, label) in tabs.iter().zip(&labels).skip(first) {
        let width = text_width(label) + 1;
        if used + width > cols.saturating_sub(1) {
            print!("{}…", Theme::fg(&theme.colors.text_dim));
            used += 1;
            break;
        }

        if tab.is_selected {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{label}");
        print!("{} ", Theme::reset());
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

/// Index of the first tab to draw so the selected one fits.
fn first_visible_tab(labels: &[String], tabs: &[CategoryTab], cols: usize) -> usize {
    let Some(selected) = tabs.iter().position(|tab| tab.is_selected) else {
        return 0;
    };

    let budget = cols.saturating_sub(3);
    let mut first = 0;
    while first < selected {
        let width: usize = labels[first..=selected]
            .iter()
            .map(|label| text_width(label) + 1)
            .sum();
        if width <= budget {
            break;
        }
        first += 1;
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(selected: usize) -> Vec<CategoryTab> {
        ["All", "Racing", "Puzzle", "Adventure"]
            .iter()
            .enumerate()
            .map(|(idx, label)| CategoryTab {
                label: (*label).to_string(),
                is_selected: idx == selected,
            })
            .collect()
    }

    #[test]
    fn wide_bar_starts_at_first_tab() {
        let tabs = tabs(3);
        let labels: Vec<String> = tabs.iter().map(|t| format!(" {} ", t.label)).collect();
        assert_eq!(first_visible_tab(&labels, &tabs, 80), 0);
    }

    #[test]
    fn narrow_bar_scrolls_to_selection() {
        let tabs = tabs(3);
        let labels: Vec<String> = tabs.iter().map(|t| format!(" {} ", t.label)).collect();
        assert_eq!(first_visible_tab(&labels, &tabs, 24), 2);
    }
}
