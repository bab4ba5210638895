//! Application state and view model computation.
//!
//! [`AppState`] wraps the [`Engine`] with the presentation-only state the
//! plugin needs: which widget has input focus, where the result cursor sits,
//! the active theme, and catalog load status. The engine stays the sole owner
//! of session state; this layer only calls its intents.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a read-only borrow of the state into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel): windowed result rows,
//! substring highlight ranges, category tabs, the viewer panel and footer hints.
//!
//! # Example
//!
//! ```rust
//! use gamedeck::{AppState, Catalog, Item, Theme};
//!
//! let mut state = AppState::new(Theme::default());
//! state.install_catalog(Catalog::new(vec![
//!     Item::new(1, "Speed Run", "Racing", "https://example.com/1"),
//! ])?);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.display_items.len(), 1);
//! # Ok::<(), gamedeck::GamedeckError>(())
//! ```

use super::engine::{Engine, Outcome};
use super::modes::{InputContext, InputFocus, ViewerMode};
use crate::domain::{Catalog, Item};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CategoryTab, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
    ViewerInfo,
};

/// Rows taken by everything except result rows: blank line, header, border,
/// category bar, search box (3), column headers, bottom border, footer.
const CHROME_ROWS: usize = 10;

/// Width of the TITLE column.
const TITLE_COLUMN_WIDTH: usize = 30;

/// Width of the CATEGORY column.
const CATEGORY_COLUMN_WIDTH: usize = 14;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    engine: Option<Engine>,

    /// Fatal catalog load error, shown instead of the browser.
    pub load_error: Option<String>,

    /// Cursor position within the filtered results.
    ///
    /// Clamped after every filter change; wraps during navigation.
    pub selected_index: usize,

    /// Widget receiving typed input while the viewer is closed.
    pub focus: InputFocus,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Transient message for the footer (e.g. a failed external launch).
    pub status: Option<String>,
}

impl AppState {
    /// Creates a state with no catalog loaded yet.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            engine: None,
            load_error: None,
            selected_index: 0,
            focus: InputFocus::Results,
            theme,
            status: None,
        }
    }

    /// Installs the catalog and starts a fresh session over it.
    pub fn install_catalog(&mut self, catalog: Catalog) {
        tracing::debug!(item_count = catalog.len(), "installing catalog");
        self.engine = Some(Engine::new(catalog));
        self.load_error = None;
        self.selected_index = 0;
    }

    /// Records a fatal catalog load failure.
    pub fn fail_loading(&mut self, error: impl Into<String>) {
        let error = error.into();
        tracing::error!(error = %error, "catalog unavailable");
        self.engine = None;
        self.load_error = Some(error);
        self.selected_index = 0;
    }

    /// Read-only view of the engine, once a catalog is installed.
    #[must_use]
    pub const fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    pub(crate) fn engine_mut(&mut self) -> Option<&mut Engine> {
        self.engine.as_mut()
    }

    /// Keybinding context: the viewer wins over input focus while open.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        let viewing = self
            .engine
            .as_ref()
            .is_some_and(|engine| engine.session().viewer().is_open());

        match (viewing, self.focus) {
            (true, _) => InputContext::Viewing,
            (false, InputFocus::Search) => InputContext::Searching,
            (false, InputFocus::Results) => InputContext::Browsing,
        }
    }

    /// Filtered results, or nothing while no catalog is installed.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&Item> {
        self.engine
            .as_ref()
            .map_or_else(Vec::new, Engine::filtered_items)
    }

    /// The result under the cursor.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.filtered_items().get(self.selected_index).copied()
    }

    /// Moves the cursor down, wrapping to the top. No-op on empty results.
    pub fn move_selection_down(&mut self) {
        let len = self.filtered_items().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up, wrapping to the bottom. No-op on empty results.
    pub fn move_selection_up(&mut self) {
        let len = self.filtered_items().len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Keeps the cursor inside the current result set.
    pub fn clamp_selection(&mut self) {
        let len = self.filtered_items().len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    /// Selects the next (or previous) category, wrapping around.
    pub fn cycle_category(&mut self, forward: bool) -> Outcome {
        let Some(engine) = self.engine.as_mut() else {
            return Outcome::Ignored;
        };

        let categories = engine.categories();
        let current = categories
            .iter()
            .position(|c| c == engine.session().selected_category())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % categories.len()
        } else {
            (current + categories.len() - 1) % categories.len()
        };
        let category = categories[next].clone();

        let outcome = engine.set_category(&category);
        self.clamp_selection();
        outcome
    }

    /// Computes a renderable view model for the given terminal size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let Some(engine) = self.engine.as_ref() else {
            return self.compute_splash_viewmodel();
        };

        let filtered = engine.filtered_items();
        let available_rows = rows.saturating_sub(CHROME_ROWS);

        let mut visible_start = self
            .selected_index
            .saturating_sub(available_rows / 2)
            .min(filtered.len());
        let visible_end = (visible_start + available_rows).min(filtered.len());
        if visible_end - visible_start < available_rows && filtered.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let needle = engine.session().search_text().to_lowercase();
        let display_items = filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                self.compute_display_item(item, visible_start + relative_idx, &needle, cols)
            })
            .collect();

        let empty_state = filtered.is_empty().then(|| {
            if engine.is_filtering() {
                EmptyState {
                    message: "No games found".to_string(),
                    subtitle: "Try adjusting your search or category filters.".to_string(),
                }
            } else {
                EmptyState {
                    message: "The catalog is empty".to_string(),
                    subtitle: String::new(),
                }
            }
        });

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: HeaderInfo {
                title: format!(" Gamedeck ({}/{}) ", filtered.len(), engine.catalog().len()),
            },
            categories: Self::compute_category_tabs(engine),
            search_bar: Some(SearchBarInfo {
                query: engine.session().search_text().to_string(),
                is_focused: self.focus == InputFocus::Search,
            }),
            viewer: Self::compute_viewer(engine),
            empty_state,
            splash: None,
            footer: self.compute_footer(),
        }
    }

    fn compute_splash_viewmodel(&self) -> UIViewModel {
        let splash = self.load_error.as_ref().map_or_else(
            || EmptyState {
                message: "Loading catalog...".to_string(),
                subtitle: "Waiting for permissions".to_string(),
            },
            |error| EmptyState {
                message: "Catalog unavailable".to_string(),
                subtitle: error.clone(),
            },
        );

        UIViewModel {
            display_items: vec![],
            selected_index: 0,
            header: HeaderInfo {
                title: " Gamedeck ".to_string(),
            },
            categories: vec![],
            search_bar: None,
            viewer: None,
            empty_state: None,
            splash: Some(splash),
            footer: FooterInfo {
                keybindings: "q: quit".to_string(),
                status: self.status.clone(),
            },
        }
    }

    fn compute_display_item(
        &self,
        item: &Item,
        absolute_idx: usize,
        needle: &str,
        cols: usize,
    ) -> DisplayItem {
        let description_width =
            cols.saturating_sub(TITLE_COLUMN_WIDTH + CATEGORY_COLUMN_WIDTH + 2);

        DisplayItem {
            title: truncate(&item.title, TITLE_COLUMN_WIDTH - 2),
            category: truncate(&item.category, CATEGORY_COLUMN_WIDTH - 2),
            description: truncate(&item.description, description_width),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges: highlight_range(&item.title, needle)
                .filter(|&(_, end)| end <= TITLE_COLUMN_WIDTH - 2)
                .into_iter()
                .collect(),
        }
    }

    fn compute_category_tabs(engine: &Engine) -> Vec<CategoryTab> {
        let selected = engine.session().selected_category();
        engine
            .categories()
            .iter()
            .map(|label| CategoryTab {
                label: label.clone(),
                is_selected: label == selected,
            })
            .collect()
    }

    fn compute_viewer(engine: &Engine) -> Option<ViewerInfo> {
        engine.active_item().map(|item| ViewerInfo {
            title: item.title.clone(),
            category: item.category.clone(),
            description: item.description.clone(),
            embed_url: item.embed_url.clone(),
            is_fullscreen: engine.session().viewer_mode() == ViewerMode::Fullscreen,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let fullscreen = self
            .engine
            .as_ref()
            .is_some_and(|engine| engine.session().viewer_mode() == ViewerMode::Fullscreen);

        let keybindings = match self.input_context() {
            InputContext::Browsing => {
                "j/k: navigate  h/l: category  /: search  Enter: play  Esc: clear  q: quit"
            }
            InputContext::Searching => {
                "Type to filter  Enter: results  Esc: done  Ctrl+n/p: navigate"
            }
            InputContext::Viewing if fullscreen => "f: windowed  o: open externally  Esc: close",
            InputContext::Viewing => "f: fullscreen  o: open externally  Esc: close",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            status: self.status.clone(),
        }
    }
}

/// Char range of the first case-insensitive occurrence of `needle_lower` in `text`.
///
/// Returns `None` when the needle is empty, absent, or lowercasing changes the
/// character count (so indices would not line up with the displayed text).
fn highlight_range(text: &str, needle_lower: &str) -> Option<(usize, usize)> {
    if needle_lower.is_empty() {
        return None;
    }

    let lower = text.to_lowercase();
    if lower.chars().count() != text.chars().count() {
        return None;
    }

    let byte_start = lower.find(needle_lower)?;
    let start = lower[..byte_start].chars().count();
    Some((start, start + needle_lower.chars().count()))
}

/// Truncates to `max` chars, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.install_catalog(
            Catalog::new(vec![
                Item::new(1, "Speed Run", "Racing", "https://p/1"),
                Item::new(2, "Block Puzzle", "Puzzle", "https://p/2"),
                Item::new(3, "Drift King", "Racing", "https://p/3"),
            ])
            .unwrap(),
        );
        state
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = loaded_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_noop_without_catalog() {
        let mut state = AppState::new(Theme::default());
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn cycle_category_wraps() {
        let mut state = loaded_state();
        assert_eq!(state.cycle_category(false), Outcome::Changed);
        assert_eq!(state.engine().unwrap().session().selected_category(), "Puzzle");
        let _ = state.cycle_category(true);
        assert_eq!(state.engine().unwrap().session().selected_category(), "All");
    }

    #[test]
    fn cycle_category_clamps_selection() {
        let mut state = loaded_state();
        state.selected_index = 2;
        let _ = state.cycle_category(false);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_item().map(|i| i.title.as_str()), Some("Block Puzzle"));
    }

    #[test]
    fn input_context_prefers_viewer() {
        let mut state = loaded_state();
        state.focus = InputFocus::Search;
        assert_eq!(state.input_context(), InputContext::Searching);

        let _ = state.engine_mut().unwrap().open_item(&ItemId::from(1));
        assert_eq!(state.input_context(), InputContext::Viewing);
    }

    #[test]
    fn viewmodel_shows_filtered_empty_state() {
        let mut state = loaded_state();
        let _ = state.engine_mut().unwrap().set_search_text("zzz-no-match");
        let vm = state.compute_viewmodel(24, 80);

        assert!(vm.display_items.is_empty());
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No games found".to_string()));
        assert_eq!(vm.header.title, " Gamedeck (0/3) ");
    }

    #[test]
    fn viewmodel_highlights_match_in_title() {
        let mut state = loaded_state();
        let _ = state.engine_mut().unwrap().set_search_text("PUZ");
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.display_items.len(), 1);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(6, 9)]);
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let items = (0..40)
            .map(|n| Item::new(n, format!("Game {n}"), "Arcade", format!("https://p/{n}")))
            .collect();
        let mut state = AppState::new(Theme::default());
        state.install_catalog(Catalog::new(items).unwrap());
        state.selected_index = 39;

        let vm = state.compute_viewmodel(20, 80);
        assert_eq!(vm.display_items.len(), 10);
        assert_eq!(vm.display_items.last().map(|d| d.title.as_str()), Some("Game 39"));
        assert!(vm.display_items[vm.selected_index].is_selected);
    }

    #[test]
    fn viewmodel_reports_viewer() {
        let mut state = loaded_state();
        let engine = state.engine_mut().unwrap();
        let _ = engine.open_item(&ItemId::from(3));
        let _ = engine.toggle_fullscreen();

        let viewer = state.compute_viewmodel(24, 80).viewer.unwrap();
        assert_eq!(viewer.title, "Drift King");
        assert_eq!(viewer.embed_url, "https://p/3");
        assert!(viewer.is_fullscreen);
    }

    #[test]
    fn splash_before_catalog_and_after_failure() {
        let mut state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.splash.map(|s| s.message), Some("Loading catalog...".to_string()));

        state.fail_loading("duplicate item id: 4");
        let vm = state.compute_viewmodel(24, 80);
        let splash = vm.splash.unwrap();
        assert_eq!(splash.message, "Catalog unavailable");
        assert_eq!(splash.subtitle, "duplicate item id: 4");
    }

    #[test]
    fn highlight_range_handles_edge_cases() {
        assert_eq!(highlight_range("Dragon Quest", ""), None);
        assert_eq!(highlight_range("Dragon Quest", "quest"), Some((7, 12)));
        assert_eq!(highlight_range("Dragon Quest", "zzz"), None);
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title", 10), "a very ...");
    }
}
