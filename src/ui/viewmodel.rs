//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They carry display-ready data only: truncated columns,
//! highlight ranges, tab selection and the viewer panel contents.
//!
//! # Example
//!
//! ```rust
//! use gamedeck::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         title: "Speed Run".to_string(),
//!         category: "Racing".to_string(),
//!         description: "Race against the clock".to_string(),
//!         is_selected: true,
//!         highlight_ranges: vec![(0, 5)],
//!     }],
//!     selected_index: 0,
//!     header: HeaderInfo { title: " Gamedeck ".to_string() },
//!     categories: vec![],
//!     search_bar: None,
//!     viewer: None,
//!     empty_state: None,
//!     splash: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string(), status: None },
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Visible window of result rows.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    /// Category bar, in catalog order with `"All"` first.
    pub categories: Vec<CategoryTab>,

    /// Absent on the splash screen.
    pub search_bar: Option<SearchBarInfo>,

    /// Present while an item is open.
    pub viewer: Option<ViewerInfo>,

    /// Shown in place of the result table when nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Shown instead of the whole browser before the catalog is available.
    pub splash: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// One row of the result table.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub title: String,
    pub category: String,
    pub description: String,
    pub is_selected: bool,

    /// Char ranges of `title` matching the search text, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct CategoryTab {
    pub label: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding hints for the current input context.
    pub keybindings: String,

    /// Transient status, rendered in the error color.
    pub status: Option<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,

    /// Draws a cursor when the search field has input focus.
    pub is_focused: bool,
}

/// Contents of the viewer panel.
#[derive(Debug, Clone)]
pub struct ViewerInfo {
    pub title: String,
    pub category: String,
    pub description: String,
    pub embed_url: String,
    pub is_fullscreen: bool,
}
