//! Filter/selection engine.
//!
//! [`Engine`] owns the [`Catalog`] and the mutable [`SessionState`], and is the
//! only code that mutates the latter. Readers borrow the session through
//! [`Engine::session`]; every derived value (filtered items, active item) is
//! recomputed from the current state on each read, so there is no cache to go
//! stale.
//!
//! # Filter Policy
//!
//! An item is visible when both hold:
//!
//! 1. the selected category is `"All"` or equals `item.category` exactly;
//! 2. the search text is empty, or its lowercase form is a substring of the
//!    lowercase title **or** the lowercase description.
//!
//! Results keep catalog order.
//!
//! # Contract Violations
//!
//! Intents the UI should never send (unknown category, unknown item, toggling
//! fullscreen with nothing open) leave the state untouched and return
//! [`Outcome::Ignored`].
//!
//! # Example
//!
//! ```rust
//! use gamedeck::{Catalog, Engine, Item, Outcome};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new(1, "Speed Run", "Racing", "https://example.com/1"),
//!     Item::new(2, "Block Puzzle", "Puzzle", "https://example.com/2"),
//! ])?;
//! let mut engine = Engine::new(catalog);
//!
//! assert_eq!(engine.set_category("Puzzle"), Outcome::Changed);
//! let titles: Vec<&str> = engine.filtered_items().iter().map(|i| i.title.as_str()).collect();
//! assert_eq!(titles, ["Block Puzzle"]);
//! # Ok::<(), gamedeck::GamedeckError>(())
//! ```

use super::modes::{Viewer, ViewerMode};
use crate::domain::{Catalog, Item, ItemId, ALL_CATEGORIES};

/// Result of applying an intent to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// State changed.
    Changed,
    /// Valid intent that left the state as it was.
    Unchanged,
    /// Contract violation; state untouched.
    Ignored,
}

impl Outcome {
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }

    const fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

/// Mutable browsing session: filters and viewer.
///
/// Only [`Engine`] can change it; everyone else sees a shared borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    search_text: String,
    selected_category: String,
    viewer: Viewer,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            viewer: Viewer::Closed,
        }
    }
}

impl SessionState {
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    #[must_use]
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    #[must_use]
    pub const fn viewer_mode(&self) -> ViewerMode {
        self.viewer.mode()
    }

    /// True when either filter narrows the catalog.
    ///
    /// Lets the UI tell "nothing matches" apart from "nothing filtered yet".
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        !self.search_text.is_empty() || self.selected_category != ALL_CATEGORIES
    }
}

/// Owns the catalog and session state; computes the visible result set.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
    session: SessionState,
}

impl Engine {
    /// Creates an engine with a default session: no search, `"All"`, viewer closed.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            session: SessionState::default(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        self.catalog.categories()
    }

    /// Replaces the search text verbatim; no trimming.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> Outcome {
        let text = text.into();
        let changed = self.session.search_text != text;
        if changed {
            tracing::trace!(query = %text, "search text updated");
            self.session.search_text = text;
        }
        Outcome::from_changed(changed)
    }

    /// Selects a category from the catalog's category list.
    ///
    /// Unknown categories are ignored.
    pub fn set_category(&mut self, category: &str) -> Outcome {
        if !self.catalog.has_category(category) {
            tracing::warn!(category = %category, "ignoring unknown category");
            return Outcome::Ignored;
        }

        let changed = self.session.selected_category != category;
        if changed {
            tracing::debug!(category = %category, "category selected");
            self.session.selected_category = category.to_string();
        }
        Outcome::from_changed(changed)
    }

    /// Opens an item in the viewer, always in windowed mode.
    ///
    /// Ids not present in the catalog are ignored.
    pub fn open_item(&mut self, id: &ItemId) -> Outcome {
        if !self.catalog.contains(id) {
            tracing::warn!(item_id = %id, "ignoring open of unknown item");
            return Outcome::Ignored;
        }

        let next = Viewer::Open {
            item: id.clone(),
            mode: ViewerMode::Windowed,
        };
        let changed = self.session.viewer != next;
        if changed {
            tracing::debug!(item_id = %id, previous = ?self.session.viewer, "viewer opened");
            self.session.viewer = next;
        }
        Outcome::from_changed(changed)
    }

    /// Closes the viewer. Idempotent.
    pub fn close_viewer(&mut self) -> Outcome {
        let changed = self.session.viewer.is_open();
        if changed {
            tracing::debug!("viewer closed");
            self.session.viewer = Viewer::Closed;
        }
        Outcome::from_changed(changed)
    }

    /// Flips the viewer between windowed and fullscreen.
    ///
    /// Ignored when no item is open.
    pub fn toggle_fullscreen(&mut self) -> Outcome {
        match &mut self.session.viewer {
            Viewer::Open { mode, .. } => {
                let toggled = mode.toggled();
                *mode = toggled;
                tracing::debug!(mode = ?toggled, "viewer mode toggled");
                Outcome::Changed
            }
            Viewer::Closed => {
                tracing::warn!("ignoring fullscreen toggle with no active item");
                Outcome::Ignored
            }
        }
    }

    /// The item shown in the viewer, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<&Item> {
        self.session
            .viewer
            .active_item()
            .and_then(|id| self.catalog.get(id))
    }

    /// Embed URL of the active item, passed through untouched.
    #[must_use]
    pub fn embed_url(&self) -> Option<&str> {
        self.active_item().map(|item| item.embed_url.as_str())
    }

    #[must_use]
    pub fn is_filtering(&self) -> bool {
        self.session.is_filtering()
    }

    /// Items passing the current filters, in catalog order.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&Item> {
        let _span = tracing::debug_span!(
            "filtered_items",
            total_items = self.catalog.len(),
            query_len = self.session.search_text.len(),
            category = %self.session.selected_category
        )
        .entered();

        let needle = self.session.search_text.to_lowercase();
        let category = self.session.selected_category.as_str();

        let filtered: Vec<&Item> = self
            .catalog
            .items()
            .iter()
            .filter(|item| category_matches(item, category) && text_matches(item, &needle))
            .collect();

        tracing::trace!(filtered_count = filtered.len(), "filter applied");
        filtered
    }
}

/// Category predicate: `"All"` or exact, case-sensitive equality.
#[must_use]
pub fn category_matches(item: &Item, category: &str) -> bool {
    category == ALL_CATEGORIES || item.category == category
}

/// Text predicate against an already-lowercased needle.
#[must_use]
pub fn text_matches(item: &Item, needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || item.title.to_lowercase().contains(needle_lower)
        || item.description.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        let catalog = Catalog::new(vec![
            Item::new(1, "Speed Run", "Racing", "https://play.example.com/1")
                .with_description("Race against the clock"),
            Item::new(2, "Block Puzzle", "Puzzle", "https://play.example.com/2")
                .with_description("Stack falling blocks"),
            Item::new(3, "Dragon Quest", "Adventure", "https://play.example.com/3")
                .with_description("Slay the beast"),
        ])
        .unwrap();
        Engine::new(catalog)
    }

    fn titles(engine: &Engine) -> Vec<&str> {
        engine.filtered_items().iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn default_session() {
        let engine = engine();
        let session = engine.session();

        assert_eq!(session.search_text(), "");
        assert_eq!(session.selected_category(), "All");
        assert_eq!(session.viewer(), &Viewer::Closed);
        assert_eq!(session.viewer_mode(), ViewerMode::Windowed);
        assert!(!engine.is_filtering());
        assert_eq!(titles(&engine), ["Speed Run", "Block Puzzle", "Dragon Quest"]);
    }

    #[test]
    fn search_matches_description() {
        let mut engine = engine();
        assert_eq!(engine.set_search_text("FALLING"), Outcome::Changed);
        assert_eq!(titles(&engine), ["Block Puzzle"]);
    }

    #[test]
    fn search_text_is_not_trimmed() {
        let mut engine = engine();
        let _ = engine.set_search_text(" dragon");
        assert!(engine.filtered_items().is_empty());
        assert_eq!(engine.session().search_text(), " dragon");

        let _ = engine.set_search_text("n q");
        assert_eq!(titles(&engine), ["Dragon Quest"]);
    }

    #[test]
    fn repeated_search_text_is_unchanged() {
        let mut engine = engine();
        assert_eq!(engine.set_search_text("run"), Outcome::Changed);
        assert_eq!(engine.set_search_text("run"), Outcome::Unchanged);
    }

    #[test]
    fn category_and_search_combine() {
        let mut engine = engine();
        let _ = engine.set_category("Racing");
        let _ = engine.set_search_text("block");
        assert!(engine.filtered_items().is_empty());
        assert!(engine.is_filtering());

        let _ = engine.set_search_text("clock");
        assert_eq!(titles(&engine), ["Speed Run"]);
    }

    #[test]
    fn unknown_category_is_ignored() {
        let mut engine = engine();
        let _ = engine.set_category("Puzzle");

        assert_eq!(engine.set_category("Shooter"), Outcome::Ignored);
        assert_eq!(engine.set_category("puzzle"), Outcome::Ignored);
        assert_eq!(engine.session().selected_category(), "Puzzle");
    }

    #[test]
    fn unknown_item_is_ignored() {
        let mut engine = engine();
        assert_eq!(engine.open_item(&ItemId::from(42)), Outcome::Ignored);
        assert_eq!(engine.session().viewer(), &Viewer::Closed);
    }

    #[test]
    fn toggle_without_active_item_is_ignored() {
        let mut engine = engine();
        assert_eq!(engine.toggle_fullscreen(), Outcome::Ignored);
        assert_eq!(engine.session().viewer(), &Viewer::Closed);
    }

    #[test]
    fn viewer_transitions() {
        let mut engine = engine();
        let first = ItemId::from(1);

        assert_eq!(engine.open_item(&first), Outcome::Changed);
        assert_eq!(engine.session().viewer_mode(), ViewerMode::Windowed);
        assert_eq!(engine.embed_url(), Some("https://play.example.com/1"));

        assert_eq!(engine.toggle_fullscreen(), Outcome::Changed);
        assert_eq!(engine.session().viewer_mode(), ViewerMode::Fullscreen);

        assert_eq!(engine.toggle_fullscreen(), Outcome::Changed);
        assert_eq!(engine.session().viewer_mode(), ViewerMode::Windowed);

        assert_eq!(engine.close_viewer(), Outcome::Changed);
        assert_eq!(engine.close_viewer(), Outcome::Unchanged);
        assert_eq!(engine.active_item(), None);
        assert_eq!(engine.embed_url(), None);
    }

    #[test]
    fn reopening_same_item_while_fullscreen_drops_fullscreen() {
        let mut engine = engine();
        let id = ItemId::from(3);
        let _ = engine.open_item(&id);
        let _ = engine.toggle_fullscreen();

        assert_eq!(engine.open_item(&id), Outcome::Changed);
        assert_eq!(engine.session().viewer_mode(), ViewerMode::Windowed);
        assert_eq!(engine.open_item(&id), Outcome::Unchanged);
    }

    #[test]
    fn filters_do_not_touch_viewer() {
        let mut engine = engine();
        let _ = engine.open_item(&ItemId::from(2));
        let _ = engine.set_search_text("zzz");

        assert!(engine.filtered_items().is_empty());
        assert_eq!(engine.active_item().map(|i| i.title.as_str()), Some("Block Puzzle"));
    }

    #[test]
    fn predicates() {
        let item = Item::new(1, "Dragon Quest", "RPG", "u").with_description("Épée");
        assert!(category_matches(&item, "All"));
        assert!(category_matches(&item, "RPG"));
        assert!(!category_matches(&item, "rpg"));
        assert!(text_matches(&item, ""));
        assert!(text_matches(&item, "quest"));
        assert!(text_matches(&item, "épée"));
        assert!(!text_matches(&item, "QUEST"));
    }
}
