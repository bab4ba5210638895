//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which user intents and
//! host notifications reach the application. It translates each [`Event`] into
//! engine intents or cursor moves, and returns whether a re-render is needed
//! together with the [`Action`]s the host must execute.
//!
//! # Event Types
//!
//! - **Navigation**: `CursorDown`, `CursorUp`, `NextCategory`, `PrevCategory`
//! - **Search input**: `FocusSearch`, `FocusResults`, `Char`, `Backspace`, `ClearSearch`
//! - **Viewer**: `OpenSelected`, `OpenItem`, `CloseViewer`, `ToggleFullscreen`, `LaunchEmbed`
//! - **System**: `CatalogLoaded`, `CatalogFailed`, `LaunchFailed`, `Quit`
//!
//! Intents that need a catalog are dropped until one is installed.
//!
//! # Example
//!
//! ```rust
//! use gamedeck::{handle_event, AppState, Catalog, Event, Item, Theme};
//!
//! let mut state = AppState::new(Theme::default());
//! let catalog = Catalog::new(vec![Item::new(1, "Speed Run", "Racing", "https://example.com/1")])?;
//! handle_event(&mut state, &Event::CatalogLoaded(catalog))?;
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenSelected)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), gamedeck::GamedeckError>(())
//! ```

use super::engine::{Engine, Outcome};
use super::modes::{InputContext, InputFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Catalog, ItemId};

/// Events triggered by user input or host notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the result cursor down (wraps to top).
    CursorDown,
    /// Moves the result cursor up (wraps to bottom).
    CursorUp,
    /// Selects the next category in the category bar.
    NextCategory,
    /// Selects the previous category in the category bar.
    PrevCategory,
    /// Selects a category by name.
    SelectCategory(String),

    /// Moves input focus to the search field.
    FocusSearch,
    /// Moves input focus back to the results.
    FocusResults,
    /// Appends a character to the search text.
    Char(char),
    /// Removes the last character of the search text.
    Backspace,
    /// Empties the search text.
    ClearSearch,
    /// Backs out one level: viewer, then search focus, then search text.
    Escape,

    /// Opens the item under the cursor.
    OpenSelected,
    /// Opens an item by id.
    OpenItem(ItemId),
    /// Closes the viewer.
    CloseViewer,
    /// Toggles the viewer between windowed and fullscreen.
    ToggleFullscreen,
    /// Hands the active item's embed URL to the host.
    LaunchEmbed,

    /// Hides the plugin.
    Quit,

    /// The catalog finished loading.
    CatalogLoaded(Catalog),

    /// The catalog could not be loaded; the browser cannot start.
    CatalogFailed {
        /// Human-readable cause.
        error: String,
    },

    /// The external launcher exited unsuccessfully.
    LaunchFailed {
        /// Launcher stderr or exit description.
        error: String,
    },
}

/// Processes an event, mutates state, and returns `(should_render, actions)`.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` keeps the signature stable for
/// handlers that may fail.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::CatalogLoaded(catalog) => {
            state.install_catalog(catalog.clone());
            Ok((true, vec![]))
        }
        Event::CatalogFailed { error } => {
            state.fail_loading(error.clone());
            Ok((true, vec![]))
        }
        Event::LaunchFailed { error } => {
            tracing::warn!(error = %error, "external launch failed");
            state.status = Some(format!("Launch failed: {error}"));
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::CloseFocus])),
        Event::CursorDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::NextCategory => Ok((state.cycle_category(true).is_changed(), vec![])),
        Event::PrevCategory => Ok((state.cycle_category(false).is_changed(), vec![])),
        Event::SelectCategory(category) => {
            let outcome = with_engine(state, |engine| engine.set_category(category));
            state.clamp_selection();
            Ok((outcome.is_changed(), vec![]))
        }
        Event::FocusSearch => {
            tracing::debug!("focusing search field");
            state.focus = InputFocus::Search;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.focus = InputFocus::Results;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_context() != InputContext::Searching {
                return Ok((false, vec![]));
            }
            let outcome = with_engine(state, |engine| {
                let mut text = engine.session().search_text().to_string();
                text.push(*c);
                engine.set_search_text(text)
            });
            state.clamp_selection();
            Ok((outcome.is_changed(), vec![]))
        }
        Event::Backspace => {
            if state.input_context() != InputContext::Searching {
                return Ok((false, vec![]));
            }
            let outcome = with_engine(state, |engine| {
                let mut text = engine.session().search_text().to_string();
                text.pop();
                engine.set_search_text(text)
            });
            state.clamp_selection();
            Ok((outcome.is_changed(), vec![]))
        }
        Event::ClearSearch => {
            let outcome = with_engine(state, |engine| engine.set_search_text(""));
            state.clamp_selection();
            Ok((outcome.is_changed(), vec![]))
        }
        Event::Escape => match state.input_context() {
            InputContext::Viewing => {
                let outcome = with_engine(state, Engine::close_viewer);
                Ok((outcome.is_changed(), vec![]))
            }
            InputContext::Searching => {
                state.focus = InputFocus::Results;
                Ok((true, vec![]))
            }
            InputContext::Browsing => {
                let outcome = with_engine(state, |engine| engine.set_search_text(""));
                state.clamp_selection();
                Ok((outcome.is_changed(), vec![]))
            }
        },
        Event::OpenSelected => {
            let Some(id) = state.selected_item().map(|item| item.id.clone()) else {
                tracing::debug!("no item under cursor");
                return Ok((false, vec![]));
            };
            let outcome = with_engine(state, |engine| engine.open_item(&id));
            if outcome.is_changed() {
                state.status = None;
            }
            Ok((outcome.is_changed(), vec![]))
        }
        Event::OpenItem(id) => {
            let outcome = with_engine(state, |engine| engine.open_item(id));
            if outcome.is_changed() {
                state.status = None;
            }
            Ok((outcome.is_changed(), vec![]))
        }
        Event::CloseViewer => {
            let outcome = with_engine(state, Engine::close_viewer);
            Ok((outcome.is_changed(), vec![]))
        }
        Event::ToggleFullscreen => {
            let outcome = with_engine(state, Engine::toggle_fullscreen);
            Ok((outcome.is_changed(), vec![]))
        }
        Event::LaunchEmbed => {
            let Some(url) = state.engine().and_then(Engine::embed_url) else {
                tracing::warn!("ignoring launch with no active item");
                return Ok((false, vec![]));
            };
            tracing::debug!(url = %url, "launching embed target");
            Ok((false, vec![Action::LaunchEmbed {
                url: url.to_string(),
            }]))
        }
    }
}

/// Runs an engine intent, or reports `Ignored` while no catalog is installed.
fn with_engine<F>(state: &mut AppState, intent: F) -> Outcome
where
    F: FnOnce(&mut Engine) -> Outcome,
{
    state.engine_mut().map_or_else(
        || {
            tracing::debug!("no catalog installed, dropping intent");
            Outcome::Ignored
        },
        intent,
    )
}

/// Short event label for spans; avoids dumping a whole catalog into a field.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::CursorDown => "CursorDown",
        Event::CursorUp => "CursorUp",
        Event::NextCategory => "NextCategory",
        Event::PrevCategory => "PrevCategory",
        Event::SelectCategory(_) => "SelectCategory",
        Event::FocusSearch => "FocusSearch",
        Event::FocusResults => "FocusResults",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::ClearSearch => "ClearSearch",
        Event::Escape => "Escape",
        Event::OpenSelected => "OpenSelected",
        Event::OpenItem(_) => "OpenItem",
        Event::CloseViewer => "CloseViewer",
        Event::ToggleFullscreen => "ToggleFullscreen",
        Event::LaunchEmbed => "LaunchEmbed",
        Event::Quit => "Quit",
        Event::CatalogLoaded(_) => "CatalogLoaded",
        Event::CatalogFailed { .. } => "CatalogFailed",
        Event::LaunchFailed { .. } => "LaunchFailed",
    }
}
