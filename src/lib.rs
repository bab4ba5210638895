//! Gamedeck: a Zellij plugin for browsing a catalog of embeddable games.
//!
//! Gamedeck provides:
//! - A catalog loaded from a JSON file, with a derived category list
//! - Case-insensitive search over titles and descriptions
//! - Category filtering with an "All" sentinel
//! - A viewer with windowed and fullscreen modes, plus hand-off of the
//!   embed URL to an external opener
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Filter/selection engine                          │  ← Session state
//! │  - Event handling and actions                       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                   ┌───────────────────┐
//! │ UI Layer      │                   │ Domain Layer      │
//! │ (ui/)         │                   │ (domain/)         │
//! │ - Rendering   │                   │ - Item, ItemId    │
//! │ - Theming     │                   │ - Catalog loading │
//! │ - Components  │                   │ - Error types     │
//! └───────────────┘                   └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (sandbox paths) & Observability     │
//! │  (tracing → OpenTelemetry → JSON lines file)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/gamedeck.wasm" {
//!         catalog_file "~/.config/gamedeck/games.json"
//!         theme "midnight"
//!         open_command "xdg-open"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState` with the theme, request permissions.
//! 2. **Permissions Granted**: read and validate the catalog file, then feed
//!    `CatalogLoaded` (or `CatalogFailed`) through the event handler.
//! 3. **Interaction**: keys map to [`Event`]s; [`handle_event`] drives the
//!    [`Engine`] and returns [`Action`]s for the shim to execute.
//!
//! # Example
//!
//! ```rust
//! use gamedeck::{handle_event, initialize, Catalog, Config, Event, Item, ViewerMode};
//!
//! let mut state = initialize(&Config::default());
//! let catalog = Catalog::new(vec![
//!     Item::new(1, "Speed Run", "Racing", "https://example.com/1"),
//!     Item::new(2, "Block Puzzle", "Puzzle", "https://example.com/2"),
//! ])?;
//!
//! for event in [Event::CatalogLoaded(catalog), Event::CursorDown, Event::OpenSelected, Event::ToggleFullscreen] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//!
//! let engine = state.engine().unwrap();
//! assert_eq!(engine.active_item().map(|i| i.title.as_str()), Some("Block Puzzle"));
//! assert_eq!(engine.session().viewer_mode(), ViewerMode::Fullscreen);
//! # Ok::<(), gamedeck::GamedeckError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{
    handle_event, Action, AppState, Engine, Event, InputContext, InputFocus, Outcome,
    SessionState, Viewer, ViewerMode,
};
pub use domain::{Catalog, GamedeckError, Item, ItemId, Result, ALL_CATEGORIES};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default catalog location, relative to the host home directory.
pub const DEFAULT_CATALOG_FILE: &str = "~/.config/gamedeck/games.json";

/// Default program that receives embed URLs.
pub const DEFAULT_OPEN_COMMAND: &str = "xdg-open";

/// Plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog JSON path; `~` maps to `/host`.
    pub catalog_file: String,

    /// Built-in theme name (`midnight` or `daylight`).
    pub theme_name: Option<String>,

    /// Custom TOML theme; takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive; `info` when unset.
    pub trace_level: Option<String>,

    /// Program invoked as `<open_command> <embed_url>`.
    pub open_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: DEFAULT_CATALOG_FILE.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
        }
    }
}

impl Config {
    /// Parses the Zellij plugin configuration map.
    ///
    /// Missing or blank values fall back to defaults.
    ///
    /// ```rust
    /// use gamedeck::Config;
    /// use std::collections::BTreeMap;
    ///
    /// let mut raw = BTreeMap::new();
    /// raw.insert("catalog_file".to_string(), "~/games.json".to_string());
    /// raw.insert("open_command".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&raw);
    /// assert_eq!(config.catalog_file, "~/games.json");
    /// assert_eq!(config.open_command, "xdg-open");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            catalog_file: value("catalog_file").unwrap_or_else(|| DEFAULT_CATALOG_FILE.to_string()),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
            open_command: value("open_command").unwrap_or_else(|| DEFAULT_OPEN_COMMAND.to_string()),
        }
    }

    /// Catalog path as seen from inside the sandbox.
    #[must_use]
    pub fn catalog_path(&self) -> String {
        infrastructure::expand_tilde(&self.catalog_file)
    }
}

/// Creates the initial application state, resolving the theme.
///
/// A theme that fails to load falls back to the default with a warning; it
/// never prevents startup.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing gamedeck plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_map_is_empty() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        assert_eq!(Config::default().catalog_path(), "/host/.config/gamedeck/games.json");
    }

    #[test]
    fn reads_every_key() {
        let raw: BTreeMap<String, String> = [
            ("catalog_file", "/srv/games.json"),
            ("theme", "daylight"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "gamedeck=debug"),
            ("open_command", "firefox"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_zellij(&raw);
        assert_eq!(config.catalog_path(), "/srv/games.json");
        assert_eq!(config.theme_name.as_deref(), Some("daylight"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("gamedeck=debug"));
        assert_eq!(config.open_command, "firefox");
    }

    #[test]
    fn initialize_resolves_named_theme() {
        let config = Config {
            theme_name: Some("daylight".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "daylight");
    }

    #[test]
    fn initialize_falls_back_on_bad_theme() {
        let config = Config {
            theme_name: Some("nope".to_string()),
            theme_file: None,
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "midnight");

        let config = Config {
            theme_file: Some("/definitely/missing.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "midnight");
    }
}
