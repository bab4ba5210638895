//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the gamedeck library and the Zellij plugin
//! system: it loads the catalog once permissions are granted, maps keys to
//! library events by input context, and executes the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `RunCommandResult`, `PermissionRequestResult`
//! 3. **Permissions Granted**: Read the catalog file → `CatalogLoaded` / `CatalogFailed`
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Browsing:
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `l`/`Right`/`Tab`: Next category
//! - `h`/`Left`/`Shift+Tab`: Previous category
//! - `/`: Focus search
//! - `Enter`: Open selected game
//! - `Esc`: Clear search
//! - `q`: Close plugin
//!
//! Searching:
//! - Printable characters, `Backspace`: Edit query
//! - `Down`/`Up`/`Ctrl+n`/`Ctrl+p`: Move
//! - `Enter`: Back to results
//! - `Esc`: Leave search (query kept)
//!
//! Viewer:
//! - `f`: Toggle fullscreen
//! - `o`: Open embed URL with `open_command`
//! - `Esc`/`q`/`x`: Close viewer

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use gamedeck::infrastructure::strip_host_prefix;
use gamedeck::{handle_event, Action, Catalog, Config, Event, InputContext};

register_plugin!(State);

/// Context key marking `run_command` calls made for `LaunchEmbed`.
const LAUNCH_CONTEXT_KEY: &str = "gamedeck_launch";

struct State {
    app: gamedeck::AppState,

    config: Config,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: gamedeck::initialize(&config),
            config,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        gamedeck::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(catalog_file = %config.catalog_file, "parsed configuration");
        self.app = gamedeck::initialize(&config);
        self.config = config;

        request_permission(&[
            PermissionType::ChangeApplicationState,
            PermissionType::RunCommands,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                match Self::map_command_result_event(exit_code, stderr, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.map_permission_result(permissions) {
                    Some(event) => event,
                    None => return true,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        gamedeck::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        let context = self.app.input_context();

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match (key.bare_key, context) {
                (_, InputContext::Viewing) => None,
                (BareKey::Char('n'), _) => Some(Event::CursorDown),
                (BareKey::Char('p'), _) => Some(Event::CursorUp),
                _ => None,
            };
        }

        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return (context == InputContext::Browsing).then_some(Event::PrevCategory);
        }

        match context {
            InputContext::Viewing => Self::map_viewer_key(key.bare_key),
            InputContext::Searching => Self::map_search_key(key.bare_key),
            InputContext::Browsing => Self::map_browse_key(key.bare_key),
        }
    }

    fn map_browse_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Right | BareKey::Tab | BareKey::Char('l') => Event::NextCategory,
            BareKey::Left | BareKey::Char('h') => Event::PrevCategory,
            BareKey::Char('/') => Event::FocusSearch,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') => Event::Quit,
            _ => return None,
        })
    }

    fn map_search_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down => Event::CursorDown,
            BareKey::Up => Event::CursorUp,
            BareKey::Enter => Event::FocusResults,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_viewer_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Char('f') => Event::ToggleFullscreen,
            BareKey::Char('o') => Event::LaunchEmbed,
            BareKey::Esc => Event::Escape,
            BareKey::Char('q' | 'x') => Event::CloseViewer,
            _ => return None,
        })
    }

    /// Loads the catalog once the host lets us read it.
    fn map_permission_result(&self, permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading catalog");
                Some(self.load_catalog())
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - catalog cannot be read");
                Some(Event::CatalogFailed {
                    error: "Permissions denied; the catalog file cannot be read".to_string(),
                })
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn load_catalog(&self) -> Event {
        let path = self.config.catalog_path();
        match Catalog::from_path(&path) {
            Ok(catalog) => {
                tracing::debug!(
                    item_count = catalog.len(),
                    category_count = catalog.categories().len(),
                    "catalog loaded"
                );
                Event::CatalogLoaded(catalog)
            }
            Err(e) => {
                tracing::error!(path = %path, error = %e, "failed to load catalog");
                Event::CatalogFailed {
                    error: format!("{}: {e}", strip_host_prefix(&path)),
                }
            }
        }
    }

    fn map_command_result_event(
        exit_code: Option<i32>,
        stderr: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        if !context.contains_key(LAUNCH_CONTEXT_KEY) {
            return None;
        }
        tracing::debug!(exit_code = ?exit_code, "launch command result");

        if exit_code == Some(0) {
            return None;
        }

        let stderr = String::from_utf8(stderr).unwrap_or_default();
        let error = stderr.lines().next().map_or_else(
            || format!("exit code {exit_code:?}"),
            ToString::to_string,
        );
        Some(Event::LaunchFailed { error })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::LaunchEmbed { url } => {
                tracing::debug!(command = %self.config.open_command, url = %url, "launching embed");
                let context = BTreeMap::from([(LAUNCH_CONTEXT_KEY.to_string(), url.clone())]);
                run_command(&[self.config.open_command.as_str(), url.as_str()], context);
            }
        }
    }
}
