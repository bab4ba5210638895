//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin shim executes them in order. Actions are the only way the library
//! asks the host to do something outside its own state.
//!
//! # Example
//!
//! ```rust
//! use gamedeck::Action;
//!
//! let actions = vec![Action::LaunchEmbed { url: "https://example.com/play".to_string() }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Opens the active item's embed target in an external surface.
    ///
    /// The URL is the catalog's `embedUrl` verbatim; sandboxing is up to
    /// whatever program receives it.
    LaunchEmbed {
        /// Embed URL of the active item.
        url: String,
    },
}
