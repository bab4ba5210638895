//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain layer.
//! The [`engine`] owns the browsing session; everything else here adapts
//! keyboard-driven events to engine intents and turns state into view models.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Engine Intents → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────────── Host Results ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`engine`]: Filter/selection engine; sole writer of session state
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Viewer state machine and input focus types
//! - [`state`]: Application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use gamedeck::{handle_event, AppState, Event, Theme};
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::CursorDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), gamedeck::GamedeckError>(())
//! ```

pub mod actions;
pub mod engine;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use engine::{Engine, Outcome, SessionState};
pub use handler::{handle_event, Event};
pub use modes::{InputContext, InputFocus, Viewer, ViewerMode};
pub use state::AppState;
