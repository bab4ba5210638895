//! Viewer and input mode state types.
//!
//! # Viewer State Machine
//!
//! ```text
//!            open_item(x)                    toggle_fullscreen()
//! Closed ─────────────────▶ Open(Windowed) ◀─────────────────────▶ Open(Fullscreen)
//!   ▲                          │     ▲                                 │      │
//!   │       close_viewer()     │     │          open_item(y)           │      │
//!   └──────────────────────────┘     └─────────────────────────────────┘      │
//!   ▲                        close_viewer()                                   │
//!   └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Opening an item always lands in `Windowed`, including when another item is
//! already showing fullscreen.

use crate::domain::ItemId;

/// Display mode of an open viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerMode {
    #[default]
    Windowed,
    Fullscreen,
}

impl ViewerMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Windowed => Self::Fullscreen,
            Self::Fullscreen => Self::Windowed,
        }
    }
}

/// Embedded-content viewer state.
///
/// The active item and its display mode live in one variant, so a closed viewer
/// cannot carry a stale fullscreen flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Viewer {
    #[default]
    Closed,
    Open {
        /// Item currently shown.
        item: ItemId,
        /// Windowed or fullscreen.
        mode: ViewerMode,
    },
}

impl Viewer {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Id of the item being shown, if any.
    #[must_use]
    pub const fn active_item(&self) -> Option<&ItemId> {
        match self {
            Self::Open { item, .. } => Some(item),
            Self::Closed => None,
        }
    }

    /// Current display mode; `Windowed` while closed.
    #[must_use]
    pub const fn mode(&self) -> ViewerMode {
        match self {
            Self::Open { mode, .. } => *mode,
            Self::Closed => ViewerMode::Windowed,
        }
    }
}

/// Which part of the browser receives typed input.
///
/// The viewer takes precedence over both while it is open; see
/// [`AppState::input_context`](crate::app::AppState::input_context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    /// Keys navigate the result list and category bar.
    #[default]
    Results,

    /// Printable keys edit the search text.
    Search,
}

/// Effective keybinding context, derived from focus and viewer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Browsing,
    Searching,
    Viewing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_viewer_reads_windowed() {
        let viewer = Viewer::Closed;
        assert!(!viewer.is_open());
        assert_eq!(viewer.active_item(), None);
        assert_eq!(viewer.mode(), ViewerMode::Windowed);
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(ViewerMode::Windowed.toggled(), ViewerMode::Fullscreen);
        assert_eq!(ViewerMode::Fullscreen.toggled(), ViewerMode::Windowed);
    }
}
