//! Input mode, screen, and load status types.
//!
//! These enums decide which keybindings are active, which page is drawn, and
//! whether the directory data is available yet.

use crate::domain::Venue;

/// Current input handling mode of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands: move, open, toggle, switch category.
    #[default]
    Normal,

    /// Keys edit the search term.
    ///
    /// Enter keeps the term and returns to `Normal`; Esc clears it.
    Search,
}

/// Page currently shown, derived from the view state and the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    /// Header, search, and results.
    List,
    /// Full profile of one venue.
    Detail(&'a Venue),
}

/// Progress of the one-time venue data load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Waiting for permissions; nothing requested yet.
    #[default]
    Idle,
    /// Load requested from the worker or the web.
    Pending,
    /// Store populated; the directory is interactive.
    Ready,
    /// Load failed; only the error message is shown from now on.
    Failed(String),
}

impl LoadStatus {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns `true` once the load has been requested, whatever its outcome.
    #[must_use]
    pub const fn is_requested(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
