//! Directory view state and its named transitions.
//!
//! [`ViewState`] is the whole filter-and-selection state of the directory: the
//! search term, the category, the active amenity filters, and the optional
//! selected venue. It is only mutated through the transition methods below, so
//! every state change can be audited and tested without any rendering.
//!
//! # Screens
//!
//! ```text
//!            select_venue(id)
//!  ListView ──────────────────▶ DetailView
//!     ▲                              │
//!     └──── clear_selection() ───────┤
//!     └──── resolve() on stale id ───┘
//! ```

use super::modes::Screen;
use crate::catalog::VenueStore;
use crate::domain::{Category, VenueId};
use std::collections::BTreeSet;

/// Search, category, amenity filters, and selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    category: Category,
    active_filters: BTreeSet<String>,
    selected_venue_id: Option<VenueId>,
}

impl ViewState {
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn active_filters(&self) -> &BTreeSet<String> {
        &self.active_filters
    }

    #[must_use]
    pub fn is_filter_active(&self, label: &str) -> bool {
        self.active_filters.contains(label)
    }

    #[must_use]
    pub const fn selected_venue_id(&self) -> Option<VenueId> {
        self.selected_venue_id
    }

    /// Opens the detail view for `id`.
    pub fn select_venue(&mut self, id: VenueId) {
        tracing::debug!(venue_id = id, "venue selected");
        self.selected_venue_id = Some(id);
    }

    /// Returns to the list view.
    pub fn clear_selection(&mut self) {
        tracing::debug!(previous = ?self.selected_venue_id, "selection cleared");
        self.selected_venue_id = None;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        tracing::trace!(term = %self.search_term, "search term set");
    }

    pub fn set_category(&mut self, category: Category) {
        tracing::debug!(category = ?category, "category set");
        self.category = category;
    }

    /// Adds `label` to the active filters, or removes it if already active.
    ///
    /// Toggling the same label twice restores the original set.
    pub fn toggle_filter(&mut self, label: &str) {
        if !self.active_filters.remove(label) {
            self.active_filters.insert(label.to_string());
        }
        tracing::debug!(
            label = %label,
            active = self.active_filters.contains(label),
            active_count = self.active_filters.len(),
            "amenity filter toggled"
        );
    }

    /// Current screen, treating an unknown selected id as the list view.
    #[must_use]
    pub fn screen<'s>(&self, store: &'s VenueStore) -> Screen<'s> {
        self.selected_venue_id
            .and_then(|id| store.get(id))
            .map_or(Screen::List, Screen::Detail)
    }

    /// Like [`screen`](Self::screen), but also clears a selected id that no
    /// longer resolves so the state itself falls back to the list view.
    pub fn resolve<'s>(&mut self, store: &'s VenueStore) -> Screen<'s> {
        let screen = self.screen(store);
        if matches!(screen, Screen::List) && self.selected_venue_id.is_some() {
            tracing::debug!(
                venue_id = ?self.selected_venue_id,
                "selected venue not found, falling back to list view"
            );
            self.selected_venue_id = None;
        }
        screen
    }
}
