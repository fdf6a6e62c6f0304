//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information like highlight ranges, windowing, and selection state.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! ```text
//! UIViewModel
//! ├── Pending                 nothing drawn
//! ├── Failed(ErrorState)
//! ├── List(ListViewModel)     header, search bar, heading, chips, cards
//! └── Detail(DetailViewModel) scrolled window of DetailLine
//! ```

use crate::domain::{Category, VenueId, VenueKind};

/// Complete renderable state of the plugin pane.
#[derive(Debug, Clone, PartialEq)]
pub enum UIViewModel {
    /// Venue data has not arrived yet. The pane stays blank.
    Pending,
    /// Venue data could not be loaded. Nothing else is drawn.
    Failed(ErrorState),
    /// Directory listing.
    List(ListViewModel),
    /// Full profile of one venue.
    Detail(DetailViewModel),
}

/// Title, tagline, and category selector.
///
/// This is the only region the renderer caches between frames, so it must
/// carry everything that affects its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: &'static str,
    pub tagline: &'static str,
    pub categories: Vec<CategoryTab>,
}

/// One button of the category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub category: Category,
    pub label: &'static str,
    pub is_active: bool,
}

/// Search input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term, possibly empty.
    pub query: String,
    /// Shown dimmed when the query is empty.
    pub placeholder: &'static str,
    /// `true` while keystrokes edit the query.
    pub is_focused: bool,
}

/// One amenity filter toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub label: String,
    pub is_active: bool,
    /// Keyboard cursor position among the chips.
    pub is_focused: bool,
}

/// A venue summary card in the results grid.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueCard {
    pub id: VenueId,
    pub kind: VenueKind,
    pub name: String,
    pub location: String,
    /// Formatted star rating, e.g. `★ 4.5`.
    pub rating: String,
    /// Formatted review count, e.g. `(120 reviews)`.
    pub reviews: String,
    pub description: String,
    pub thumbnail_url: String,
    pub is_selected: bool,
    /// Char ranges of `name` matching the search term.
    pub name_highlights: Vec<(usize, usize)>,
    /// Char ranges of `location` matching the search term.
    pub location_highlights: Vec<(usize, usize)>,
}

/// Directory listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// `Showing N Results` or `No Results Found`.
    pub heading: String,
    pub chips: Vec<FilterChip>,
    /// Cards in the visible window only.
    pub cards: Vec<VenueCard>,
    /// Set instead of cards when nothing matches.
    pub empty_state: Option<EmptyState>,
    pub footer: FooterInfo,
}

/// One logical line of the detail page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    Blank,
    /// Hero image address.
    Photo(String),
    /// Type badge and venue name.
    Title { kind: VenueKind, name: String },
    Address(String),
    /// Section heading.
    Heading(&'static str),
    /// Amenity chips of the venue.
    Amenities(Vec<String>),
    /// Labelled value such as hours or a contact channel.
    Field { label: &'static str, value: String },
    Review { comment: String, name: String },
    NoReviews,
    /// Presentational input of the review form.
    FormField { label: &'static str, placeholder: &'static str },
    SubmitButton,
}

/// Detail page with its body already windowed to the pane height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    pub id: VenueId,
    pub name: String,
    /// Visible body lines.
    pub lines: Vec<DetailLine>,
    /// Body lines scrolled past at the top.
    pub hidden_above: usize,
    /// Body lines not reached yet at the bottom.
    pub hidden_below: usize,
    pub footer: FooterInfo,
}

/// Keybinding hints for the footer bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown in place of the results grid when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Terminal load failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub message: String,
    pub subtitle: String,
    /// Underlying error text.
    pub detail: String,
}
