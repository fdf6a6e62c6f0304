//! Venue filter engine.
//!
//! Pure functions mapping the venue store and the current [`ViewState`] to the
//! venues that should be listed. Three predicates are applied, all of which
//! must hold:
//!
//! 1. **Category**: unless the category is `All`, the venue kind must match
//! 2. **Text**: a non-empty search term must occur, case-insensitively, in the
//!    venue name or its location
//! 3. **Amenities**: the venue tags must include every active filter
//!
//! The result keeps store order. There is no sorting and no pagination.

use super::view_state::ViewState;
use crate::catalog::VenueStore;
use crate::domain::Venue;

/// Returns the venues passing every predicate, in store order.
///
/// # Example
///
/// ```
/// use dunia::app::{filter::filter_venues, ViewState};
/// use dunia::catalog::VenueStore;
///
/// let store = VenueStore::new(vec![]).unwrap();
/// assert!(filter_venues(&store, &ViewState::default()).is_empty());
/// ```
#[must_use]
pub fn filter_venues<'s>(store: &'s VenueStore, view: &ViewState) -> Vec<&'s Venue> {
    let _span = tracing::debug_span!(
        "filter_venues",
        total_venues = store.len(),
        term_len = view.search_term().len(),
        category = ?view.category(),
        filter_count = view.active_filters().len()
    )
    .entered();

    let needle = view.search_term().to_lowercase();
    let matched: Vec<&Venue> = store
        .iter()
        .filter(|venue| matches(venue, view, &needle))
        .collect();

    tracing::debug!(matched_count = matched.len(), "venue filter applied");
    matched
}

/// Applies the three predicates to one venue.
///
/// `needle` is the lower-cased search term, computed once per filter pass.
fn matches(venue: &Venue, view: &ViewState, needle: &str) -> bool {
    if !view.category().matches(venue.kind) {
        return false;
    }

    if !needle.is_empty()
        && !venue.name.to_lowercase().contains(needle)
        && !venue.location.to_lowercase().contains(needle)
    {
        return false;
    }

    view.active_filters().iter().all(|filter| venue.has_tag(filter))
}

/// Character ranges of `text` where `term` occurs, ignoring case.
///
/// Ranges are `(start, end)` char indices with exclusive end, non-overlapping,
/// left to right. An empty term yields no ranges.
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = term.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![];
    }

    let hay: Vec<char> = text.chars().collect();
    let mut ranges = Vec::new();
    let mut start = 0;

    while start < hay.len() {
        if let Some(len) = match_len_at(&hay[start..], &needle) {
            ranges.push((start, start + len));
            start += len;
        } else {
            start += 1;
        }
    }

    ranges
}

/// Number of chars of `hay` consumed when `needle` matches at its start.
fn match_len_at(hay: &[char], needle: &[char]) -> Option<usize> {
    let mut lowered = Vec::with_capacity(needle.len());
    for (consumed, c) in hay.iter().enumerate() {
        lowered.extend(c.to_lowercase());
        if lowered.len() >= needle.len() {
            return (lowered == needle).then_some(consumed + 1);
        }
    }
    None
}
