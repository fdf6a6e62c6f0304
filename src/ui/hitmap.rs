//! Click target map for mouse input.
//!
//! Every render produces a fresh [`HitMap`] describing which screen cells are
//! interactive. A mouse click is resolved against the map of the most recent
//! frame and turned into an ordinary [`Event`], so clicks and keys share the
//! same state transitions. Replacing the map wholesale on each render means
//! there is never a stale handler left over from content that was redrawn.

use crate::app::Event;
use crate::domain::{Category, VenueId};
use std::ops::Range;

/// What a clickable region does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// The search input; focuses it.
    SearchBox,
    /// A category selector button.
    Category(Category),
    /// An amenity filter chip.
    Filter(String),
    /// A venue card; opens its detail page.
    Venue(VenueId),
    /// The detail page back button.
    Back,
    /// The review form submit button.
    SubmitReview,
}

impl ClickTarget {
    /// The event a click on this target triggers.
    #[must_use]
    pub fn event(&self) -> Event {
        match self {
            Self::SearchBox => Event::FocusSearch,
            Self::Category(category) => Event::SetCategory(*category),
            Self::Filter(label) => Event::ToggleFilter(label.clone()),
            Self::Venue(id) => Event::OpenVenue(*id),
            Self::Back => Event::Back,
            Self::SubmitReview => Event::SubmitReview,
        }
    }
}

/// A horizontal run of cells on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    /// 1-based screen row.
    pub row: usize,
    /// 1-based columns, end exclusive.
    pub cols: Range<usize>,
    pub target: ClickTarget,
}

/// Clickable regions of one rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<HitRegion>,
}

impl HitMap {
    /// Adds a region of `width` cells at 1-based `row` and `col`.
    ///
    /// Zero-width regions are ignored.
    pub fn register(&mut self, row: usize, col: usize, width: usize, target: ClickTarget) {
        if width == 0 {
            return;
        }
        self.regions.push(HitRegion {
            row,
            cols: col..col + width,
            target,
        });
    }

    /// Target under the 1-based cell, if any.
    #[must_use]
    pub fn target_at(&self, row: usize, col: usize) -> Option<&ClickTarget> {
        self.regions
            .iter()
            .find(|region| region.row == row && region.cols.contains(&col))
            .map(|region| &region.target)
    }

    pub fn extend(&mut self, other: &Self) {
        self.regions.extend(other.regions.iter().cloned());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitRegion> {
        self.regions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
