//! Immutable venue store.
//!
//! The store is built once from the loaded records and never mutated
//! afterwards. Construction enforces id uniqueness so lookups by id are
//! unambiguous for the lifetime of the session.

use crate::domain::amenity;
use crate::domain::error::{DuniaError, Result};
use crate::domain::{Venue, VenueId};
use std::collections::HashMap;

/// Ordered, read-only collection of venues with an id index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueStore {
    venues: Vec<Venue>,
    index: HashMap<VenueId, usize>,
}

impl VenueStore {
    /// Builds a store from records in data-file order.
    ///
    /// # Errors
    ///
    /// Returns [`DuniaError::DuplicateVenueId`] if two records share an id.
    pub fn new(venues: Vec<Venue>) -> Result<Self> {
        let _span = tracing::debug_span!("venue_store_new", venue_count = venues.len()).entered();

        let mut index = HashMap::with_capacity(venues.len());
        for (position, venue) in venues.iter().enumerate() {
            if index.insert(venue.id, position).is_some() {
                tracing::debug!(venue_id = venue.id, "duplicate venue id in data");
                return Err(DuniaError::DuplicateVenueId(venue.id));
            }

            for tag in venue.tags.iter().filter(|t| !amenity::is_known(t)) {
                tracing::debug!(venue_id = venue.id, tag = %tag, "tag outside amenity vocabulary");
            }
        }

        tracing::debug!("venue store built");
        Ok(Self { venues, index })
    }

    /// Looks a venue up by id.
    #[must_use]
    pub fn get(&self, id: VenueId) -> Option<&Venue> {
        self.index.get(&id).and_then(|&position| self.venues.get(position))
    }

    /// Iterates venues in data-file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Venue> {
        self.venues.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

impl<'a> IntoIterator for &'a VenueStore {
    type Item = &'a Venue;
    type IntoIter = std::slice::Iter<'a, Venue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VenueKind;

    fn venue(id: VenueId, name: &str) -> Venue {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "type": "Park",
            "location": "KL",
        }))
        .unwrap()
    }

    #[test]
    fn keeps_data_file_order() {
        let store = VenueStore::new(vec![venue(5, "b"), venue(1, "a"), venue(3, "c")]).unwrap();
        let ids: Vec<VenueId> = store.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }

    #[test]
    fn lookup_by_id() {
        let store = VenueStore::new(vec![venue(5, "b"), venue(1, "a")]).unwrap();
        assert_eq!(store.get(1).map(|v| v.name.as_str()), Some("a"));
        assert_eq!(store.get(5).map(|v| v.kind), Some(VenueKind::Park));
        assert!(store.get(999).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = VenueStore::new(vec![venue(1, "a"), venue(1, "again")]).unwrap_err();
        assert!(matches!(err, DuniaError::DuplicateVenueId(1)));
    }

    #[test]
    fn empty_store() {
        let store = VenueStore::new(vec![]).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
