//! Fixed amenity vocabulary shown as filter chips.

/// Every amenity label a venue can carry, in chip display order.
pub const AMENITIES: [&str; 10] = [
    "Playground",
    "Halal",
    "Changing Tables",
    "Stroller Friendly",
    "Indoor Play Area",
    "Water Play",
    "Petting Zoo",
    "Educational",
    "Theme Park",
    "Adventure",
];

/// Returns `true` if `label` belongs to the amenity vocabulary.
#[must_use]
pub fn is_known(label: &str) -> bool {
    AMENITIES.contains(&label)
}
