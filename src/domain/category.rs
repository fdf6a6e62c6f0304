//! Top-level venue classification used by the category selector.

use super::venue::VenueKind;

/// Category selected in the list view.
///
/// `All` disables the category predicate; the other two variants restrict the
/// listing to venues of the matching [`VenueKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Every venue regardless of kind.
    #[default]
    All,
    /// Restaurants only.
    Restaurant,
    /// Parks only.
    Park,
}

impl Category {
    /// Selector order, left to right.
    pub const ALL: [Self; 3] = [Self::All, Self::Restaurant, Self::Park];

    /// Returns `true` if a venue of `kind` passes this category.
    #[must_use]
    pub const fn matches(self, kind: VenueKind) -> bool {
        match self {
            Self::All => true,
            Self::Restaurant => matches!(kind, VenueKind::Restaurant),
            Self::Park => matches!(kind, VenueKind::Park),
        }
    }

    /// Button label shown in the category selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Show All",
            Self::Restaurant => "Restaurants",
            Self::Park => "Parks",
        }
    }

    /// The next category in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Restaurant,
            Self::Restaurant => Self::Park,
            Self::Park => Self::All,
        }
    }
}
