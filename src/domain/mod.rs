//! Domain layer for the Dunia plugin.
//!
//! Core types of the venue directory, independent of Zellij APIs and of the
//! rendering layer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`venue`]: Venue record and its nested contact/review types
//! - [`category`]: Category selector values
//! - [`amenity`]: Fixed amenity vocabulary

pub mod amenity;
pub mod category;
pub mod error;
pub mod venue;

pub use amenity::AMENITIES;
pub use category::Category;
pub use error::{DuniaError, Result};
pub use venue::{Contact, UserReview, Venue, VenueId, VenueKind};
