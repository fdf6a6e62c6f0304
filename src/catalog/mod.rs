//! Catalog layer: loading and holding the venue directory.
//!
//! The directory is read once at startup and kept in an immutable
//! [`VenueStore`] for the rest of the session.
//!
//! # Modules
//!
//! - `source`: Data source abstraction, file source, and JSON decoding
//! - `store`: Immutable, id-indexed venue store

pub mod source;
pub mod store;

pub use source::{parse_venues, FileSource, SourceLocation, VenueSource};
pub use store::VenueStore;
