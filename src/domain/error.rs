//! Error types for the Dunia plugin.
//!
//! This module defines the centralized error type [`DuniaError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// The main error type for Dunia plugin operations.
///
/// Only the venue load can fail in a way the user sees. Every other variant is
/// logged where it is handled and never interrupts the session.
///
/// # Examples
///
/// ```
/// use dunia::DuniaError;
///
/// let err = DuniaError::DuplicateVenueId(7);
/// assert_eq!(err.to_string(), "Duplicate venue id: 7");
/// ```
#[derive(Debug, Error)]
pub enum DuniaError {
    /// Reading the venue data file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The venue data is not a valid JSON array of venue records.
    #[error("Invalid venue data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two venue records share the same `id`.
    #[error("Duplicate venue id: {0}")]
    DuplicateVenueId(crate::domain::VenueId),

    /// The remote data source answered with a non-success status.
    #[error("HTTP request failed with status {0}")]
    Http(u16),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for Dunia operations.
pub type Result<T> = std::result::Result<T, DuniaError>;
