//! Venue data sources.
//!
//! This module defines the [`VenueSource`] trait that abstracts over where the
//! directory data comes from. The worker thread uses [`FileSource`]; remote
//! sources are fetched by the plugin through Zellij's web request API and
//! decoded with [`parse_venues`].

use crate::domain::error::Result;
use crate::domain::Venue;
use std::fmt;
use std::path::PathBuf;

/// Where a data source lives, as understood from the `data_source` setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Remote document fetched with an HTTP GET.
    Url(String),
    /// File on the host filesystem, read by the worker.
    File(PathBuf),
}

impl SourceLocation {
    /// Classifies a configured data source.
    ///
    /// `http://` and `https://` values are URLs; everything else is a path,
    /// resolved against the sandbox host mount.
    ///
    /// # Examples
    ///
    /// ```
    /// use dunia::catalog::SourceLocation;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(
    ///     SourceLocation::parse("https://example.com/data.json"),
    ///     SourceLocation::Url("https://example.com/data.json".to_string())
    /// );
    /// assert_eq!(
    ///     SourceLocation::parse("~/dunia/data.json"),
    ///     SourceLocation::File(PathBuf::from("/host/dunia/data.json"))
    /// );
    /// ```
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Url(source.to_string())
        } else {
            Self::File(crate::infrastructure::resolve_host_path(source))
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => {
                write!(f, "{}", crate::infrastructure::display_host_path(&path.to_string_lossy()))
            }
        }
    }
}

/// Anything venue records can be loaded from.
///
/// Implementations are called once per session. They must return records in
/// source order; the store built from them keeps that order.
pub trait VenueSource: Send {
    /// Loads every venue record.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or does not contain a JSON
    /// array of venue records.
    fn load(&self) -> Result<Vec<Venue>>;
}

/// Decodes a JSON array of venue records.
///
/// # Errors
///
/// Returns [`crate::DuniaError::Parse`] if the bytes are not a JSON array of
/// valid venue records.
pub fn parse_venues(bytes: &[u8]) -> Result<Vec<Venue>> {
    let venues: Vec<Venue> = serde_json::from_slice(bytes)?;
    tracing::debug!(venue_count = venues.len(), "venue data parsed");
    Ok(venues)
}

/// Venue data stored in a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl VenueSource for FileSource {
    fn load(&self) -> Result<Vec<Venue>> {
        let _span = tracing::debug_span!("file_source_load", path = ?self.path).entered();

        let bytes = std::fs::read(&self.path)?;
        tracing::debug!(byte_count = bytes.len(), "venue file read");
        parse_venues(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DuniaError;
    use std::io::Write;

    const TWO_VENUES: &str = r#"[
        {"id": 1, "name": "Cafe Bangsar", "type": "Restaurant", "location": "Bangsar", "tags": ["Halal"]},
        {"id": 2, "name": "KLCC Park", "type": "Park", "location": "KLCC", "tags": ["Playground"]}
    ]"#;

    #[test]
    fn file_source_reads_records_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_VENUES.as_bytes()).unwrap();

        let venues = FileSource::new(file.path().to_path_buf()).load().unwrap();
        let names: Vec<&str> = venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Cafe Bangsar", "KLCC Park"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("data.json")).load().unwrap_err();
        assert!(matches!(err, DuniaError::Io(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_venues(b"{\"venues\": []}").unwrap_err();
        assert!(matches!(err, DuniaError::Parse(_)));
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_venues(b"[]").unwrap().is_empty());
    }

    #[test]
    fn relative_paths_resolve_under_host() {
        assert_eq!(
            SourceLocation::parse("data.json"),
            SourceLocation::File(PathBuf::from("/host/data.json"))
        );
        assert_eq!(
            SourceLocation::parse("/srv/dunia/data.json"),
            SourceLocation::File(PathBuf::from("/srv/dunia/data.json"))
        );
    }
}
