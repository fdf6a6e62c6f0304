//! Venue domain model.
//!
//! A [`Venue`] is one restaurant or park record from the directory data file.
//! Records are read-only after load. Field names follow the camelCase keys of the
//! data file, so a record deserializes directly from JSON.

use regex::{NoExpand, Regex};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;

/// Identifier of a venue, unique within the loaded store. Any JSON integer,
/// negative ones included, is accepted.
pub type VenueId = i64;

/// Matches the `{width}x{height}` segment of a hosted image URL.
static SIZE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+x\d+").expect("size segment pattern is valid"));

/// Kind of venue, serialized as the `type` field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VenueKind {
    Restaurant,
    Park,
}

impl VenueKind {
    /// Badge text shown on cards and the detail page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::Park => "Park",
        }
    }
}

/// Optional contact channels of a venue.
///
/// Every field is independently optional. Empty strings in the data file are
/// treated the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub facebook: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub instagram: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub google_maps_url: Option<String>,
}

/// A visitor review shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReview {
    pub name: String,
    pub comment: String,
}

/// A restaurant or park listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: VenueKind,
    pub location: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default, deserialize_with = "review_count")]
    pub reviews: u32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: Contact,
    #[serde(default)]
    pub user_reviews: Vec<UserReview>,
}

impl Venue {
    /// Returns `true` if the venue carries the amenity `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns the image URL resized to `width`x`height`.
    ///
    /// Hosted images encode their size as a `{width}x{height}` path segment. The
    /// first such segment is replaced; URLs without one are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dunia::domain::Venue;
    /// # let mut venue: Venue = serde_json::from_str(
    /// #     r#"{"id":1,"name":"KLCC Park","type":"Park","location":"KLCC"}"#).unwrap();
    /// venue.image_url = "https://placehold.co/1200x600/png".to_string();
    /// assert_eq!(venue.thumbnail_url(600, 400), "https://placehold.co/600x400/png");
    /// ```
    #[must_use]
    pub fn thumbnail_url(&self, width: u32, height: u32) -> String {
        SIZE_SEGMENT
            .replace(&self.image_url, NoExpand(&format!("{width}x{height}")))
            .into_owned()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Accepts any JSON number. Fractions are truncated and negatives read as 0.
fn review_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = f64::deserialize(deserializer)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = count.max(0.0) as u32;
    Ok(count)
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
