//! Common types shared across all models.
//!
//! Every enum in this module has an `Unknown` variant that any unrecognized
//! string decodes to, so a new constant on the API side never breaks
//! decoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// Known external URLs for an object, keyed by type (e.g. `"spotify"`).
pub type ExternalUrls = HashMap<String, String>;

/// Known external IDs for an object, keyed by type (e.g. `"isrc"`, `"upc"`).
pub type ExternalIds = HashMap<String, String>;

/// Image with URL and optional dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// URL to the image.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,

    /// Height in pixels, if known.
    pub height: Option<u32>,

    /// Width in pixels, if known.
    pub width: Option<u32>,
}

impl Image {
    /// Pixel area, treating unknown dimensions as zero.
    pub fn area(&self) -> u64 {
        u64::from(self.width.unwrap_or(0)) * u64::from(self.height.unwrap_or(0))
    }
}

/// Pick the largest image from a list.
pub fn largest_image(images: &[Image]) -> Option<&Image> {
    images.iter().max_by_key(|img| img.area())
}

/// Follower information.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Followers {
    /// Always null in current API versions.
    pub href: Option<String>,

    /// Total number of followers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

/// Copyright statement attached to an album.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Copyright {
    /// Copyright text.
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,

    /// Copyright type (`"C"` for copyright, `"P"` for performance).
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub type_: String,
}

/// Content restrictions applied to an object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Restrictions {
    /// Reason for the restriction (e.g. `"market"`, `"explicit"`).
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
}

/// Playlist version identifier returned by playlist modifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SnapshotId {
    /// The snapshot id.
    #[serde(deserialize_with = "null_as_default")]
    pub snapshot_id: String,
}

/// Error envelope returned by the API on failed requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// The error details.
    #[serde(deserialize_with = "null_as_default")]
    pub error: ErrorDetails,
}

/// Status and message of a failed request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetails {
    /// HTTP status code.
    #[serde(deserialize_with = "null_as_default")]
    pub status: u16,

    /// Human-readable message.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

/// Release date split into its parts.
///
/// The API reports dates with year, month or day precision, so month and
/// day may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReleaseDate {
    /// Year of release.
    pub year: i32,

    /// Month of release (1-12), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    /// Day of release (1-31), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl ReleaseDate {
    /// Parse a date string in "YYYY", "YYYY-MM" or "YYYY-MM-DD" format.
    pub fn parse(date_str: &str) -> Self {
        if date_str.is_empty() {
            return Self::default();
        }

        let parts: Vec<&str> = date_str.split('-').collect();

        Self {
            year: parts.first().and_then(|s| s.parse().ok()).unwrap_or(0),
            month: parts.get(1).and_then(|s| s.parse().ok()),
            day: parts.get(2).and_then(|s| s.parse().ok()),
        }
    }
}

/// Type of an album.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Relationship between an artist and an album in artist album listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumGroup {
    Album,
    Single,
    Compilation,
    AppearsOn,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Precision of a `release_date` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseDatePrecision {
    Year,
    Month,
    Day,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Subscription level of the current user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Premium,
    Free,
    Open,
    #[default]
    #[serde(other)]
    Unknown,
}

/// The `type` discriminator carried by every API object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Album,
    Artist,
    Track,
    Playlist,
    User,
    Episode,
    Show,
    AudioFeatures,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Kind of seed used to generate recommendations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeedType {
    Artist,
    Track,
    Genre,
    #[default]
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_date_full() {
        let date = ReleaseDate::parse("2023-05-15");
        assert_eq!(date.year, 2023);
        assert_eq!(date.month, Some(5));
        assert_eq!(date.day, Some(15));
    }

    #[test]
    fn test_parse_release_date_year_only() {
        let date = ReleaseDate::parse("1981");
        assert_eq!(date.year, 1981);
        assert_eq!(date.month, None);
        assert_eq!(date.day, None);
    }

    #[test]
    fn test_parse_release_date_empty() {
        assert_eq!(ReleaseDate::parse(""), ReleaseDate::default());
    }

    #[test]
    fn test_known_enum_values() {
        let t: AlbumType = serde_json::from_str(r#""compilation""#).unwrap();
        assert_eq!(t, AlbumType::Compilation);

        let g: AlbumGroup = serde_json::from_str(r#""appears_on""#).unwrap();
        assert_eq!(g, AlbumGroup::AppearsOn);

        let o: ObjectType = serde_json::from_str(r#""audio_features""#).unwrap();
        assert_eq!(o, ObjectType::AudioFeatures);

        let s: SeedType = serde_json::from_str(r#""GENRE""#).unwrap();
        assert_eq!(s, SeedType::Genre);
    }

    #[test]
    fn test_unknown_enum_values_fall_back() {
        let t: AlbumType = serde_json::from_str(r#""mixtape""#).unwrap();
        assert_eq!(t, AlbumType::Unknown);

        let p: ReleaseDatePrecision = serde_json::from_str(r#""decade""#).unwrap();
        assert_eq!(p, ReleaseDatePrecision::Unknown);

        let u: Product = serde_json::from_str(r#""premium_family""#).unwrap();
        assert_eq!(u, Product::Unknown);

        let o: ObjectType = serde_json::from_str(r#""audiobook""#).unwrap();
        assert_eq!(o, ObjectType::Unknown);

        let s: SeedType = serde_json::from_str(r#""PODCAST""#).unwrap();
        assert_eq!(s, SeedType::Unknown);
    }

    #[test]
    fn test_largest_image() {
        let images = vec![
            Image {
                url: "small".to_string(),
                height: Some(64),
                width: Some(64),
            },
            Image {
                url: "big".to_string(),
                height: Some(640),
                width: Some(640),
            },
            Image {
                url: "unsized".to_string(),
                height: None,
                width: None,
            },
        ];
        assert_eq!(largest_image(&images).map(|i| i.url.as_str()), Some("big"));
        assert!(largest_image(&[]).is_none());
    }
}
