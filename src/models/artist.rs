//! Artist-related models.

use serde::{Deserialize, Serialize};

use super::common::{largest_image, ExternalUrls, Followers, Image, ObjectType};
use super::nullable::null_as_default;

/// Artist when nested inside an album or track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistSimple {
    /// External URLs for this artist.
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,

    /// Link to the Web API endpoint with full details.
    pub href: Option<String>,

    /// Spotify ID; null for artists of local tracks.
    pub id: Option<String>,

    /// Artist name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Object type, always `artist`.
    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,

    /// Spotify URI.
    pub uri: Option<String>,
}

impl ArtistSimple {
    /// Create a new artist with name and Spotify ID.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, id: S2) -> Self {
        let id = id.into();
        Self {
            uri: Some(format!("spotify:artist:{}", id)),
            id: Some(id),
            name: name.into(),
            type_: Some(ObjectType::Artist),
            ..Default::default()
        }
    }
}

/// A full artist record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// External URLs for this artist.
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,

    /// Follower count.
    pub followers: Option<Followers>,

    /// Genres associated with the artist.
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,

    /// Link to the Web API endpoint.
    pub href: Option<String>,

    /// Spotify ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Artist images in various sizes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,

    /// Artist name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Popularity between 0 and 100.
    pub popularity: Option<u32>,

    /// Object type, always `artist`.
    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,

    /// Spotify URI.
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

impl Artist {
    /// Get the largest image available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest_image(&self.images)
    }

    /// Number of followers, zero when unknown.
    pub fn follower_count(&self) -> u64 {
        self.followers.as_ref().map(|f| f.total).unwrap_or(0)
    }
}

/// Several artists, as returned by the multiple-artists and related-artists
/// endpoints. Entries are `None` for IDs the API could not resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artists {
    #[serde(deserialize_with = "null_as_default")]
    pub artists: Vec<Option<Artist>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_simple_new() {
        let artist = ArtistSimple::new("Test Artist", "12345");
        assert_eq!(artist.name, "Test Artist");
        assert_eq!(artist.id.as_deref(), Some("12345"));
        assert_eq!(artist.uri.as_deref(), Some("spotify:artist:12345"));
    }

    #[test]
    fn test_artist_decodes_with_null_entries() {
        let json = r#"{
            "artists": [
                {
                    "id": "0OdUWJ0sBjDrqHygGUXeCF",
                    "name": "Band of Horses",
                    "uri": "spotify:artist:0OdUWJ0sBjDrqHygGUXeCF",
                    "followers": {"href": null, "total": 1234},
                    "genres": ["indie folk"],
                    "popularity": 59,
                    "type": "artist"
                },
                null
            ]
        }"#;
        let artists: Artists = serde_json::from_str(json).unwrap();
        assert_eq!(artists.artists.len(), 2);

        let first = artists.artists[0].as_ref().unwrap();
        assert_eq!(first.follower_count(), 1234);
        assert_eq!(first.type_, Some(ObjectType::Artist));
        assert!(artists.artists[1].is_none());
    }
}
