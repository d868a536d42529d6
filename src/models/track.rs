//! Track-related models.
//!
//! This module contains models for representing tracks, their linked
//! (relinked) counterparts, saved tracks, and the request bodies used to
//! remove tracks from a playlist.

use serde::{Deserialize, Serialize};

use super::album::AlbumSimple;
use super::artist::ArtistSimple;
use super::common::{ExternalIds, ExternalUrls, ObjectType, Restrictions};
use super::nullable::null_as_default;

/// Track that was relinked to the one requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LinkedTrack {
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,
    pub href: Option<String>,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,
    pub uri: Option<String>,
}

/// Track when nested inside an album.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackSimple {
    /// Artists who performed the track.
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<ArtistSimple>,

    /// Markets in which the track is available.
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_markets: Vec<String>,

    /// Disc number (1-indexed).
    #[serde(default = "default_one", deserialize_with = "null_as_default")]
    pub disc_number: u32,

    /// Duration in milliseconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: u64,

    /// Whether the track has explicit lyrics.
    #[serde(default, deserialize_with = "null_as_default")]
    pub explicit: bool,

    /// External URLs for this track.
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,

    /// Link to the Web API endpoint with full details.
    pub href: Option<String>,

    /// Spotify ID; null for local tracks.
    pub id: Option<String>,

    /// Whether the track is playable in the requested market.
    pub is_playable: Option<bool>,

    /// Whether the track is a local file.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_local: bool,

    /// Original track when relinking applied.
    pub linked_from: Option<LinkedTrack>,

    /// Track name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// 30 second preview URL, if available.
    pub preview_url: Option<String>,

    /// Restrictions applied to the track.
    pub restrictions: Option<Restrictions>,

    /// Track number on the disc (1-indexed).
    #[serde(default = "default_one", deserialize_with = "null_as_default")]
    pub track_number: u32,

    /// Object type, always `track`.
    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,

    /// Spotify URI.
    pub uri: Option<String>,
}

fn default_one() -> u32 {
    1
}

impl TrackSimple {
    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        format_duration(self.duration_ms)
    }
}

/// A full track record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Album containing this track.
    #[serde(default, deserialize_with = "null_as_default")]
    pub album: AlbumSimple,

    /// Artists who performed this track.
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<ArtistSimple>,

    /// Markets in which the track is available.
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_markets: Vec<String>,

    /// Disc number (1-indexed).
    #[serde(default = "default_one", deserialize_with = "null_as_default")]
    pub disc_number: u32,

    /// Duration in milliseconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: u64,

    /// Whether the track has explicit lyrics.
    #[serde(default, deserialize_with = "null_as_default")]
    pub explicit: bool,

    /// Known external IDs (`isrc`, ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_ids: ExternalIds,

    /// External URLs for this track.
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,

    /// Link to the Web API endpoint.
    pub href: Option<String>,

    /// Spotify ID; null for local tracks.
    pub id: Option<String>,

    /// Whether the track is playable in the requested market.
    pub is_playable: Option<bool>,

    /// Whether the track is a local file.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_local: bool,

    /// Original track when relinking applied.
    pub linked_from: Option<LinkedTrack>,

    /// Track name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Popularity between 0 and 100.
    pub popularity: Option<u32>,

    /// 30 second preview URL, if available.
    pub preview_url: Option<String>,

    /// Restrictions applied to the track.
    pub restrictions: Option<Restrictions>,

    /// Track number on the disc (1-indexed).
    #[serde(default = "default_one", deserialize_with = "null_as_default")]
    pub track_number: u32,

    /// Object type, always `track`.
    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,

    /// Spotify URI.
    pub uri: Option<String>,
}

impl Track {
    /// Get the primary artist name.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }

    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        format_duration(self.duration_ms)
    }

    /// International Standard Recording Code, if known.
    pub fn isrc(&self) -> Option<&str> {
        self.external_ids.get("isrc").map(String::as_str)
    }
}

fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Several tracks, as returned by the multiple-tracks and top-tracks
/// endpoints. Entries are `None` for IDs the API could not resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Tracks {
    #[serde(deserialize_with = "null_as_default")]
    pub tracks: Vec<Option<Track>>,
}

/// Track saved in the current user's library.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SavedTrack {
    /// When the track was saved (ISO 8601).
    #[serde(deserialize_with = "null_as_default")]
    pub added_at: String,

    /// The track.
    #[serde(deserialize_with = "null_as_default")]
    pub track: Track,
}

/// Track to remove from a playlist, every occurrence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackToRemove {
    pub uri: String,
}

/// Body for removing tracks from a playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TracksToRemove {
    pub tracks: Vec<TrackToRemove>,

    /// Playlist version to apply the removal to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

impl TracksToRemove {
    /// Build a removal body from track URIs.
    pub fn from_uris<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracks: uris
                .into_iter()
                .map(|uri| TrackToRemove { uri: uri.into() })
                .collect(),
            snapshot_id: None,
        }
    }
}

/// Track to remove from specific playlist positions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackToRemoveWithPosition {
    pub uri: String,

    /// Zero-based positions of the occurrences to remove.
    pub positions: Vec<u32>,
}

/// Body for removing tracks at given positions from a playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TracksToRemoveWithPosition {
    pub tracks: Vec<TrackToRemoveWithPosition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_duration_formatted() {
        let track = Track {
            duration_ms: 215000,
            ..Default::default()
        };
        assert_eq!(track.duration_formatted(), "03:35");
    }

    #[test]
    fn test_track_artists_string() {
        let track = Track {
            artists: vec![
                ArtistSimple::new("Artist One", "1"),
                ArtistSimple::new("Artist Two", "2"),
            ],
            ..Default::default()
        };
        assert_eq!(track.artists_string(", "), "Artist One, Artist Two");
        assert_eq!(track.primary_artist(), Some("Artist One"));
    }

    #[test]
    fn test_null_numbers_decode_as_zero() {
        let json = r#"{
            "name": "x",
            "duration_ms": 1000,
            "disc_number": null,
            "track_number": null,
            "explicit": null,
            "artists": null,
            "album": null
        }"#;
        let track: Track = crate::codec::decode(json.as_bytes()).unwrap();
        assert_eq!(track.name, "x");
        assert_eq!(track.duration_ms, 1000);
        assert_eq!(track.disc_number, 0);
        assert_eq!(track.track_number, 0);
        assert!(!track.explicit);
        assert!(track.artists.is_empty());
        assert_eq!(track.album, AlbumSimple::default());
    }

    #[test]
    fn test_local_track_decodes() {
        let json = r#"{
            "album": {"id": null, "name": "", "type": "album", "images": []},
            "artists": [{"id": null, "name": "Someone", "type": "artist", "uri": null}],
            "id": null,
            "is_local": true,
            "name": "demo.mp3",
            "uri": "spotify:local:Someone::demo:215",
            "duration_ms": 215000
        }"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert!(track.is_local);
        assert!(track.id.is_none());
        assert_eq!(track.disc_number, 1);
        assert_eq!(track.primary_artist(), Some("Someone"));
    }

    #[test]
    fn test_tracks_to_remove_body() {
        let body = TracksToRemove::from_uris(["spotify:track:4iV5W9uYEdYUVa79Axb7Rh"]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"tracks": [{"uri": "spotify:track:4iV5W9uYEdYUVa79Axb7Rh"}]})
        );
    }
}
