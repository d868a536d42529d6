//! Playlist-related models.
//!
//! This module contains models for representing playlists and their
//! entries, plus the request bodies used to create and edit playlists.

use serde::{Deserialize, Serialize};

use super::common::{largest_image, ExternalUrls, Followers, Image, ObjectType};
use super::nullable::null_as_default;
use super::paging::Pager;
use super::track::Track;
use super::user::UserPublic;

/// Reference to a playlist's tracks, as found in simplified playlists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistTracksInformation {
    /// Web API endpoint for the full track list.
    pub href: Option<String>,

    /// Number of tracks in the playlist.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u32,
}

/// Playlist when listed (user playlists, search, browse).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistSimple {
    /// Whether other users may modify the playlist.
    #[serde(default, deserialize_with = "null_as_default")]
    pub collaborative: bool,

    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,

    pub href: Option<String>,

    /// Spotify ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,

    /// Playlist name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Owner of the playlist.
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: UserPublic,

    /// Public status; null when not relevant.
    pub public: Option<bool>,

    /// Version identifier for the current playlist.
    pub snapshot_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tracks: PlaylistTracksInformation,

    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,

    pub uri: Option<String>,
}

/// A full playlist record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    /// Whether other users may modify the playlist.
    #[serde(default, deserialize_with = "null_as_default")]
    pub collaborative: bool,

    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,

    pub followers: Option<Followers>,

    pub href: Option<String>,

    /// Spotify ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,

    /// Playlist name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Owner of the playlist.
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: UserPublic,

    pub public: Option<bool>,

    pub snapshot_id: Option<String>,

    /// First page of playlist entries.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracks: Pager<PlaylistTrack>,

    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,

    pub uri: Option<String>,
}

impl Playlist {
    /// Get the largest cover image available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest_image(&self.images)
    }

    /// Tracks of the first page, skipping entries the API returned as null.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.items.iter().filter_map(|item| item.track.as_ref())
    }

    /// Total duration of the first page of tracks, in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.tracks().map(|t| t.duration_ms).sum()
    }
}

/// Entry of a playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistTrack {
    /// When the track was added; null for very old playlists.
    pub added_at: Option<String>,

    /// Who added the track; null for very old playlists.
    pub added_by: Option<UserPublic>,

    /// Whether this entry is a local file.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_local: bool,

    /// The track; null when it is no longer available.
    pub track: Option<Track>,
}

/// Body for following a playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistFollowPrivacy {
    /// Whether the playlist shows up on the user's public profile.
    pub public: bool,
}

/// Body for creating a playlist or changing its details.
///
/// Only fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlaylistDetails {
    /// Details for a new playlist with the given name.
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Body for adding tracks to a playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistTracksToAdd {
    /// Spotify track URIs.
    pub uris: Vec<String>,

    /// Zero-based insert position; appended when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// Body for replacing every track of a playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistUris {
    pub uris: Vec<String>,
}

/// Body for moving a range of tracks within a playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistReorder {
    /// Position of the first track to move.
    pub range_start: u32,

    /// Position the range is inserted before.
    pub insert_before: u32,

    /// Number of tracks to move, one when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

/// Featured playlists from the browse section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeaturedPlaylists {
    /// Localized headline, e.g. "Monday morning music".
    pub message: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub playlists: Pager<PlaylistSimple>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_skips_unavailable_tracks() {
        let json = r##"{
            "id": "3Jlo5JoAA9pMUQfhLaLG5u",
            "name": "Road trip",
            "owner": {"id": "spotify", "display_name": "Spotify"},
            "tracks": {
                "items": [
                    {"added_at": "2015-01-15T12:39:22Z",
                     "track": {"name": "One", "duration_ms": 1000}},
                    {"added_at": null, "track": null},
                    {"added_at": "2015-01-15T12:40:03Z",
                     "track": {"name": "Two", "duration_ms": 2000}}
                ],
                "total": 3
            },
            "primary_color": "#ffffff"
        }"##;
        let playlist: Playlist = serde_json::from_str(json).unwrap();
        assert_eq!(playlist.owner.name(), "Spotify");
        assert_eq!(playlist.tracks().count(), 2);
        assert_eq!(playlist.total_duration_ms(), 3000);
    }

    #[test]
    fn test_playlist_details_only_sends_set_fields() {
        let details = PlaylistDetails {
            public: Some(false),
            ..PlaylistDetails::named("New Playlist")
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "New Playlist", "public": false})
        );
    }
}
