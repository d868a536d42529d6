//! Album-related models.
//!
//! This module contains models for representing albums, both the
//! simplified form nested in other objects and the full album record.

use serde::{Deserialize, Serialize};

use super::artist::ArtistSimple;
use super::common::{
    largest_image, AlbumGroup, AlbumType, Copyright, ExternalIds, ExternalUrls, Image, ObjectType,
    ReleaseDate, ReleaseDatePrecision, Restrictions,
};
use super::nullable::null_as_default;
use super::paging::Pager;
use super::track::TrackSimple;

/// Album when nested inside another object (track, artist album list, search).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlbumSimple {
    /// Album type: album, single or compilation.
    pub album_type: Option<AlbumType>,

    /// Relationship to the artist, only present in artist album listings.
    pub album_group: Option<AlbumGroup>,

    /// Artists of the album.
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<ArtistSimple>,

    /// Markets in which the album is available (ISO 3166-1 alpha-2).
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_markets: Vec<String>,

    /// External URLs for this album.
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,

    /// Link to the Web API endpoint with full details.
    pub href: Option<String>,

    /// Spotify ID; null for albums of local tracks.
    pub id: Option<String>,

    /// Cover art in various sizes, widest first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,

    /// Album name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Release date string, precision given by `release_date_precision`.
    pub release_date: Option<String>,

    /// Precision of `release_date`.
    pub release_date_precision: Option<ReleaseDatePrecision>,

    /// Restrictions applied to the album.
    pub restrictions: Option<Restrictions>,

    /// Number of tracks.
    pub total_tracks: Option<u32>,

    /// Object type, always `album`.
    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,

    /// Spotify URI.
    pub uri: Option<String>,
}

impl AlbumSimple {
    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        join_artist_names(&self.artists, separator)
    }

    /// Release date split into its parts.
    pub fn release(&self) -> Option<ReleaseDate> {
        self.release_date.as_deref().map(ReleaseDate::parse)
    }
}

/// A full album record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Album type: album, single or compilation.
    pub album_type: Option<AlbumType>,

    /// Album artists.
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<ArtistSimple>,

    /// Markets in which the album is available.
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_markets: Vec<String>,

    /// Copyright statements.
    #[serde(default, deserialize_with = "null_as_default")]
    pub copyrights: Vec<Copyright>,

    /// Known external IDs (`upc`, `ean`, ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_ids: ExternalIds,

    /// External URLs for this album.
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,

    /// Genres; usually empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,

    /// Link to the Web API endpoint.
    pub href: Option<String>,

    /// Spotify ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Cover art in various sizes, widest first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,

    /// Label of the album.
    pub label: Option<String>,

    /// Album name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Popularity between 0 and 100.
    pub popularity: Option<u32>,

    /// Release date string.
    pub release_date: Option<String>,

    /// Precision of `release_date`.
    pub release_date_precision: Option<ReleaseDatePrecision>,

    /// Restrictions applied to the album.
    pub restrictions: Option<Restrictions>,

    /// Number of tracks.
    pub total_tracks: Option<u32>,

    /// First page of the album's tracks.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracks: Pager<TrackSimple>,

    /// Object type, always `album`.
    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,

    /// Spotify URI.
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

impl Album {
    /// Get the primary artist name.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }

    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        join_artist_names(&self.artists, separator)
    }

    /// Release date split into its parts.
    pub fn release(&self) -> Option<ReleaseDate> {
        self.release_date.as_deref().map(ReleaseDate::parse)
    }

    /// Total duration of the tracks in the first page, in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.tracks.items.iter().map(|t| t.duration_ms).sum()
    }

    /// Get the largest cover image available.
    pub fn largest_image(&self) -> Option<&Image> {
        largest_image(&self.images)
    }

    /// Get tracks for a specific disc.
    pub fn tracks_for_disc(&self, disc_number: u32) -> Vec<&TrackSimple> {
        self.tracks
            .items
            .iter()
            .filter(|t| t.disc_number == disc_number)
            .collect()
    }
}

/// Several albums, as returned by the multiple-albums endpoint.
///
/// Entries are `None` for IDs the API could not resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Albums {
    #[serde(deserialize_with = "null_as_default")]
    pub albums: Vec<Option<Album>>,
}

/// Album saved in the current user's library.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SavedAlbum {
    /// When the album was saved (ISO 8601).
    #[serde(deserialize_with = "null_as_default")]
    pub added_at: String,

    /// The album.
    #[serde(deserialize_with = "null_as_default")]
    pub album: Album,
}

/// New album releases featured in Spotify.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewReleases {
    /// Localized message, when the API provides one.
    pub message: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub albums: Pager<AlbumSimple>,
}

fn join_artist_names(artists: &[ArtistSimple], separator: &str) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
