//! Paging containers.
//!
//! Offset-based [`Pager`] and cursor-based [`CursorPager`], plus the keyed
//! wrappers the search and browse endpoints return.

use serde::{Deserialize, Serialize};

use super::album::AlbumSimple;
use super::artist::Artist;
use super::browse::Category;
use super::nullable::{null_as_default, skip_nulls};
use super::playlist::PlaylistSimple;
use super::track::Track;

/// Offset-based page of items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Pager<T> {
    /// Link to the full result of this request.
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,

    /// Items in this page.
    #[serde(deserialize_with = "skip_nulls")]
    pub items: Vec<T>,

    /// Maximum number of items requested.
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: u32,

    /// URL of the next page, if any.
    pub next: Option<String>,

    /// Offset of this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub offset: u32,

    /// URL of the previous page, if any.
    pub previous: Option<String>,

    /// Total number of items available.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u32,
}

impl<T> Pager<T> {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Cursor position within a [`CursorPager`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cursor {
    /// Key to fetch the page after this one.
    pub after: Option<String>,

    /// Key to fetch the page before this one.
    pub before: Option<String>,
}

/// Cursor-based page of items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CursorPager<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,

    #[serde(deserialize_with = "skip_nulls")]
    pub items: Vec<T>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: u32,

    pub next: Option<String>,

    pub cursors: Option<Cursor>,

    pub total: Option<u32>,
}

impl<T> CursorPager<T> {
    /// The `after` cursor to pass as an option for the next page.
    pub fn after(&self) -> Option<&str> {
        self.cursors.as_ref().and_then(|c| c.after.as_deref())
    }
}

/// Album search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlbumsPager {
    #[serde(deserialize_with = "null_as_default")]
    pub albums: Pager<AlbumSimple>,
}

/// Artist search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistsPager {
    #[serde(deserialize_with = "null_as_default")]
    pub artists: Pager<Artist>,
}

/// Track search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TracksPager {
    #[serde(deserialize_with = "null_as_default")]
    pub tracks: Pager<Track>,
}

/// Playlist search or category results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistsPager {
    #[serde(deserialize_with = "null_as_default")]
    pub playlists: Pager<PlaylistSimple>,
}

/// Artists followed by the current user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistsCursorPager {
    #[serde(deserialize_with = "null_as_default")]
    pub artists: CursorPager<Artist>,
}

/// Browse categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoriesPager {
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Pager<Category>,
}
