//! Spotify Web API endpoint bindings.
//!
//! Every method maps to one REST endpoint and returns a [`Call`] that is
//! sent when awaited. Methods taking `options` append them as query
//! parameters after any fixed ones, e.g. `&[("market", "SE"), ("limit", "10")]`;
//! pass `&[]` for none.
//!
//! IDs are sent as single path segments. An ID that is empty, `.` or `..`
//! fails with [`SpotifyError::InvalidId`] before anything is sent.

use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use url::Url;

use super::call::{Call, Dispatcher, RequestSpec};
use super::config::Executors;
use crate::codec;
use crate::error::{Result, SpotifyError};
use crate::models::{
    Album, AlbumSimple, Albums, AlbumsPager, Artist, Artists, ArtistsCursorPager, ArtistsPager,
    AudioFeaturesTrack, AudioFeaturesTracks, CategoriesPager, Category, FeaturedPlaylists,
    NewReleases, Pager, Playlist, PlaylistDetails, PlaylistFollowPrivacy, PlaylistReorder,
    PlaylistSimple, PlaylistTrack, PlaylistTracksToAdd, PlaylistUris, PlaylistsPager,
    Recommendations, SavedAlbum, SavedTrack, SeedsGenres, SnapshotId, Track, TrackSimple, Tracks,
    TracksPager, TracksToRemove, TracksToRemoveWithPosition, UserPrivate, UserPublic,
};

/// Query options appended to a request.
pub type Options<'a> = [(&'a str, &'a str)];

/// Typed handle to the Spotify Web API.
///
/// Obtained from [`SpotifyApi::service`](super::SpotifyApi::service). Cheap
/// to clone; clones share the HTTP client and the access token.
///
/// # Example
///
/// ```rust,no_run
/// use spotify_webapi::SpotifyApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = SpotifyApi::new()?;
///     api.set_access_token(Some("your_access_token"));
///
///     let album = api.service().get_album("2dIGnmEIy1WZIcZCFSj6i8", &[]).await?;
///     println!("Album: {} by {}", album.name, album.artists_string(", "));
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotifyService {
    dispatcher: Arc<Dispatcher>,
    executors: Executors,
    base_url: Url,
}

impl fmt::Debug for SpotifyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyService")
            .field("base_url", &self.base_url.as_str())
            .field("interceptors", &self.dispatcher.interceptor_names())
            .field("executors", &self.executors)
            .finish()
    }
}

impl SpotifyService {
    pub(crate) fn new(dispatcher: Dispatcher, executors: Executors, base_url: Url) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            executors,
            base_url,
        }
    }

    /// Base endpoint all paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Names of the installed interceptors, in the order they run.
    pub fn interceptors(&self) -> Vec<&'static str> {
        self.dispatcher.interceptor_names()
    }

    /// Whether two handles share the same client.
    pub fn same_client(&self, other: &SpotifyService) -> bool {
        Arc::ptr_eq(&self.dispatcher, &other.dispatcher)
    }

    fn endpoint(&self, segments: &[&str], query: &Options<'_>) -> Result<Url> {
        // URL path handling would drop or resolve these, hitting another endpoint.
        if let Some(bad) = segments.iter().copied().find(|s| matches!(*s, "" | "." | "..")) {
            return Err(SpotifyError::InvalidId(bad.to_string()));
        }

        let mut url = self.base_url.clone();
        // The base URL was checked to carry paths when the client was built.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn call<T>(&self, method: Method, segments: &[&str], query: &Options<'_>) -> Call<T> {
        let spec = self.endpoint(segments, query).map(|url| RequestSpec {
            method,
            url,
            body: None,
        });
        Call::new(self.dispatcher.clone(), self.executors.clone(), spec)
    }

    fn call_with_body<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        query: &Options<'_>,
        body: &B,
    ) -> Call<T>
    where
        B: Serialize + ?Sized,
    {
        let spec = self.endpoint(segments, query).and_then(|url| {
            codec::encode(body).map(|body| RequestSpec {
                method,
                url,
                body: Some(body),
            })
        });
        Call::new(self.dispatcher.clone(), self.executors.clone(), spec)
    }

    fn get<T>(&self, segments: &[&str], query: &Options<'_>) -> Call<T> {
        self.call(Method::GET, segments, query)
    }

    // ---------------------------------------------------------------- albums

    /// Get an album. Options: `market`.
    pub fn get_album(&self, album_id: &str, options: &Options<'_>) -> Call<Album> {
        self.get(&["albums", album_id], options)
    }

    /// Get several albums. Options: `market`.
    pub fn get_albums(&self, album_ids: &[&str], options: &Options<'_>) -> Call<Albums> {
        let ids = album_ids.join(",");
        self.get(&["albums"], &with_options(&[("ids", ids.as_str())], options))
    }

    /// Get an album's tracks. Options: `market`, `limit`, `offset`.
    pub fn get_album_tracks(
        &self,
        album_id: &str,
        options: &Options<'_>,
    ) -> Call<Pager<TrackSimple>> {
        self.get(&["albums", album_id, "tracks"], options)
    }

    // --------------------------------------------------------------- artists

    /// Get an artist.
    pub fn get_artist(&self, artist_id: &str) -> Call<Artist> {
        self.get(&["artists", artist_id], &[])
    }

    /// Get several artists.
    pub fn get_artists(&self, artist_ids: &[&str]) -> Call<Artists> {
        let ids = artist_ids.join(",");
        self.get(&["artists"], &[("ids", ids.as_str())])
    }

    /// Get an artist's albums. Options: `include_groups`, `market`, `limit`, `offset`.
    pub fn get_artist_albums(
        &self,
        artist_id: &str,
        options: &Options<'_>,
    ) -> Call<Pager<AlbumSimple>> {
        self.get(&["artists", artist_id, "albums"], options)
    }

    /// Get an artist's top tracks in a country.
    pub fn get_artist_top_track(&self, artist_id: &str, country: &str) -> Call<Tracks> {
        self.get(&["artists", artist_id, "top-tracks"], &[("country", country)])
    }

    /// Get artists similar to an artist.
    pub fn get_related_artists(&self, artist_id: &str) -> Call<Artists> {
        self.get(&["artists", artist_id, "related-artists"], &[])
    }

    // ---------------------------------------------------------------- tracks

    /// Get a track. Options: `market`.
    pub fn get_track(&self, track_id: &str, options: &Options<'_>) -> Call<Track> {
        self.get(&["tracks", track_id], options)
    }

    /// Get several tracks. Options: `market`.
    pub fn get_tracks(&self, track_ids: &[&str], options: &Options<'_>) -> Call<Tracks> {
        let ids = track_ids.join(",");
        self.get(&["tracks"], &with_options(&[("ids", ids.as_str())], options))
    }

    /// Get audio features of a track.
    pub fn get_track_audio_features(&self, track_id: &str) -> Call<AudioFeaturesTrack> {
        self.get(&["audio-features", track_id], &[])
    }

    /// Get audio features of several tracks.
    pub fn get_tracks_audio_features(&self, track_ids: &[&str]) -> Call<AudioFeaturesTracks> {
        let ids = track_ids.join(",");
        self.get(&["audio-features"], &[("ids", ids.as_str())])
    }

    // ---------------------------------------------------------------- browse

    /// Get featured playlists. Options: `locale`, `country`, `timestamp`, `limit`, `offset`.
    pub fn get_featured_playlists(&self, options: &Options<'_>) -> Call<FeaturedPlaylists> {
        self.get(&["browse", "featured-playlists"], options)
    }

    /// Get new album releases. Options: `country`, `limit`, `offset`.
    pub fn get_new_releases(&self, options: &Options<'_>) -> Call<NewReleases> {
        self.get(&["browse", "new-releases"], options)
    }

    /// Get browse categories. Options: `country`, `locale`, `limit`, `offset`.
    pub fn get_categories(&self, options: &Options<'_>) -> Call<CategoriesPager> {
        self.get(&["browse", "categories"], options)
    }

    /// Get a single browse category. Options: `country`, `locale`.
    pub fn get_category(&self, category_id: &str, options: &Options<'_>) -> Call<Category> {
        self.get(&["browse", "categories", category_id], options)
    }

    /// Get playlists tagged with a category. Options: `country`, `limit`, `offset`.
    pub fn get_playlists_for_category(
        &self,
        category_id: &str,
        options: &Options<'_>,
    ) -> Call<PlaylistsPager> {
        self.get(&["browse", "categories", category_id, "playlists"], options)
    }

    /// Get recommendations from seeds and tunable attributes, e.g.
    /// `seed_artists`, `seed_tracks`, `seed_genres`, `target_energy`.
    pub fn get_recommendations(&self, options: &Options<'_>) -> Call<Recommendations> {
        self.get(&["recommendations"], options)
    }

    /// Get the genres available as recommendation seeds.
    pub fn get_seeds_genres(&self) -> Call<SeedsGenres> {
        self.get(&["recommendations", "available-genre-seeds"], &[])
    }

    // --------------------------------------------------------------- profiles

    /// Get the current user's profile.
    pub fn get_me(&self) -> Call<UserPrivate> {
        self.get(&["me"], &[])
    }

    /// Get a user's public profile.
    pub fn get_user(&self, user_id: &str) -> Call<UserPublic> {
        self.get(&["users", user_id], &[])
    }

    // -------------------------------------------------------------- playlists

    /// Get the current user's playlists. Options: `limit`, `offset`.
    pub fn get_my_playlists(&self, options: &Options<'_>) -> Call<Pager<PlaylistSimple>> {
        self.get(&["me", "playlists"], options)
    }

    /// Get a user's playlists. Options: `limit`, `offset`.
    pub fn get_playlists(
        &self,
        user_id: &str,
        options: &Options<'_>,
    ) -> Call<Pager<PlaylistSimple>> {
        self.get(&["users", user_id, "playlists"], options)
    }

    /// Get a playlist. Options: `fields`, `market`.
    pub fn get_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
        options: &Options<'_>,
    ) -> Call<Playlist> {
        self.get(&["users", user_id, "playlists", playlist_id], options)
    }

    /// Get a playlist's entries. Options: `fields`, `market`, `limit`, `offset`.
    pub fn get_playlist_tracks(
        &self,
        user_id: &str,
        playlist_id: &str,
        options: &Options<'_>,
    ) -> Call<Pager<PlaylistTrack>> {
        self.get(&["users", user_id, "playlists", playlist_id, "tracks"], options)
    }

    /// Create a playlist for a user.
    pub fn create_playlist(&self, user_id: &str, details: &PlaylistDetails) -> Call<Playlist> {
        self.call_with_body(Method::POST, &["users", user_id, "playlists"], &[], details)
    }

    /// Change a playlist's name, visibility, collaboration or description.
    pub fn change_playlist_details(
        &self,
        user_id: &str,
        playlist_id: &str,
        details: &PlaylistDetails,
    ) -> Call<()> {
        self.call_with_body(
            Method::PUT,
            &["users", user_id, "playlists", playlist_id],
            &[],
            details,
        )
    }

    /// Add tracks to a playlist.
    pub fn add_tracks_to_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
        tracks: &PlaylistTracksToAdd,
    ) -> Call<SnapshotId> {
        self.call_with_body(
            Method::POST,
            &["users", user_id, "playlists", playlist_id, "tracks"],
            &[],
            tracks,
        )
    }

    /// Remove every occurrence of the given tracks from a playlist.
    pub fn remove_tracks_from_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
        tracks: &TracksToRemove,
    ) -> Call<SnapshotId> {
        self.call_with_body(
            Method::DELETE,
            &["users", user_id, "playlists", playlist_id, "tracks"],
            &[],
            tracks,
        )
    }

    /// Remove tracks at specific positions from a playlist.
    pub fn remove_tracks_from_playlist_with_position(
        &self,
        user_id: &str,
        playlist_id: &str,
        tracks: &TracksToRemoveWithPosition,
    ) -> Call<SnapshotId> {
        self.call_with_body(
            Method::DELETE,
            &["users", user_id, "playlists", playlist_id, "tracks"],
            &[],
            tracks,
        )
    }

    /// Replace every track of a playlist.
    pub fn replace_tracks_in_playlist(
        &self,
        user_id: &str,
        playlist_id: &str,
        uris: &PlaylistUris,
    ) -> Call<()> {
        self.call_with_body(
            Method::PUT,
            &["users", user_id, "playlists", playlist_id, "tracks"],
            &[],
            uris,
        )
    }

    /// Move a range of tracks within a playlist.
    pub fn reorder_playlist_tracks(
        &self,
        user_id: &str,
        playlist_id: &str,
        reorder: &PlaylistReorder,
    ) -> Call<SnapshotId> {
        self.call_with_body(
            Method::PUT,
            &["users", user_id, "playlists", playlist_id, "tracks"],
            &[],
            reorder,
        )
    }

    // ---------------------------------------------------------------- follow

    /// Follow a playlist as the current user.
    pub fn follow_playlist(
        &self,
        owner_id: &str,
        playlist_id: &str,
        privacy: &PlaylistFollowPrivacy,
    ) -> Call<()> {
        self.call_with_body(
            Method::PUT,
            &["users", owner_id, "playlists", playlist_id, "followers"],
            &[],
            privacy,
        )
    }

    /// Unfollow a playlist as the current user.
    pub fn unfollow_playlist(&self, owner_id: &str, playlist_id: &str) -> Call<()> {
        self.call(
            Method::DELETE,
            &["users", owner_id, "playlists", playlist_id, "followers"],
            &[],
        )
    }

    /// Check whether users follow a playlist.
    pub fn are_following_playlist(
        &self,
        owner_id: &str,
        playlist_id: &str,
        user_ids: &[&str],
    ) -> Call<Vec<bool>> {
        let ids = user_ids.join(",");
        self.get(
            &["users", owner_id, "playlists", playlist_id, "followers", "contains"],
            &[("ids", ids.as_str())],
        )
    }

    /// Follow users as the current user.
    pub fn follow_users(&self, user_ids: &[&str]) -> Call<()> {
        self.following(Method::PUT, "user", user_ids)
    }

    /// Follow artists as the current user.
    pub fn follow_artists(&self, artist_ids: &[&str]) -> Call<()> {
        self.following(Method::PUT, "artist", artist_ids)
    }

    /// Unfollow users as the current user.
    pub fn unfollow_users(&self, user_ids: &[&str]) -> Call<()> {
        self.following(Method::DELETE, "user", user_ids)
    }

    /// Unfollow artists as the current user.
    pub fn unfollow_artists(&self, artist_ids: &[&str]) -> Call<()> {
        self.following(Method::DELETE, "artist", artist_ids)
    }

    /// Check whether the current user follows the given users.
    pub fn is_following_users(&self, user_ids: &[&str]) -> Call<Vec<bool>> {
        let ids = user_ids.join(",");
        self.get(
            &["me", "following", "contains"],
            &[("type", "user"), ("ids", ids.as_str())],
        )
    }

    /// Check whether the current user follows the given artists.
    pub fn is_following_artists(&self, artist_ids: &[&str]) -> Call<Vec<bool>> {
        let ids = artist_ids.join(",");
        self.get(
            &["me", "following", "contains"],
            &[("type", "artist"), ("ids", ids.as_str())],
        )
    }

    /// Get the artists the current user follows. Options: `limit`, `after`.
    pub fn get_followed_artists(&self, options: &Options<'_>) -> Call<ArtistsCursorPager> {
        self.get(&["me", "following"], &with_options(&[("type", "artist")], options))
    }

    fn following<T>(&self, method: Method, kind: &str, ids: &[&str]) -> Call<T> {
        let ids = ids.join(",");
        self.call(
            method,
            &["me", "following"],
            &[("type", kind), ("ids", ids.as_str())],
        )
    }

    // --------------------------------------------------------------- library

    /// Get the current user's saved tracks. Options: `market`, `limit`, `offset`.
    pub fn get_my_saved_tracks(&self, options: &Options<'_>) -> Call<Pager<SavedTrack>> {
        self.get(&["me", "tracks"], options)
    }

    /// Check whether tracks are saved in the current user's library.
    pub fn contains_my_saved_tracks(&self, track_ids: &[&str]) -> Call<Vec<bool>> {
        self.library(Method::GET, &["me", "tracks", "contains"], track_ids)
    }

    /// Save tracks to the current user's library.
    pub fn add_to_my_saved_tracks(&self, track_ids: &[&str]) -> Call<()> {
        self.library(Method::PUT, &["me", "tracks"], track_ids)
    }

    /// Remove tracks from the current user's library.
    pub fn remove_from_my_saved_tracks(&self, track_ids: &[&str]) -> Call<()> {
        self.library(Method::DELETE, &["me", "tracks"], track_ids)
    }

    /// Get the current user's saved albums. Options: `market`, `limit`, `offset`.
    pub fn get_my_saved_albums(&self, options: &Options<'_>) -> Call<Pager<SavedAlbum>> {
        self.get(&["me", "albums"], options)
    }

    /// Check whether albums are saved in the current user's library.
    pub fn contains_my_saved_albums(&self, album_ids: &[&str]) -> Call<Vec<bool>> {
        self.library(Method::GET, &["me", "albums", "contains"], album_ids)
    }

    /// Save albums to the current user's library.
    pub fn add_to_my_saved_albums(&self, album_ids: &[&str]) -> Call<()> {
        self.library(Method::PUT, &["me", "albums"], album_ids)
    }

    /// Remove albums from the current user's library.
    pub fn remove_from_my_saved_albums(&self, album_ids: &[&str]) -> Call<()> {
        self.library(Method::DELETE, &["me", "albums"], album_ids)
    }

    fn library<T>(&self, method: Method, segments: &[&str], ids: &[&str]) -> Call<T> {
        let ids = ids.join(",");
        self.call(method, segments, &[("ids", ids.as_str())])
    }

    // -------------------------------------------------------- personalization

    /// Get the current user's top artists. Options: `time_range`, `limit`, `offset`.
    pub fn get_top_artists(&self, options: &Options<'_>) -> Call<Pager<Artist>> {
        self.get(&["me", "top", "artists"], options)
    }

    /// Get the current user's top tracks. Options: `time_range`, `limit`, `offset`.
    pub fn get_top_tracks(&self, options: &Options<'_>) -> Call<Pager<Track>> {
        self.get(&["me", "top", "tracks"], options)
    }

    // ---------------------------------------------------------------- search

    /// Search albums. Options: `market`, `limit`, `offset`.
    pub fn search_albums(&self, q: &str, options: &Options<'_>) -> Call<AlbumsPager> {
        self.search("album", q, options)
    }

    /// Search artists. Options: `market`, `limit`, `offset`.
    pub fn search_artists(&self, q: &str, options: &Options<'_>) -> Call<ArtistsPager> {
        self.search("artist", q, options)
    }

    /// Search tracks. Options: `market`, `limit`, `offset`.
    pub fn search_tracks(&self, q: &str, options: &Options<'_>) -> Call<TracksPager> {
        self.search("track", q, options)
    }

    /// Search playlists. Options: `market`, `limit`, `offset`.
    pub fn search_playlists(&self, q: &str, options: &Options<'_>) -> Call<PlaylistsPager> {
        self.search("playlist", q, options)
    }

    fn search<T>(&self, kind: &str, q: &str, options: &Options<'_>) -> Call<T> {
        self.get(&["search"], &with_options(&[("type", kind), ("q", q)], options))
    }
}

/// Fixed parameters first, then caller options.
fn with_options<'a>(fixed: &Options<'a>, options: &Options<'a>) -> Vec<(&'a str, &'a str)> {
    fixed.iter().chain(options.iter()).copied().collect()
}
