//! Data models for Spotify Web API responses and request bodies.
//!
//! Models are plain serde records mirroring the upstream JSON. Decoding is
//! tolerant: fields the models do not know are skipped, and enum fields map
//! values they do not know to an `Unknown` variant.

pub mod album;
pub mod artist;
pub mod audio_features;
pub mod browse;
pub mod common;
mod nullable;
pub mod paging;
pub mod playlist;
pub mod track;
pub mod user;

// Re-exports for convenience
pub use album::{Album, AlbumSimple, Albums, NewReleases, SavedAlbum};
pub use artist::{Artist, ArtistSimple, Artists};
pub use audio_features::{AudioFeaturesTrack, AudioFeaturesTracks};
pub use browse::{Category, Recommendations, Seed, SeedsGenres};
pub use common::{
    AlbumGroup, AlbumType, Copyright, ErrorDetails, ErrorResponse, ExternalIds, ExternalUrls,
    Followers, Image, ObjectType, Product, ReleaseDate, ReleaseDatePrecision, Restrictions,
    SeedType, SnapshotId,
};
pub use paging::{
    AlbumsPager, ArtistsCursorPager, ArtistsPager, CategoriesPager, Cursor, CursorPager, Pager,
    PlaylistsPager, TracksPager,
};
pub use playlist::{
    FeaturedPlaylists, Playlist, PlaylistDetails, PlaylistFollowPrivacy, PlaylistReorder,
    PlaylistSimple, PlaylistTrack, PlaylistTracksInformation, PlaylistTracksToAdd, PlaylistUris,
};
pub use track::{
    LinkedTrack, SavedTrack, Track, TrackSimple, TrackToRemove, TrackToRemoveWithPosition, Tracks,
    TracksToRemove, TracksToRemoveWithPosition,
};
pub use user::{UserPrivate, UserPublic};
