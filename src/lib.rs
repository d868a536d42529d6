//! # Spotify Web API
//!
//! A Rust client for the Spotify Web API.
//!
//! ## Quick Start
//!
//! Create a [`SpotifyApi`], give it an access token and call endpoints
//! through its [`SpotifyService`]:
//!
//! ```rust,no_run
//! use spotify_webapi::SpotifyApi;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = SpotifyApi::new()?;
//!     api.set_access_token(Some("your_access_token"));
//!
//!     // Fetch an album
//!     let album = api.service().get_album("4Mewe6A62ZpJKmVzcaOixy", &[]).await?;
//!     println!("{} by {}", album.name, album.artists_string(", "));
//!
//!     // Search with options
//!     let found = api
//!         .service()
//!         .search_tracks("Karma Police", &[("limit", "5")])
//!         .await?;
//!     for track in &found.tracks.items {
//!         println!("{} ({})", track.name, track.duration_formatted());
//!     }
//!
//!     // Or receive the result in a callback
//!     api.service().get_me().enqueue(|result| match result {
//!         Ok(me) => println!("Logged in as {}", me.id),
//!         Err(e) => eprintln!("Failed: {}", e),
//!     });
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed endpoints** for albums, artists, tracks, playlists, browse,
//!   library, follow, personalization and search
//! - **Replaceable token**: updates apply to every later request
//! - **Tolerant models**: unknown fields, unknown enum values and `null`s
//!   never break decoding
//! - **Raw error bodies**: non-success responses keep status and body as sent
//!
//! Authorization flows are out of scope; obtain a token elsewhere.

pub mod api;
pub mod codec;
pub mod error;
pub mod models;

pub use api::{ApiConfig, Call, Executors, PendingCall, SpotifyApi, SpotifyService};
pub use error::{Result, SpotifyError};
