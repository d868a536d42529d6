//! Spotify Web API client.
//!
//! - [`SpotifyApi`]: factory owning the access token and the HTTP stack
//! - [`SpotifyService`]: one method per REST endpoint
//! - [`Call`]: a prepared request, awaited or enqueued with a callback
//!
//! Every request passes through the interceptors in order: first
//! [`WebApiAuthenticator`], then [`HttpLoggingInterceptor`].

mod auth;
mod call;
mod client;
mod config;
mod interceptor;
mod service;

pub use auth::{AccessToken, WebApiAuthenticator};
pub use call::{Call, PendingCall};
pub use client::SpotifyApi;
pub use config::{ApiConfig, Executors, DEFAULT_TIMEOUT, SPOTIFY_WEB_API_ENDPOINT};
pub use interceptor::{HttpLoggingInterceptor, Interceptor};
pub use service::{Options, SpotifyService};
