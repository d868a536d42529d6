//! Error types for the Spotify Web API client.

use std::borrow::Cow;

use thiserror::Error;

use crate::models::{ErrorDetails, ErrorResponse};

/// Main error type for all Spotify Web API operations.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    ///
    /// `body` holds the response bytes exactly as received; use
    /// [`SpotifyError::body_text`] for a printable form.
    #[error("HTTP {status}: {}", String::from_utf8_lossy(.body))]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// The success body could not be decoded into the requested model.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base endpoint is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A path argument would not address a single resource, e.g. an empty
    /// ID or `..`.
    #[error("Invalid ID: {0:?}")]
    InvalidId(String),

    /// The HTTP client or an execution context could not be built.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The call was aborted before it completed.
    #[error("Call cancelled")]
    Cancelled,
}

impl SpotifyError {
    /// HTTP status of the failed call, if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SpotifyError::Http { status, .. } => Some(*status),
            SpotifyError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the API rejected the access token.
    ///
    /// Nothing is refreshed automatically; the caller has to set a new token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Body of an HTTP error as text. Invalid UTF-8 sequences are replaced,
    /// the stored body is not.
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        match self {
            SpotifyError::Http { body, .. } => Some(String::from_utf8_lossy(body)),
            _ => None,
        }
    }

    /// Parse the Spotify error envelope out of an HTTP error body.
    ///
    /// Returns `None` for other error kinds or when the body is not the
    /// standard `{"error": {...}}` object.
    pub fn error_details(&self) -> Option<ErrorDetails> {
        match self {
            SpotifyError::Http { body, .. } => serde_json::from_slice::<ErrorResponse>(body)
                .ok()
                .map(|r| r.error),
            _ => None,
        }
    }
}

/// Result type alias for Spotify Web API operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;
