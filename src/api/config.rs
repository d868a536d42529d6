//! Client configuration and execution contexts.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::{Builder, Handle, Runtime};
use url::Url;

use crate::error::{Result, SpotifyError};

/// Main Spotify Web API endpoint.
pub const SPOTIFY_WEB_API_ENDPOINT: &str = "https://api.spotify.com/v1/";

/// Default connect, read and write timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_USER_AGENT: &str = concat!("spotify-webapi/", env!("CARGO_PKG_VERSION"));

/// Settings applied when the HTTP client is built.
///
/// They are fixed for the lifetime of a [`SpotifyApi`](super::SpotifyApi);
/// build a new one to change them.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base endpoint every path is resolved against.
    pub base_url: String,

    /// Time allowed to establish a connection.
    pub connect_timeout: Duration,

    /// Time allowed between reads of the response.
    pub read_timeout: Duration,

    /// Time allowed to send the request.
    pub write_timeout: Duration,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: SPOTIFY_WEB_API_ENDPOINT.to_string(),
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
            write_timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Use a different base endpoint, e.g. a mock server.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the connect, read and write timeouts to the same value.
    pub fn with_timeouts(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self.read_timeout = timeout;
        self.write_timeout = timeout;
        self
    }

    /// Overall deadline for a single request.
    ///
    /// reqwest has no separate write timeout, so the write budget is folded
    /// into a whole-request deadline.
    pub fn request_deadline(&self) -> Duration {
        self.connect_timeout + self.read_timeout + self.write_timeout
    }

    pub(crate) fn parse_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(SpotifyError::Config(format!(
                "Base URL cannot carry paths: {}",
                self.base_url
            )));
        }
        Ok(url)
    }
}

/// The pair of execution contexts a client runs on.
///
/// Network I/O runs on `io`; callbacks of [`Call::enqueue`](super::Call::enqueue)
/// run on `callbacks`.
#[derive(Clone)]
pub struct Executors {
    pub(crate) io: Handle,
    pub(crate) callbacks: Handle,
    _owned: Option<Arc<OwnedRuntimes>>,
}

impl Executors {
    /// Use caller-provided runtimes.
    pub fn new(io: Handle, callbacks: Handle) -> Self {
        Self {
            io,
            callbacks,
            _owned: None,
        }
    }

    /// Run everything on the runtime of the calling task.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn current() -> Self {
        let handle = Handle::current();
        Self::new(handle.clone(), handle)
    }

    /// Create dedicated runtimes: a single worker for network I/O and a
    /// pool of one more worker than there are CPUs for callbacks.
    pub fn dedicated() -> Result<Self> {
        let io = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("spotify-http")
            .enable_all()
            .build()
            .map_err(|e| SpotifyError::Config(format!("Failed to create HTTP runtime: {}", e)))?;

        let callbacks = Builder::new_multi_thread()
            .worker_threads(callback_pool_size())
            .thread_name("spotify-callback")
            .enable_all()
            .build()
            .map_err(|e| {
                SpotifyError::Config(format!("Failed to create callback runtime: {}", e))
            })?;

        Ok(Self {
            io: io.handle().clone(),
            callbacks: callbacks.handle().clone(),
            _owned: Some(Arc::new(OwnedRuntimes {
                io: Some(io),
                callbacks: Some(callbacks),
            })),
        })
    }

    /// Whether the runtimes are owned by this client.
    pub fn is_dedicated(&self) -> bool {
        self._owned.is_some()
    }
}

impl fmt::Debug for Executors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executors")
            .field("dedicated", &self.is_dedicated())
            .finish()
    }
}

fn callback_pool_size() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        + 1
}

/// Runtimes created by [`Executors::dedicated`].
///
/// Shut down without blocking, so the last handle may be dropped from
/// inside an async context.
struct OwnedRuntimes {
    io: Option<Runtime>,
    callbacks: Option<Runtime>,
}

impl Drop for OwnedRuntimes {
    fn drop(&mut self) {
        if let Some(rt) = self.io.take() {
            rt.shutdown_background();
        }
        if let Some(rt) = self.callbacks.take() {
            rt.shutdown_background();
        }
    }
}
