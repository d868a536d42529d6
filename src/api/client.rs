//! Client factory.

use std::sync::Arc;

use reqwest::Client;
use tokio::runtime::Handle;
use tracing::debug;

use super::auth::{AccessToken, WebApiAuthenticator};
use super::call::Dispatcher;
use super::config::{ApiConfig, Executors};
use super::interceptor::{HttpLoggingInterceptor, Interceptor};
use super::service::SpotifyService;
use crate::error::{Result, SpotifyError};

/// Entry point of the library.
///
/// Owns the access token and one configured [`SpotifyService`]. The token
/// can be replaced at any time; requests dispatched afterwards use the new
/// value.
///
/// # Example
///
/// ```rust,no_run
/// use spotify_webapi::SpotifyApi;
///
/// # fn main() -> Result<(), spotify_webapi::SpotifyError> {
/// let api = SpotifyApi::new()?;
/// api.set_access_token(Some("your_access_token"));
/// let service = api.service();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SpotifyApi {
    token: AccessToken,
    service: SpotifyService,
}

impl SpotifyApi {
    /// Create a client with default settings and its own runtimes.
    pub fn new() -> Result<Self> {
        Self::with_config(ApiConfig::default(), Executors::dedicated()?)
    }

    /// Create a client running network I/O on `io` and callbacks on
    /// `callbacks`.
    pub fn with_executors(io: Handle, callbacks: Handle) -> Result<Self> {
        Self::with_config(ApiConfig::default(), Executors::new(io, callbacks))
    }

    /// Create a client from explicit settings.
    pub fn with_config(config: ApiConfig, executors: Executors) -> Result<Self> {
        let base_url = config.parse_base_url()?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.request_deadline())
            .build()
            .map_err(|e| SpotifyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let token = AccessToken::new();
        let interceptors: Vec<Arc<dyn Interceptor>> = vec![
            Arc::new(WebApiAuthenticator::new(token.clone())),
            Arc::new(HttpLoggingInterceptor),
        ];

        debug!("Creating Spotify client for {}", base_url);

        let dispatcher = Dispatcher::new(client, interceptors);
        Ok(Self {
            token,
            service: SpotifyService::new(dispatcher, executors, base_url),
        })
    }

    /// Replace the access token; `None` clears it.
    pub fn set_access_token<S: Into<String>>(&self, token: Option<S>) -> &Self {
        self.token.set(token.map(Into::into));
        self
    }

    /// Remove the access token. Later requests are sent unauthenticated.
    pub fn clear_access_token(&self) -> &Self {
        self.token.set(None);
        self
    }

    /// The shared token cell read by every request.
    pub fn access_token(&self) -> &AccessToken {
        &self.token
    }

    /// The endpoint bindings. Every call returns the same handle.
    pub fn service(&self) -> &SpotifyService {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_dedicated_runtimes() {
        let api = SpotifyApi::new().unwrap();
        assert_eq!(api.service().base_url().as_str(), "https://api.spotify.com/v1/");
        assert!(!api.access_token().is_set());
    }

    #[tokio::test]
    async fn test_service_is_the_same_instance() {
        let api = SpotifyApi::with_config(ApiConfig::default(), Executors::current()).unwrap();
        assert!(std::ptr::eq(api.service(), api.service()));
        assert!(api.service().same_client(&api.service().clone()));
    }

    #[tokio::test]
    async fn test_interceptor_order() {
        let api = SpotifyApi::with_executors(Handle::current(), Handle::current()).unwrap();
        assert_eq!(api.service().interceptors(), vec!["auth", "logging"]);
    }

    #[tokio::test]
    async fn test_token_updates() {
        let api = SpotifyApi::with_config(ApiConfig::default(), Executors::current()).unwrap();

        api.set_access_token(Some("abc123"));
        assert_eq!(api.access_token().get().as_deref(), Some("abc123"));

        api.set_access_token(Some(String::from("def456")));
        assert_eq!(api.access_token().get().as_deref(), Some("def456"));

        api.clear_access_token();
        assert!(api.access_token().get().is_none());

        api.set_access_token(Some("xyz")).set_access_token(None::<String>);
        assert!(!api.access_token().is_set());
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_rejected() {
        let config = ApiConfig::default().with_base_url("::nope::");
        let err = SpotifyApi::with_config(config, Executors::current()).unwrap_err();
        assert!(matches!(err, SpotifyError::InvalidUrl(_)));
    }
}
