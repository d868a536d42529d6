//! Bearer token handling.
//!
//! [`AccessToken`] is the shared credential cell; [`WebApiAuthenticator`]
//! reads it for every outgoing request.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;
use tracing::warn;

use super::interceptor::Interceptor;

/// Shared, replaceable access token.
///
/// Clones share the same cell. Updates replace the whole value, so a reader
/// sees either the previous token or the new one.
#[derive(Clone, Default)]
pub struct AccessToken {
    inner: Arc<RwLock<Option<Arc<str>>>>,
}

impl AccessToken {
    /// Create an empty token cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the token; `None` clears it.
    pub fn set(&self, token: Option<String>) {
        let token = token.map(Arc::from);
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Current token, if one is set.
    pub fn get(&self) -> Option<Arc<str>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a non-empty token is set.
    pub fn is_set(&self) -> bool {
        self.get().is_some_and(|t| !t.is_empty())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("set", &self.is_set())
            .finish()
    }
}

/// Adds `Authorization: Bearer <token>` to every request while a
/// non-empty token is set.
///
/// The token is read when the request is dispatched, not when the client
/// is built.
#[derive(Debug, Clone)]
pub struct WebApiAuthenticator {
    token: AccessToken,
}

impl WebApiAuthenticator {
    pub fn new(token: AccessToken) -> Self {
        Self { token }
    }
}

impl Interceptor for WebApiAuthenticator {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn intercept(&self, mut request: Request) -> Request {
        let Some(token) = self.token.get().filter(|t| !t.is_empty()) else {
            return request;
        };

        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(_) => warn!(
                "Access token is not a valid header value, sending {} {} without it",
                request.method(),
                request.url()
            ),
        }

        request
    }
}
