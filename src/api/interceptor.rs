//! Request-processing steps applied before dispatch.
//!
//! The client applies its interceptors in order to every outgoing request.
//! Each one receives the request as built so far and returns the request to
//! hand to the next step.

use std::time::Duration;

use reqwest::{Method, Request, StatusCode};
use tracing::{info, warn};
use url::Url;

/// A step of the request pipeline.
pub trait Interceptor: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Transform the outgoing request.
    fn intercept(&self, request: Request) -> Request;

    /// Called once the response status is known.
    fn on_response(&self, _method: &Method, _url: &Url, _status: StatusCode, _elapsed: Duration) {}

    /// Called when the request produced no response.
    fn on_failure(&self, _method: &Method, _url: &Url, _error: &reqwest::Error) {}
}

/// Logs method, URL, status and timing of every call.
///
/// Headers and bodies are never logged, so the access token stays out of
/// the logs.
#[derive(Debug, Clone, Default)]
pub struct HttpLoggingInterceptor;

impl Interceptor for HttpLoggingInterceptor {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn intercept(&self, request: Request) -> Request {
        info!("--> {} {}", request.method(), request.url());
        request
    }

    fn on_response(&self, method: &Method, url: &Url, status: StatusCode, elapsed: Duration) {
        info!("<-- {} {} {} ({}ms)", status, method, url, elapsed.as_millis());
    }

    fn on_failure(&self, method: &Method, url: &Url, error: &reqwest::Error) {
        warn!("<-- HTTP FAILED {} {}: {}", method, url, error);
    }
}
