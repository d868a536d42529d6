//! Deferred API calls and the dispatcher that performs them.

use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Request};
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tracing::debug;
use url::Url;

use super::config::Executors;
use super::interceptor::Interceptor;
use crate::codec;
use crate::error::{Result, SpotifyError};

/// Everything needed to build the HTTP request of a call.
#[derive(Debug, Clone)]
pub(crate) struct RequestSpec {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestSpec {
    fn into_request(self) -> Request {
        let mut request = Request::new(self.method, self.url);
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(body) = self.body {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(body.into());
        }
        request
    }
}

/// HTTP client plus the ordered interceptor chain.
pub(crate) struct Dispatcher {
    client: Client,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl Dispatcher {
    pub(crate) fn new(client: Client, interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
        Self {
            client,
            interceptors,
        }
    }

    pub(crate) fn interceptor_names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    /// Send the request and decode a success body into `T`.
    ///
    /// Non-success statuses come back as [`SpotifyError::Http`] with the raw
    /// body. Nothing is retried.
    pub(crate) async fn dispatch<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let request = self
            .interceptors
            .iter()
            .fold(spec.into_request(), |request, interceptor| {
                interceptor.intercept(request)
            });

        let method = request.method().clone();
        let url = request.url().clone();
        let started = Instant::now();

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                for interceptor in &self.interceptors {
                    interceptor.on_failure(&method, &url, &e);
                }
                return Err(SpotifyError::Transport(e));
            }
        };

        let status = response.status();
        for interceptor in &self.interceptors {
            interceptor.on_response(&method, &url, status, started.elapsed());
        }

        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(SpotifyError::Http {
                status: status.as_u16(),
                body: body.to_vec(),
            });
        }

        debug!("Decoding {} bytes from {}", body.len(), url);
        codec::decode(&body)
    }
}

/// A prepared API call.
///
/// Nothing is sent until the call is executed, either by awaiting it or by
/// handing it a callback with [`Call::enqueue`].
#[must_use = "calls do nothing unless executed or enqueued"]
pub struct Call<T> {
    dispatcher: Arc<Dispatcher>,
    executors: Executors,
    request: Result<RequestSpec>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Call<T> {
    pub(crate) fn new(
        dispatcher: Arc<Dispatcher>,
        executors: Executors,
        request: Result<RequestSpec>,
    ) -> Self {
        Self {
            dispatcher,
            executors,
            request,
            _marker: PhantomData,
        }
    }

    /// HTTP method of the request, if it could be prepared.
    pub fn method(&self) -> Option<&Method> {
        self.request.as_ref().ok().map(|r| &r.method)
    }

    /// Full URL of the request, if it could be prepared.
    pub fn url(&self) -> Option<&Url> {
        self.request.as_ref().ok().map(|r| &r.url)
    }
}

impl<T> Call<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Run the call on the network runtime and wait for the result.
    pub async fn execute(self) -> Result<T> {
        let request = self.request?;
        let dispatcher = self.dispatcher;
        let task = self
            .executors
            .io
            .spawn(async move { dispatcher.dispatch::<T>(request).await });

        match task.await {
            Ok(result) => result,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(_) => Err(SpotifyError::Cancelled),
        }
    }

    /// Run the call on the network runtime and hand the result to
    /// `callback` on the callback runtime.
    ///
    /// Returns immediately. The returned [`PendingCall`] can abandon the
    /// call; dropping it lets the call finish in the background.
    pub fn enqueue<F>(self, callback: F) -> PendingCall
    where
        F: FnOnce(Result<T>) + Send + 'static,
    {
        let dispatcher = self.dispatcher;
        let callbacks = self.executors.callbacks.clone();
        let request = self.request;

        let task = self.executors.io.spawn(async move {
            let result = match request {
                Ok(request) => dispatcher.dispatch::<T>(request).await,
                Err(e) => Err(e),
            };
            callbacks.spawn(async move { callback(result) });
        });

        PendingCall { task }
    }
}

impl<T> IntoFuture for Call<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = Result<T>;
    type IntoFuture = Pin<Box<dyn Future<Output = Result<T>> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

/// Handle to a call started with [`Call::enqueue`].
#[derive(Debug)]
pub struct PendingCall {
    task: JoinHandle<()>,
}

impl PendingCall {
    /// Abandon the call without waiting. The callback is not invoked if the
    /// response has not been delivered yet.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the call has completed or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    fn dispatcher() -> Arc<Dispatcher> {
        Arc::new(Dispatcher::new(Client::new(), Vec::new()))
    }

    #[test]
    fn test_request_headers() {
        let spec = RequestSpec {
            method: Method::PUT,
            url: "https://api.spotify.com/v1/me/tracks".parse().unwrap(),
            body: Some(b"{\"ids\":[]}".to_vec()),
        };
        let request = spec.into_request();
        assert_eq!(request.headers().get(ACCEPT).unwrap(), "application/json");
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(request.body().is_some());

        let spec = RequestSpec {
            method: Method::GET,
            url: "https://api.spotify.com/v1/me".parse().unwrap(),
            body: None,
        };
        let request = spec.into_request();
        assert!(request.headers().get(CONTENT_TYPE).is_none());
        assert!(request.body().is_none());
    }

    #[tokio::test]
    async fn test_unprepared_call_fails_without_sending() {
        let call: Call<()> = Call::new(
            dispatcher(),
            Executors::current(),
            Err(SpotifyError::Config("bad body".to_string())),
        );
        assert!(call.url().is_none());
        assert!(call.method().is_none());
        assert!(matches!(call.await, Err(SpotifyError::Config(_))));
    }

    #[tokio::test]
    async fn test_unprepared_call_reports_through_callback() {
        let call: Call<()> = Call::new(
            dispatcher(),
            Executors::current(),
            Err(SpotifyError::Config("bad body".to_string())),
        );
        let (tx, rx) = oneshot::channel();
        call.enqueue(move |result| {
            let _ = tx.send(result);
        });
        assert!(matches!(rx.await.unwrap(), Err(SpotifyError::Config(_))));
    }
}
