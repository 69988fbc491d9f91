//! HTTP transport used to reach the gateway.
//!
//! The client never talks to the network directly. It hands an [`HttpRequest`]
//! to an [`HttpTransport`] and interprets the [`HttpResponse`] it gets back.
//! [`ReqwestTransport`] is the default implementation; tests and host
//! applications can supply their own.

use std::future::Future;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::error::AuthorizeNetError;

/// An outbound HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL of the gateway endpoint
    pub url: String,
    /// HTTP method
    pub method: Method,
    /// Request headers in insertion order
    pub headers: Vec<(String, String)>,
    /// Request body
    pub body: String,
}

/// The status code and raw body of a gateway response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

/// Performs a single HTTP exchange.
///
/// Implementations must return non-2xx responses as `Ok`: interpreting the
/// status code is the client's job. Only failures that prevent a response
/// from being received (connection errors, timeouts) should be `Err`.
pub trait HttpTransport: Send + Sync {
    /// Send the request and return the response status and body.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, AuthorizeNetError>> + Send;
}

/// Default transport backed by `reqwest` with tracing middleware.
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: ClientWithMiddleware,
}

impl ReqwestTransport {
    /// Create a transport with the default user agent and no timeout.
    pub fn new() -> Self {
        Self::with_options(None, None)
    }

    /// Create a transport with a custom user agent and/or request timeout.
    pub fn with_options(user_agent: Option<&str>, timeout: Option<Duration>) -> Self {
        let mut headers = HeaderMap::new();
        let user_agent = user_agent
            .map(str::to_owned)
            .unwrap_or_else(|| format!("authorizenet-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("authorizenet-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Self::from_client(client)
    }

    /// Wrap an already configured middleware client.
    pub fn from_client(http_client: ClientWithMiddleware) -> Self {
        Self { http_client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AuthorizeNetError> {
        let mut builder = self.http_client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(request.body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
