//! HTTP transport seam
//!
//! The client builds fully-formed requests and hands them to a [`Transport`].
//! [`HttpTransport`] sends them with `reqwest`; tests swap in a scripted
//! transport so no network is needed.

use crate::config::ClientConfig;
use crate::error::ApiResult;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method};
use std::future::Future;

/// User agent sent with every request
const CLIENT_USER_AGENT: &str = concat!("shipx-api-client/", env!("CARGO_PKG_VERSION"));

/// Outgoing request, headers included
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Serialized JSON body, if any
    pub body: Option<Vec<u8>>,
}

/// Raw response as received from the carrier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Response with a status and body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body as text, replacing invalid UTF-8
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends requests to the carrier
///
/// Implementations report connection-level failures as
/// [`ApiError::Transport`](crate::error::ApiError::Transport) and return every
/// received response as-is, whatever its status.
pub trait Transport: Send + Sync {
    /// Send a request and wait for the response
    fn send(&self, request: HttpRequest) -> impl Future<Output = ApiResult<HttpResponse>> + Send;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Client,
}

impl HttpTransport {
    /// Build a transport honouring the configured timeout
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()?;

        Ok(Self { inner })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = self
            .inner
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
