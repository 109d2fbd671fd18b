//! Transport seam between the controllers and the management API.
//!
//! Controllers build [`ApiRequest`]s with paths relative to the management
//! API base URL and hand them to an [`ApiClient`]. The client is responsible
//! for resolving the URL, authenticating, and performing the exchange; it
//! returns the raw [`ApiResponse`] whatever its status. Status handling and
//! body decoding stay in the controller.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use http::{Method, StatusCode};

use crate::error::ApiRequestError;

/// A boxed, `Send` future, as returned by [`ApiClient::send`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A request against the management API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the API base URL, without a leading slash
    /// (e.g. `mint/organizations/acme/developers/dev%40example.com/developer-rateplans`).
    pub path: String,
    /// Query string parameters, in order.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Vec<u8>>,
    /// Human-readable label used in tracing and error messages
    /// (e.g. `"POST developer-rateplans"`).
    pub context: &'static str,
}

impl ApiRequest {
    /// Creates a `GET` request.
    #[must_use]
    pub fn get(path: impl Into<String>, context: &'static str) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
            context,
        }
    }

    /// Creates a `POST` request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: Vec<u8>, context: &'static str) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
            context,
        }
    }

    /// Creates a `PUT` request with a JSON body.
    #[must_use]
    pub fn put(path: impl Into<String>, body: Vec<u8>, context: &'static str) -> Self {
        Self {
            method: Method::PUT,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
            context,
        }
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}

/// A raw response from the management API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Performs requests against the management API.
///
/// Implementations must return `Ok` for any response received from the
/// server, including non-2xx ones, and reserve `Err` for failures to obtain
/// a response at all (connection errors, timeouts, invalid URLs).
pub trait ApiClient: Send + Sync {
    /// Sends `request` and returns the raw response.
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<ApiResponse, ApiRequestError>>;
}

impl<T: ApiClient + ?Sized> ApiClient for &T {
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<ApiResponse, ApiRequestError>> {
        (**self).send(request)
    }
}

impl<T: ApiClient + ?Sized> ApiClient for Box<T> {
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<ApiResponse, ApiRequestError>> {
        (**self).send(request)
    }
}

impl<T: ApiClient + ?Sized> ApiClient for Arc<T> {
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<ApiResponse, ApiRequestError>> {
        (**self).send(request)
    }
}
