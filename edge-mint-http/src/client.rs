//! A [`edge_mint::ApiClient`] implementation talking to the management API
//! over HTTP.
//!
//! ## Features
//!
//! - Uses `reqwest` for async HTTP requests
//! - Resolves controller paths against a configurable base URL
//! - Pluggable authentication through [`AuthProvider`]
//! - Integrates with `tracing` if the `telemetry` feature is enabled
//!
//! Responses are returned whatever their status; turning non-2xx answers
//! into errors is left to the controllers.

use std::time::Duration;

use edge_mint::{ApiClient, ApiRequest, ApiRequestError, ApiResponse, BoxFuture};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

#[cfg(feature = "telemetry")]
use tracing::Instrument;

use crate::auth::AuthProvider;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, JSON_CONTENT_TYPE};
use crate::error::HttpClientError;

/// Configuration for [`HttpApiClient`].
pub struct HttpClientConfig {
    /// Management API base URL.
    pub base_url: String,

    /// Timeout applied to every request.
    pub timeout: Duration,

    /// Optional authentication provider.
    pub auth_provider: Option<Box<dyn AuthProvider>>,

    /// Optional pre-configured reqwest client. If `None`, a new client is
    /// created with the configured timeout and user agent.
    pub http_client: Option<reqwest::Client>,

    /// `User-Agent` header; defaults to `edge-mint/<version>`.
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            auth_provider: None,
            http_client: None,
            user_agent: None,
        }
    }
}

impl HttpClientConfig {
    /// Creates a config with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the authentication provider.
    #[must_use]
    pub fn with_auth(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth_provider = Some(Box::new(provider));
        self
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl std::fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_auth_provider", &self.auth_provider.is_some())
            .field("has_http_client", &self.http_client.is_some())
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Async HTTP client for the management API.
///
/// # Example
///
/// ```no_run
/// use edge_mint_http::{HttpApiClient, HttpClientConfig, StaticAuthProvider};
///
/// # fn main() -> Result<(), edge_mint_http::HttpClientError> {
/// let client = HttpApiClient::new(
///     HttpClientConfig::default().with_auth(StaticAuthProvider::basic("me@example.com", "secret")?),
/// )?;
/// # Ok(())
/// # }
/// ```
pub struct HttpApiClient {
    base_url: Url,
    timeout: Duration,
    auth_provider: Option<Box<dyn AuthProvider>>,
    client: reqwest::Client,
}

impl HttpApiClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError`] if the base URL is invalid or the
    /// underlying reqwest client cannot be built.
    pub fn new(config: HttpClientConfig) -> Result<Self, HttpClientError> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = match config.http_client {
            Some(client) => client,
            None => {
                let user_agent = config
                    .user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());
                reqwest::Client::builder()
                    .timeout(config.timeout)
                    .user_agent(user_agent)
                    .build()?
            }
        };

        Ok(Self {
            base_url,
            timeout: config.timeout,
            auth_provider: config.auth_provider,
            client,
        })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves a controller path and query against the base URL.
    fn resolve(&self, request: &ApiRequest) -> Result<Url, ApiRequestError> {
        let mut url = self
            .base_url
            .join(request.path.trim_start_matches('/'))
            .map_err(|e| ApiRequestError::transport(request.context, e))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }

    /// Builds the headers sent with every request.
    fn headers(&self, with_body: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        if with_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }
        if let Some(auth) = &self.auth_provider {
            headers.extend(auth.auth_headers());
        }
        headers
    }

    async fn send_inner(&self, request: ApiRequest) -> Result<ApiResponse, ApiRequestError> {
        let context = request.context;
        let url = self.resolve(&request)?;
        let headers = self.headers(request.body.is_some());

        let mut req = self
            .client
            .request(request.method, url)
            .headers(headers)
            .timeout(self.timeout);
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| ApiRequestError::transport(context, e))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiRequestError::transport(context, e))?;

        #[cfg(feature = "telemetry")]
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

impl ApiClient for HttpApiClient {
    #[cfg(feature = "telemetry")]
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<ApiResponse, ApiRequestError>> {
        let span = tracing::debug_span!(
            "edge_mint.http.send",
            method = %request.method,
            path = %request.path,
        );
        Box::pin(self.send_inner(request).instrument(span))
    }

    #[cfg(not(feature = "telemetry"))]
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<ApiResponse, ApiRequestError>> {
        Box::pin(self.send_inner(request))
    }
}

impl std::fmt::Debug for HttpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("has_auth_provider", &self.auth_provider.is_some())
            .finish_non_exhaustive()
    }
}

/// Parses `base_url` and guarantees exactly one trailing slash so relative
/// paths are appended rather than replacing the last segment.
fn normalize_base_url(base_url: &str) -> Result<Url, HttpClientError> {
    let mut normalized = base_url.trim_end_matches('/').to_owned();
    normalized.push('/');
    Url::parse(&normalized).map_err(|source| HttpClientError::InvalidBaseUrl {
        url: base_url.to_owned(),
        source,
    })
}
