//! Authentication headers for management API requests.
//!
//! The management API accepts HTTP basic credentials or an OAuth2 bearer
//! token. Acquiring and refreshing tokens is out of scope for this crate;
//! plug a token source in through [`CallbackAuthProvider`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::HttpClientError;

/// Generates authentication headers for management API requests.
///
/// Called once per request, so implementations may rotate credentials.
pub trait AuthProvider: Send + Sync {
    /// Returns the headers to add to the next request.
    fn auth_headers(&self) -> HeaderMap;
}

/// [`AuthProvider`] that sends the same headers with every request.
#[derive(Clone)]
pub struct StaticAuthProvider {
    headers: HeaderMap,
}

impl std::fmt::Debug for StaticAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticAuthProvider")
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl StaticAuthProvider {
    /// Creates a provider from a prepared header map.
    #[must_use]
    pub const fn new(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Creates a provider sending `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidHeader`] if `token` contains
    /// characters not allowed in a header value.
    pub fn bearer(token: &str) -> Result<Self, HttpClientError> {
        Self::authorization(&format!("Bearer {token}"))
    }

    /// Creates a provider sending HTTP basic credentials.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidHeader`] if the encoded value is not
    /// a valid header value.
    pub fn basic(username: &str, password: &str) -> Result<Self, HttpClientError> {
        let encoded = STANDARD.encode(format!("{username}:{password}"));
        Self::authorization(&format!("Basic {encoded}"))
    }

    fn authorization(value: &str) -> Result<Self, HttpClientError> {
        let mut value =
            HeaderValue::from_str(value).map_err(|source| HttpClientError::InvalidHeader {
                name: "authorization",
                source,
            })?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(Self { headers })
    }
}

impl AuthProvider for StaticAuthProvider {
    fn auth_headers(&self) -> HeaderMap {
        self.headers.clone()
    }
}

/// [`AuthProvider`] backed by a callback, e.g. an OAuth2 token cache.
pub struct CallbackAuthProvider<F> {
    create_headers: F,
}

impl<F> std::fmt::Debug for CallbackAuthProvider<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackAuthProvider")
            .finish_non_exhaustive()
    }
}

impl<F> CallbackAuthProvider<F>
where
    F: Fn() -> HeaderMap + Send + Sync,
{
    /// Creates a new provider from a callback returning the headers.
    pub const fn new(create_headers: F) -> Self {
        Self { create_headers }
    }
}

impl<F> AuthProvider for CallbackAuthProvider<F>
where
    F: Fn() -> HeaderMap + Send + Sync,
{
    fn auth_headers(&self) -> HeaderMap {
        (self.create_headers)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_encodes_credentials() {
        let provider = StaticAuthProvider::basic("admin@example.com", "s3cret").unwrap();
        let headers = provider.auth_headers();
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), "Basic YWRtaW5AZXhhbXBsZS5jb206czNjcmV0");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_bearer_rejects_invalid_token() {
        assert!(StaticAuthProvider::bearer("abc").is_ok());
        assert!(matches!(
            StaticAuthProvider::bearer("line\nbreak"),
            Err(HttpClientError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_callback_provider_is_called_per_request() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let provider = CallbackAuthProvider::new(|| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            let mut headers = HeaderMap::new();
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer token-{n}")).unwrap(),
            );
            headers
        });
        assert_eq!(provider.auth_headers()[AUTHORIZATION], "Bearer token-0");
        assert_eq!(provider.auth_headers()[AUTHORIZATION], "Bearer token-1");
    }
}
