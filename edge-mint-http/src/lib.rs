//! HTTP transport for the Apigee Edge monetization SDK.
//!
//! Provides [`HttpApiClient`](client::HttpApiClient), a `reqwest`-backed
//! implementation of [`edge_mint::ApiClient`], together with its
//! configuration and authentication helpers.
//!
//! # Modules
//!
//! - [`auth`] - Authentication header providers (basic, bearer, callback)
//! - [`client`] - `HttpApiClient` and `HttpClientConfig`
//! - [`constants`] - Default URLs, timeouts and header values
//! - [`error`] - Client construction errors

pub mod auth;
pub mod client;
pub mod constants;
pub mod error;

pub use auth::{AuthProvider, CallbackAuthProvider, StaticAuthProvider};
pub use client::{HttpApiClient, HttpClientConfig};
pub use error::HttpClientError;
