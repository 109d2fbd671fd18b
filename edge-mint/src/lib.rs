#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Accepted rate plan controllers for the Apigee Edge monetization API.
//!
//! Monetization lets API providers publish rate plans for their API products.
//! Developers and companies subscribe to a rate plan by *accepting* it; the
//! resulting subscription is an [`AcceptedRatePlan`](proto::AcceptedRatePlan).
//!
//! This crate provides [`AcceptedRatePlanController`](controller::AcceptedRatePlanController),
//! which lists the rate plans a party is eligible for, accepts rate plans and
//! updates existing subscriptions. The controller is transport-agnostic: it
//! talks to the API through the [`ApiClient`](client::ApiClient) trait, which
//! `edge-mint-http` implements on top of `reqwest`.
//!
//! # Modules
//!
//! - [`client`] - Transport seam (`ApiClient`, `ApiRequest`, `ApiResponse`)
//! - [`controller`] - Accepted rate plan operations
//! - [`error`] - Transport and controller error types
//! - [`scope`] - Developer and company variants of the controller
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod client;
pub mod controller;
pub mod error;
pub mod scope;

pub use edge_mint_proto as proto;

pub use client::{ApiClient, ApiRequest, ApiResponse, BoxFuture};
pub use controller::{AcceptOptions, AcceptedRatePlanController};
pub use error::{ApiRequestError, ControllerError};
pub use scope::{AcceptedRatePlanScope, CompanyScope, DeveloperScope};
