//! Wire format types for the Apigee Edge monetization ("mint") API.
//!
//! This crate defines the serialization-level data structures exchanged with
//! the monetization endpoints that manage accepted rate plans. It has
//! minimal dependencies and is shared by the controller (`edge-mint`) and the
//! HTTP transport (`edge-mint-http`).
//!
//! # Modules
//!
//! - [`entities`] - Entities returned by the API (`RatePlan`, `AcceptedRatePlan`)
//! - [`payload`] - Typed request bodies and the string-encoded request flags
//! - [`dates`] - Date and timestamp encodings used by the monetization API
//! - [`helpers`] - Raw list unwrapping, keying by identifier, error bodies

pub mod dates;
pub mod entities;
pub mod helpers;
pub mod payload;

pub use entities::{AcceptedRatePlan, EntityRef, PartyRef, RatePlan};
pub use payload::{AcceptedRatePlanPayload, FlagValue, PayloadContext, SubscriptionFlags};

/// Server-assigned entity identifier.
pub type EntityId = String;

/// Errors that can occur when encoding or decoding monetization payloads.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is missing from the JSON data.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A list response was neither an array nor an object wrapping one.
    #[error("unexpected list response: expected an array or an object, got {0}")]
    UnexpectedListShape(&'static str),
}
