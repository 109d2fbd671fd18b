//! Utility functions for decoding monetization API responses.
//!
//! Provides raw list unwrapping, identifier keying and error body parsing
//! used by the controller layer.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::entities::AcceptedRatePlan;
use crate::{EntityId, PayloadError};

/// Extracts the list of records from a list response.
///
/// The monetization API answers list requests either with a bare array or
/// with an object wrapping the array under an entity-type key, e.g.
/// `{"developerRatePlan": [...], "totalRecords": 2}`. In the latter case the
/// first array-valued member (in document order) is returned. An object with
/// no array member, and `null`, both mean "no records".
///
/// # Errors
///
/// Returns [`PayloadError::UnexpectedListShape`] for scalar responses.
pub fn unwrap_raw_list(value: Value) -> Result<Vec<Value>, PayloadError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(map) => Ok(map
            .into_iter()
            .find_map(|(_, v)| match v {
                Value::Array(items) => Some(items),
                _ => None,
            })
            .unwrap_or_default()),
        Value::Null => Ok(Vec::new()),
        Value::Bool(_) => Err(PayloadError::UnexpectedListShape("a boolean")),
        Value::Number(_) => Err(PayloadError::UnexpectedListShape("a number")),
        Value::String(_) => Err(PayloadError::UnexpectedListShape("a string")),
    }
}

/// Decodes a list response body into accepted rate plans.
///
/// # Errors
///
/// Returns [`PayloadError`] if the body is not JSON, has an unexpected shape,
/// or any record fails to decode.
pub fn parse_accepted_rate_plans(body: &[u8]) -> Result<Vec<AcceptedRatePlan>, PayloadError> {
    let value: Value = serde_json::from_slice(body)?;
    unwrap_raw_list(value)?
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(PayloadError::from))
        .collect()
}

/// Keys accepted rate plans by their own identifier.
///
/// Insertion order is preserved. When two records share an identifier the
/// later one replaces the earlier one, keeping the earlier position.
///
/// # Errors
///
/// Returns [`PayloadError::MissingField`] if a record has no identifier.
pub fn index_by_id<I>(plans: I) -> Result<IndexMap<EntityId, AcceptedRatePlan>, PayloadError>
where
    I: IntoIterator<Item = AcceptedRatePlan>,
{
    let mut indexed = IndexMap::new();
    for plan in plans {
        let id = plan.id.clone().ok_or(PayloadError::MissingField("id"))?;
        indexed.insert(id, plan);
    }
    Ok(indexed)
}

/// Error body returned by the management API on failed requests.
///
/// ```json
/// { "code": "mint.resourceDoesNotExist", "message": "Rate plan not found" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Extracts the error code and message from a failed response body.
///
/// Falls back to the raw body text as the message when the body is not a
/// structured error.
#[must_use]
pub fn parse_error_body(body: &[u8]) -> (Option<String>, String) {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            code,
            message: Some(message),
        }) => (code, message),
        Ok(ErrorBody { code, message: None }) => {
            (code, String::from_utf8_lossy(body).into_owned())
        }
        Err(_) => (None, String::from_utf8_lossy(body).into_owned()),
    }
}
