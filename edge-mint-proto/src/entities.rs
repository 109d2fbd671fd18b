//! Monetization entities returned by the API.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::EntityId;

/// Reference to another entity by identifier, as written in request bodies.
///
/// # JSON Format
///
/// ```json
/// { "id": "plan-1" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Identifier of the referenced entity.
    pub id: EntityId,
}

impl EntityRef {
    /// Creates a reference to `id`.
    #[must_use]
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self { id: id.into() }
    }
}

/// A developer or company embedded in an accepted rate plan response.
///
/// The API returns the full party object; only the fields the SDK needs to
/// address the party again are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyRef {
    /// Party identifier (a UUID for developers, the name for companies).
    pub id: EntityId,

    /// Developer email address, when the party is a developer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Display or legal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PartyRef {
    /// Creates a party reference carrying only an identifier.
    #[must_use]
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            email: None,
            name: None,
        }
    }
}

/// A published monetization rate plan.
///
/// Rate plans are read-only from the point of view of this SDK; they are
/// only ever referenced by identifier when accepting one. Fields the SDK
/// does not model are preserved in [`RatePlan::extra`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePlan {
    /// Rate plan identifier.
    pub id: EntityId,

    /// Internal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Remaining fields of the rate plan as returned by the API.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RatePlan {
    /// Creates a rate plan known only by its identifier.
    #[must_use]
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            display_name: None,
            description: None,
            extra: Map::new(),
        }
    }

    /// Returns a reference suitable for request bodies.
    #[must_use]
    pub fn to_ref(&self) -> EntityRef {
        EntityRef::new(self.id.clone())
    }
}

/// A subscription of a developer or company to a [`RatePlan`].
///
/// An accepted rate plan starts *unsaved* (no [`id`](Self::id)) and becomes
/// *saved* once the API has created it and assigned an identifier. Only saved
/// plans can be updated.
///
/// # JSON Format
///
/// ```json
/// {
///   "id": "sub-42",
///   "ratePlan": { "id": "plan-1" },
///   "startDate": "2024-01-01",
///   "quotaTarget": 100
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedRatePlan {
    /// Server-assigned identifier; `None` until the plan has been accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    /// The accepted rate plan.
    pub rate_plan: RatePlan,

    /// First day of the subscription.
    #[serde(with = "crate::dates::date")]
    pub start_date: NaiveDate,

    /// Last day of the subscription, if it is bounded.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::dates::option_date"
    )]
    pub end_date: Option<NaiveDate>,

    /// Quota target for the subscription.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_target: Option<u64>,

    /// Date the current billing cycle renews.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::dates::option_date"
    )]
    pub renewal_date: Option<NaiveDate>,

    /// First day of the next billing cycle.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::dates::option_date"
    )]
    pub next_cycle_start_date: Option<NaiveDate>,

    /// Creation timestamp.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::dates::option_date_time"
    )]
    pub created: Option<NaiveDateTime>,

    /// Last modification timestamp.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::dates::option_date_time"
    )]
    pub updated: Option<NaiveDateTime>,

    /// Subscribing developer, for developer-scoped plans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<PartyRef>,

    /// Subscribing company, for company-scoped plans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<PartyRef>,
}

impl AcceptedRatePlan {
    /// Creates an unsaved subscription to `rate_plan` starting on `start_date`.
    #[must_use]
    pub const fn new(rate_plan: RatePlan, start_date: NaiveDate) -> Self {
        Self {
            id: None,
            rate_plan,
            start_date,
            end_date: None,
            quota_target: None,
            renewal_date: None,
            next_cycle_start_date: None,
            created: None,
            updated: None,
            developer: None,
            company: None,
        }
    }

    /// Returns the server-assigned identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Whether the plan has been created on the server.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// Sets the end date.
    #[must_use]
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Sets the quota target.
    #[must_use]
    pub fn with_quota_target(mut self, quota_target: u64) -> Self {
        self.quota_target = Some(quota_target);
        self
    }

    /// Copies the state returned by the server onto this plan.
    ///
    /// Required fields are always taken from `response`. Optional fields are
    /// only overwritten when the response carries them, so local values the
    /// server does not echo survive.
    pub fn apply_response(&mut self, response: Self) {
        let Self {
            id,
            rate_plan,
            start_date,
            end_date,
            quota_target,
            renewal_date,
            next_cycle_start_date,
            created,
            updated,
            developer,
            company,
        } = response;

        self.rate_plan = rate_plan;
        self.start_date = start_date;
        overwrite(&mut self.id, id);
        overwrite(&mut self.end_date, end_date);
        overwrite(&mut self.quota_target, quota_target);
        overwrite(&mut self.renewal_date, renewal_date);
        overwrite(&mut self.next_cycle_start_date, next_cycle_start_date);
        overwrite(&mut self.created, created);
        overwrite(&mut self.updated, updated);
        overwrite(&mut self.developer, developer);
        overwrite(&mut self.company, company);
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
