//! Request bodies sent when accepting or updating a rate plan.
//!
//! [`AcceptedRatePlanPayload`] is built from an [`AcceptedRatePlan`] and then
//! enriched with request-only data: the subscribing party taken from the
//! controller scope ([`PayloadContext`]) and the two request flags
//! ([`SubscriptionFlags`]). None of that extra data is ever stored on the
//! entity.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::EntityId;
use crate::entities::{AcceptedRatePlan, EntityRef};

/// A boolean request flag, written as the string `"true"` or `"false"`.
///
/// The monetization API rejects native JSON booleans for these flags, so the
/// value is always serialized as a string literal.
///
/// ```json
/// "true"
/// ```
///
/// Both string literals and native booleans are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagValue(bool);

impl FlagValue {
    /// Returns the flag as a plain boolean.
    #[must_use]
    pub const fn get(self) -> bool {
        self.0
    }

    /// Returns the literal written on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        if self.0 { "true" } else { "false" }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl Serialize for FlagValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FlagValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => Ok(Self(b)),
            Raw::Str(s) => match s.as_str() {
                "true" => Ok(Self(true)),
                "false" => Ok(Self(false)),
                other => Err(serde::de::Error::custom(format!(
                    "flag must be \"true\" or \"false\", got {other:?}"
                ))),
            },
        }
    }
}

/// Request-only flags for accepting or updating a rate plan.
///
/// A flag left as `None` is omitted from the request entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscriptionFlags {
    /// Skip the warning raised when the new plan overlaps an existing one.
    pub suppress_warning: Option<bool>,
    /// Waive the termination charge of the plan being replaced.
    pub wave_termination_charge: Option<bool>,
}

impl SubscriptionFlags {
    /// Sets `suppressWarning`.
    #[must_use]
    pub const fn suppress_warning(mut self, value: bool) -> Self {
        self.suppress_warning = Some(value);
        self
    }

    /// Sets `waveTerminationCharge`.
    #[must_use]
    pub const fn wave_termination_charge(mut self, value: bool) -> Self {
        self.wave_termination_charge = Some(value);
        self
    }
}

/// Scope metadata merged into every accept/update payload.
///
/// Identifies the party the subscription belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PayloadContext {
    /// No party reference is added.
    #[default]
    None,
    /// Subscription of a developer (id or email).
    Developer(EntityId),
    /// Subscription of a company (company name).
    Company(EntityId),
}

/// JSON body of `POST`/`PUT` requests on accepted rate plans.
///
/// # JSON Format
///
/// ```json
/// {
///   "ratePlan": { "id": "plan-1" },
///   "startDate": "2024-01-01",
///   "quotaTarget": 100,
///   "developer": { "id": "dev@example.com" },
///   "suppressWarning": "true"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedRatePlanPayload {
    /// Identifier of an existing plan; absent on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    /// Rate plan being accepted.
    pub rate_plan: EntityRef,

    /// First day of the subscription.
    #[serde(with = "crate::dates::date")]
    pub start_date: NaiveDate,

    /// Last day of the subscription.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::dates::option_date"
    )]
    pub end_date: Option<NaiveDate>,

    /// Quota target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_target: Option<u64>,

    /// Subscribing developer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<EntityRef>,

    /// Subscribing company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<EntityRef>,

    /// `suppressWarning` request flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress_warning: Option<FlagValue>,

    /// `waveTerminationCharge` request flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_termination_charge: Option<FlagValue>,
}

impl AcceptedRatePlanPayload {
    /// Builds the payload mirroring the persisted state of `plan`.
    #[must_use]
    pub fn from_entity(plan: &AcceptedRatePlan) -> Self {
        Self {
            id: plan.id.clone(),
            rate_plan: plan.rate_plan.to_ref(),
            start_date: plan.start_date,
            end_date: plan.end_date,
            quota_target: plan.quota_target,
            developer: plan.developer.as_ref().map(|d| EntityRef::new(d.id.clone())),
            company: plan.company.as_ref().map(|c| EntityRef::new(c.id.clone())),
            suppress_warning: None,
            wave_termination_charge: None,
        }
    }

    /// Adds the party reference from `context`.
    ///
    /// A party already present on the payload is left untouched.
    #[must_use]
    pub fn with_context(mut self, context: &PayloadContext) -> Self {
        match context {
            PayloadContext::None => {}
            PayloadContext::Developer(id) => {
                self.developer
                    .get_or_insert_with(|| EntityRef::new(id.clone()));
            }
            PayloadContext::Company(id) => {
                self.company.get_or_insert_with(|| EntityRef::new(id.clone()));
            }
        }
        self
    }

    /// Sets the request flags that are present in `flags`.
    #[must_use]
    pub fn with_flags(mut self, flags: SubscriptionFlags) -> Self {
        if let Some(value) = flags.suppress_warning {
            self.suppress_warning = Some(value.into());
        }
        if let Some(value) = flags.wave_termination_charge {
            self.wave_termination_charge = Some(value.into());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{PartyRef, RatePlan};
    use serde_json::json;

    fn plan() -> AcceptedRatePlan {
        AcceptedRatePlan::new(
            RatePlan::new("plan-1"),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_flag_serializes_as_string_literal() {
        assert_eq!(serde_json::to_string(&FlagValue::from(true)).unwrap(), "\"true\"");
        assert_eq!(serde_json::to_string(&FlagValue::from(false)).unwrap(), "\"false\"");
    }

    #[test]
    fn test_flag_deserializes_string_and_bool() {
        let a: FlagValue = serde_json::from_str("\"true\"").unwrap();
        let b: FlagValue = serde_json::from_str("false").unwrap();
        assert!(a.get());
        assert!(!b.get());
        assert!(serde_json::from_str::<FlagValue>("\"yes\"").is_err());
    }

    #[test]
    fn test_payload_without_optionals() {
        let payload = AcceptedRatePlanPayload::from_entity(&plan());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"ratePlan": {"id": "plan-1"}, "startDate": "2024-01-01"})
        );
    }

    #[test]
    fn test_payload_with_flags_and_context() {
        let payload = AcceptedRatePlanPayload::from_entity(&plan().with_quota_target(5))
            .with_context(&PayloadContext::Company("acme".into()))
            .with_flags(
                SubscriptionFlags::default()
                    .suppress_warning(true)
                    .wave_termination_charge(false),
            );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "ratePlan": {"id": "plan-1"},
                "startDate": "2024-01-01",
                "quotaTarget": 5,
                "company": {"id": "acme"},
                "suppressWarning": "true",
                "waveTerminationCharge": "false"
            })
        );
    }

    #[test]
    fn test_context_keeps_existing_party() {
        let mut entity = plan();
        entity.developer = Some(PartyRef::new("uuid-1"));
        let payload = AcceptedRatePlanPayload::from_entity(&entity)
            .with_context(&PayloadContext::Developer("dev@example.com".into()));
        assert_eq!(payload.developer, Some(EntityRef::new("uuid-1")));
    }
}
