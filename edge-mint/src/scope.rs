//! Developer and company variants of the accepted rate plan controller.
//!
//! The monetization API exposes the same accepted-rate-plan resource under a
//! developer and under a company. An [`AcceptedRatePlanScope`] supplies what
//! differs between the two: the endpoints, the party reference merged into
//! request payloads, and an optional last-minute rewrite of update payloads.

use chrono::NaiveDate;
use edge_mint_proto::{
    AcceptedRatePlan, AcceptedRatePlanPayload, EntityId, EntityRef, PayloadContext, RatePlan,
};

/// Path prefix shared by all monetization endpoints.
pub const MINT_ORGANIZATIONS_PATH: &str = "mint/organizations";

/// Collection segment of accepted rate plans.
pub const ACCEPTED_RATE_PLANS_SEGMENT: &str = "developer-rateplans";

/// Segment of the eligible rate plan listing.
pub const ELIGIBLE_RATE_PLANS_SEGMENT: &str = "eligibleratesplans";

/// Extension points of [`AcceptedRatePlanController`](crate::AcceptedRatePlanController).
///
/// Paths are relative to the management API base URL and carry no leading
/// slash. Dynamic segments (organization, party) are percent-encoded.
pub trait AcceptedRatePlanScope: Send + Sync {
    /// Collection endpoint of accepted rate plans in `organization`.
    fn base_path(&self, organization: &str) -> String;

    /// Endpoint listing the rate plans the party is eligible to accept.
    fn eligible_rate_plans_path(&self, organization: &str) -> String;

    /// Metadata merged into accept and update payloads.
    fn payload_context(&self) -> PayloadContext;

    /// Last chance to rewrite an update payload before it is sent.
    fn alter_request_payload(
        &self,
        _payload: &mut AcceptedRatePlanPayload,
        _accepted_rate_plan: &AcceptedRatePlan,
    ) {
    }

    /// Builds the unsaved entity for a new subscription.
    fn new_accepted_rate_plan(&self, rate_plan: &RatePlan, start_date: NaiveDate) -> AcceptedRatePlan {
        AcceptedRatePlan::new(rate_plan.clone(), start_date)
    }
}

impl<S: AcceptedRatePlanScope + ?Sized> AcceptedRatePlanScope for Box<S> {
    fn base_path(&self, organization: &str) -> String {
        (**self).base_path(organization)
    }

    fn eligible_rate_plans_path(&self, organization: &str) -> String {
        (**self).eligible_rate_plans_path(organization)
    }

    fn payload_context(&self) -> PayloadContext {
        (**self).payload_context()
    }

    fn alter_request_payload(
        &self,
        payload: &mut AcceptedRatePlanPayload,
        accepted_rate_plan: &AcceptedRatePlan,
    ) {
        (**self).alter_request_payload(payload, accepted_rate_plan);
    }

    fn new_accepted_rate_plan(&self, rate_plan: &RatePlan, start_date: NaiveDate) -> AcceptedRatePlan {
        (**self).new_accepted_rate_plan(rate_plan, start_date)
    }
}

/// Accepted rate plans of a single developer.
///
/// The developer is addressed by email or by id; the API accepts both in
/// paths but prefers the email in payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperScope {
    developer: EntityId,
}

impl DeveloperScope {
    /// Creates a scope for `developer` (email or id).
    #[must_use]
    pub fn new(developer: impl Into<EntityId>) -> Self {
        Self {
            developer: developer.into(),
        }
    }

    /// Returns the developer this scope addresses.
    #[must_use]
    pub fn developer(&self) -> &str {
        &self.developer
    }

    fn party_path(&self, organization: &str) -> String {
        format!(
            "{MINT_ORGANIZATIONS_PATH}/{}/developers/{}",
            urlencoding::encode(organization),
            urlencoding::encode(&self.developer)
        )
    }
}

impl AcceptedRatePlanScope for DeveloperScope {
    fn base_path(&self, organization: &str) -> String {
        format!("{}/{ACCEPTED_RATE_PLANS_SEGMENT}", self.party_path(organization))
    }

    fn eligible_rate_plans_path(&self, organization: &str) -> String {
        format!("{}/{ELIGIBLE_RATE_PLANS_SEGMENT}", self.party_path(organization))
    }

    fn payload_context(&self) -> PayloadContext {
        PayloadContext::Developer(self.developer.clone())
    }

    /// Saved plans echo the developer by UUID; the update endpoint wants the
    /// email, so it is swapped in when known.
    fn alter_request_payload(
        &self,
        payload: &mut AcceptedRatePlanPayload,
        accepted_rate_plan: &AcceptedRatePlan,
    ) {
        let email = accepted_rate_plan
            .developer
            .as_ref()
            .and_then(|d| d.email.clone())
            .unwrap_or_else(|| self.developer.clone());
        payload.developer = Some(EntityRef::new(email));
    }
}

/// Accepted rate plans of a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyScope {
    company: EntityId,
}

impl CompanyScope {
    /// Creates a scope for the company named `company`.
    #[must_use]
    pub fn new(company: impl Into<EntityId>) -> Self {
        Self {
            company: company.into(),
        }
    }

    /// Returns the company this scope addresses.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    fn party_path(&self, organization: &str) -> String {
        format!(
            "{MINT_ORGANIZATIONS_PATH}/{}/companies/{}",
            urlencoding::encode(organization),
            urlencoding::encode(&self.company)
        )
    }
}

impl AcceptedRatePlanScope for CompanyScope {
    fn base_path(&self, organization: &str) -> String {
        format!("{}/{ACCEPTED_RATE_PLANS_SEGMENT}", self.party_path(organization))
    }

    fn eligible_rate_plans_path(&self, organization: &str) -> String {
        format!("{}/{ELIGIBLE_RATE_PLANS_SEGMENT}", self.party_path(organization))
    }

    fn payload_context(&self) -> PayloadContext {
        PayloadContext::Company(self.company.clone())
    }
}
