//! Accepted rate plan operations.
//!
//! [`AcceptedRatePlanController`] lists eligible rate plans, accepts rate
//! plans and updates existing subscriptions for one party of an
//! organization. The party (developer or company) and its endpoints come from
//! an [`AcceptedRatePlanScope`]; requests go through an [`ApiClient`].
//!
//! Each operation performs exactly one request. Accept and update write the
//! server's answer back onto the entity, so server-assigned fields such as
//! the identifier are always current after a successful call.
//!
//! ## Error Handling
//!
//! - Transport failures and non-2xx answers surface as [`ControllerError::Api`]
//! - Bodies that cannot be encoded or decoded surface as
//!   [`ControllerError::Serialization`]
//! - Updating a plan that was never saved fails with
//!   [`ControllerError::UnsavedEntity`] without touching the network

use chrono::NaiveDate;
use edge_mint_proto::helpers::{index_by_id, parse_accepted_rate_plans, parse_error_body};
use edge_mint_proto::{
    AcceptedRatePlan, AcceptedRatePlanPayload, EntityId, RatePlan, SubscriptionFlags,
};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

use crate::client::{ApiClient, ApiRequest};
use crate::error::{ApiRequestError, ControllerError};
use crate::scope::AcceptedRatePlanScope;

/// Optional parameters of [`AcceptedRatePlanController::accept_rate_plan`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptOptions {
    /// Last day of the subscription.
    pub end_date: Option<NaiveDate>,
    /// Quota target of the subscription.
    pub quota_target: Option<u64>,
    /// Request-only flags.
    pub flags: SubscriptionFlags,
}

impl AcceptOptions {
    /// Sets the end date.
    #[must_use]
    pub const fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Sets the quota target.
    #[must_use]
    pub const fn quota_target(mut self, quota_target: u64) -> Self {
        self.quota_target = Some(quota_target);
        self
    }

    /// Sets the `suppressWarning` flag.
    #[must_use]
    pub const fn suppress_warning(mut self, value: bool) -> Self {
        self.flags = self.flags.suppress_warning(value);
        self
    }

    /// Sets the `waveTerminationCharge` flag.
    #[must_use]
    pub const fn wave_termination_charge(mut self, value: bool) -> Self {
        self.flags = self.flags.wave_termination_charge(value);
        self
    }
}

/// Manages the accepted rate plans of one developer or company.
///
/// # Example
///
/// ```rust,ignore
/// use edge_mint::{AcceptOptions, AcceptedRatePlanController, DeveloperScope};
///
/// let controller = AcceptedRatePlanController::new(
///     "acme",
///     DeveloperScope::new("dev@example.com"),
///     http_client,
/// );
/// let plan = controller
///     .accept_rate_plan(&rate_plan, start_date, AcceptOptions::default().quota_target(100))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct AcceptedRatePlanController<S, C> {
    organization: String,
    scope: S,
    client: C,
}

impl<S, C> AcceptedRatePlanController<S, C>
where
    S: AcceptedRatePlanScope,
    C: ApiClient,
{
    /// Creates a controller for `scope` within `organization`.
    pub fn new(organization: impl Into<String>, scope: S, client: C) -> Self {
        Self {
            organization: organization.into(),
            scope,
            client,
        }
    }

    /// Returns the organization name.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the scope.
    pub const fn scope(&self) -> &S {
        &self.scope
    }

    /// Returns the API client.
    pub const fn client(&self) -> &C {
        &self.client
    }

    fn base_path(&self) -> String {
        self.scope.base_path(&self.organization)
    }

    fn entity_path(&self, id: &str) -> String {
        format!("{}/{}", self.base_path(), urlencoding::encode(id))
    }

    /// Lists the rate plans the party may accept, keyed by identifier.
    ///
    /// Includes the plans already accepted and API products without a
    /// published rate plan. When the server lists an identifier twice, the
    /// later record wins.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError`] on transport failure, non-2xx status, or
    /// a record that cannot be decoded or has no identifier.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "edge_mint.eligible_rate_plans",
            skip_all,
            fields(organization = %self.organization)
        )
    )]
    pub async fn get_all_eligible_rate_plans(
        &self,
    ) -> Result<IndexMap<EntityId, AcceptedRatePlan>, ControllerError> {
        const CONTEXT: &str = "GET eligibleratesplans";
        let request = ApiRequest::get(self.scope.eligible_rate_plans_path(&self.organization), CONTEXT);
        let body = self.execute(request).await?;
        parse_accepted_rate_plans(&body)
            .and_then(index_by_id)
            .map_err(|e| ControllerError::serialization(CONTEXT, e))
    }

    /// Accepts `rate_plan` starting on `start_date`.
    ///
    /// Returns the saved subscription as echoed by the server, including its
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError`] on transport failure, non-2xx status, or
    /// an undecodable response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "edge_mint.accept_rate_plan",
            skip_all,
            fields(organization = %self.organization, rate_plan = %rate_plan.id)
        )
    )]
    pub async fn accept_rate_plan(
        &self,
        rate_plan: &RatePlan,
        start_date: NaiveDate,
        options: AcceptOptions,
    ) -> Result<AcceptedRatePlan, ControllerError> {
        const CONTEXT: &str = "POST developer-rateplans";
        let mut accepted = self.scope.new_accepted_rate_plan(rate_plan, start_date);
        if let Some(quota_target) = options.quota_target {
            accepted.quota_target = Some(quota_target);
        }
        if let Some(end_date) = options.end_date {
            accepted.end_date = Some(end_date);
        }

        let payload = AcceptedRatePlanPayload::from_entity(&accepted)
            .with_context(&self.scope.payload_context())
            .with_flags(options.flags);
        let body =
            serde_json::to_vec(&payload).map_err(|e| ControllerError::serialization(CONTEXT, e))?;

        let response = self
            .execute(ApiRequest::post(self.base_path(), body, CONTEXT))
            .await?;
        let saved: AcceptedRatePlan = decode(&response, CONTEXT)?;
        accepted.apply_response(saved);

        #[cfg(feature = "telemetry")]
        tracing::info!(id = accepted.id().unwrap_or_default(), "Accepted rate plan");

        Ok(accepted)
    }

    /// Saves changes made to an accepted rate plan.
    ///
    /// The plan must have been saved before (it must carry an identifier).
    /// On success it is refreshed in place from the server's answer.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::UnsavedEntity`] before sending anything if
    /// the plan has no identifier, otherwise [`ControllerError`] on transport
    /// failure, non-2xx status, or an undecodable response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "edge_mint.update_subscription",
            skip_all,
            fields(organization = %self.organization, id = ?accepted_rate_plan.id)
        )
    )]
    pub async fn update_subscription(
        &self,
        accepted_rate_plan: &mut AcceptedRatePlan,
        flags: SubscriptionFlags,
    ) -> Result<(), ControllerError> {
        const CONTEXT: &str = "PUT developer-rateplans";
        let id = accepted_rate_plan
            .id
            .clone()
            .ok_or(ControllerError::UnsavedEntity)?;

        let mut payload = AcceptedRatePlanPayload::from_entity(accepted_rate_plan)
            .with_context(&self.scope.payload_context())
            .with_flags(flags);
        self.scope
            .alter_request_payload(&mut payload, accepted_rate_plan);
        let body =
            serde_json::to_vec(&payload).map_err(|e| ControllerError::serialization(CONTEXT, e))?;

        let response = self
            .execute(ApiRequest::put(self.entity_path(&id), body, CONTEXT))
            .await?;
        let saved: AcceptedRatePlan = decode(&response, CONTEXT)?;
        accepted_rate_plan.apply_response(saved);
        Ok(())
    }

    /// Loads a single accepted rate plan.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError`] on transport failure, non-2xx status, or
    /// an undecodable response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "edge_mint.load_accepted_rate_plan",
            skip_all,
            fields(organization = %self.organization, id = %id)
        )
    )]
    pub async fn load(&self, id: &str) -> Result<AcceptedRatePlan, ControllerError> {
        const CONTEXT: &str = "GET developer-rateplans/{id}";
        let body = self
            .execute(ApiRequest::get(self.entity_path(id), CONTEXT))
            .await?;
        decode(&body, CONTEXT)
    }

    /// Lists every accepted rate plan of the party.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError`] on transport failure, non-2xx status, or
    /// an undecodable response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "edge_mint.accepted_rate_plans",
            skip_all,
            fields(organization = %self.organization)
        )
    )]
    pub async fn get_all_accepted_rate_plans(
        &self,
    ) -> Result<Vec<AcceptedRatePlan>, ControllerError> {
        const CONTEXT: &str = "GET developer-rateplans?all=true";
        let request = ApiRequest::get(self.base_path(), CONTEXT).with_query("all", true);
        let body = self.execute(request).await?;
        parse_accepted_rate_plans(&body).map_err(|e| ControllerError::serialization(CONTEXT, e))
    }

    /// Lists one page of accepted rate plans.
    ///
    /// `page` starts at 1. Without a `limit` the server's default page size
    /// applies.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError`] on transport failure, non-2xx status, or
    /// an undecodable response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "edge_mint.paginated_accepted_rate_plans",
            skip_all,
            fields(organization = %self.organization, page = page, limit = ?limit)
        )
    )]
    pub async fn get_paginated_accepted_rate_plans(
        &self,
        limit: Option<u32>,
        page: u32,
    ) -> Result<Vec<AcceptedRatePlan>, ControllerError> {
        const CONTEXT: &str = "GET developer-rateplans?page";
        let mut request = ApiRequest::get(self.base_path(), CONTEXT).with_query("page", page);
        if let Some(limit) = limit {
            request = request.with_query("size", limit);
        }
        let body = self.execute(request).await?;
        parse_accepted_rate_plans(&body).map_err(|e| ControllerError::serialization(CONTEXT, e))
    }

    /// Sends a request and returns the body of a 2xx response.
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>, ControllerError> {
        let context = request.context;
        let result = match self.client.send(request).await {
            Ok(response) if response.is_success() => Ok(response.body),
            Ok(response) => {
                let (code, message) = parse_error_body(&response.body);
                Err(ApiRequestError::Status {
                    context,
                    status: response.status,
                    code,
                    message,
                })
            }
            Err(err) => Err(err),
        };

        record_result_on_span(&result);

        result.map_err(ControllerError::from)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8], context: &'static str) -> Result<T, ControllerError> {
    serde_json::from_slice(body).map_err(|e| ControllerError::serialization(context, e))
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: std::fmt::Display>(result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Request to management API failed");
        }
    }
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R, E: std::fmt::Display>(_result: &Result<R, E>) {}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use http::{Method, StatusCode};
    use serde_json::{Value, json};

    use super::*;
    use crate::client::{ApiResponse, BoxFuture};
    use crate::scope::{CompanyScope, DeveloperScope};

    const ORG: &str = "acme";

    /// Records every request and replays canned responses in order.
    #[derive(Default)]
    struct RecordingClient {
        requests: Mutex<Vec<ApiRequest>>,
        responses: Mutex<VecDeque<Result<ApiResponse, ApiRequestError>>>,
    }

    impl RecordingClient {
        fn replying(status: StatusCode, body: &Value) -> Self {
            let client = Self::default();
            client.push(status, body);
            client
        }

        fn push(&self, status: StatusCode, body: &Value) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(ApiResponse::new(status, serde_json::to_vec(body).unwrap())));
        }

        fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn last_body(&self) -> Value {
            let requests = self.requests();
            let body = requests.last().unwrap().body.as_ref().unwrap();
            serde_json::from_slice(body).unwrap()
        }
    }

    impl ApiClient for RecordingClient {
        fn send(
            &self,
            request: ApiRequest,
        ) -> BoxFuture<'_, Result<ApiResponse, ApiRequestError>> {
            self.requests.lock().unwrap().push(request);
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected request");
            Box::pin(async move { next })
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn developer_controller(
        client: &RecordingClient,
    ) -> AcceptedRatePlanController<DeveloperScope, &RecordingClient> {
        AcceptedRatePlanController::new(ORG, DeveloperScope::new("dev@example.com"), client)
    }

    fn saved(id: &str) -> Value {
        json!({"id": id, "ratePlan": {"id": "plan-1"}, "startDate": "2024-01-01"})
    }

    #[tokio::test]
    async fn test_accept_sends_minimal_payload() {
        let client = RecordingClient::replying(StatusCode::CREATED, &saved("sub-1"));
        let controller = developer_controller(&client);

        controller
            .accept_rate_plan(&RatePlan::new("plan-1"), date(2024, 1, 1), AcceptOptions::default())
            .await
            .unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(
            requests[0].path,
            "mint/organizations/acme/developers/dev%40example.com/developer-rateplans"
        );
        let body = client.last_body();
        assert_eq!(
            body,
            json!({
                "ratePlan": {"id": "plan-1"},
                "startDate": "2024-01-01",
                "developer": {"id": "dev@example.com"}
            })
        );
        assert!(body.get("endDate").is_none());
        assert!(body.get("quotaTarget").is_none());
    }

    #[tokio::test]
    async fn test_accept_flags_are_string_literals() {
        let client = RecordingClient::replying(StatusCode::CREATED, &saved("sub-1"));
        let controller = developer_controller(&client);

        let options = AcceptOptions::default()
            .end_date(date(2024, 12, 31))
            .quota_target(7)
            .suppress_warning(true)
            .wave_termination_charge(false);
        controller
            .accept_rate_plan(&RatePlan::new("plan-1"), date(2024, 1, 1), options)
            .await
            .unwrap();

        let body = client.last_body();
        assert_eq!(body["suppressWarning"], json!("true"));
        assert_eq!(body["waveTerminationCharge"], json!("false"));
        assert_eq!(body["endDate"], json!("2024-12-31"));
        assert_eq!(body["quotaTarget"], json!(7));
        assert_eq!(body["startDate"], json!("2024-01-01"));
    }

    #[tokio::test]
    async fn test_accept_populates_entity_from_response() {
        let client = RecordingClient::replying(
            StatusCode::CREATED,
            &json!({
                "id": "sub-42",
                "ratePlan": {"id": "plan-1"},
                "startDate": "2024-01-01",
                "quotaTarget": 100
            }),
        );
        let controller = developer_controller(&client);

        let accepted = controller
            .accept_rate_plan(
                &RatePlan::new("plan-1"),
                date(2024, 1, 1),
                AcceptOptions::default().quota_target(100),
            )
            .await
            .unwrap();

        assert_eq!(accepted.id(), Some("sub-42"));
        assert_eq!(accepted.quota_target, Some(100));
        assert_eq!(accepted.start_date, date(2024, 1, 1));
    }

    #[tokio::test]
    async fn test_accept_company_context() {
        let client = RecordingClient::replying(StatusCode::CREATED, &saved("sub-1"));
        let controller = AcceptedRatePlanController::new(ORG, CompanyScope::new("globex"), &client);

        controller
            .accept_rate_plan(&RatePlan::new("plan-1"), date(2024, 1, 1), AcceptOptions::default())
            .await
            .unwrap();

        let body = client.last_body();
        assert_eq!(body["company"], json!({"id": "globex"}));
        assert!(body.get("developer").is_none());
    }

    #[tokio::test]
    async fn test_update_unsaved_fails_without_request() {
        let client = RecordingClient::default();
        let controller = developer_controller(&client);
        let mut plan = AcceptedRatePlan::new(RatePlan::new("plan-1"), date(2024, 1, 1));

        let err = controller
            .update_subscription(&mut plan, SubscriptionFlags::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ControllerError::UnsavedEntity));
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_puts_to_entity_path_and_refreshes() {
        let client = RecordingClient::replying(
            StatusCode::OK,
            &json!({
                "id": "sub-1",
                "ratePlan": {"id": "plan-1"},
                "startDate": "2024-01-01",
                "endDate": "2024-06-30",
                "updated": "2024-03-01 10:00:00"
            }),
        );
        let controller = developer_controller(&client);
        let mut plan: AcceptedRatePlan = serde_json::from_value(json!({
            "id": "sub-1",
            "ratePlan": {"id": "plan-1"},
            "startDate": "2024-01-01",
            "developer": {"id": "uuid-1", "email": "dev@example.com"}
        }))
        .unwrap();
        plan.end_date = Some(date(2024, 6, 30));

        controller
            .update_subscription(&mut plan, SubscriptionFlags::default().suppress_warning(false))
            .await
            .unwrap();

        let requests = client.requests();
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(
            requests[0].path,
            "mint/organizations/acme/developers/dev%40example.com/developer-rateplans/sub-1"
        );
        let body = client.last_body();
        assert_eq!(body["id"], json!("sub-1"));
        assert_eq!(body["endDate"], json!("2024-06-30"));
        assert_eq!(body["suppressWarning"], json!("false"));
        assert!(body.get("waveTerminationCharge").is_none());
        // Developer hook swaps the UUID for the email.
        assert_eq!(body["developer"], json!({"id": "dev@example.com"}));
        assert!(plan.updated.is_some());
    }

    #[tokio::test]
    async fn test_round_trip_reproduces_echoed_fields() {
        let mut plan: AcceptedRatePlan = serde_json::from_value(json!({
            "id": "sub-9",
            "ratePlan": {"id": "plan-1"},
            "startDate": "2024-01-01",
            "endDate": "2024-12-31",
            "quotaTarget": 250
        }))
        .unwrap();
        let original = plan.clone();

        let client = RecordingClient::default();
        let controller = AcceptedRatePlanController::new(ORG, CompanyScope::new("globex"), &client);
        // Echo whatever the controller sends.
        let sent = AcceptedRatePlanPayload::from_entity(&plan);
        client.push(StatusCode::OK, &serde_json::to_value(&sent).unwrap());

        controller
            .update_subscription(&mut plan, SubscriptionFlags::default())
            .await
            .unwrap();

        assert_eq!(plan.id, original.id);
        assert_eq!(plan.start_date, original.start_date);
        assert_eq!(plan.end_date, original.end_date);
        assert_eq!(plan.quota_target, original.quota_target);
    }

    #[tokio::test]
    async fn test_eligible_keyed_by_id_with_later_duplicate_winning() {
        let client = RecordingClient::replying(
            StatusCode::OK,
            &json!([
                {"id": "a", "ratePlan": {"id": "p1"}, "startDate": "2024-01-01", "quotaTarget": 1},
                {"id": "b", "ratePlan": {"id": "p2"}, "startDate": "2024-01-01"},
                {"id": "a", "ratePlan": {"id": "p1"}, "startDate": "2024-01-01", "quotaTarget": 2}
            ]),
        );
        let controller = developer_controller(&client);

        let eligible = controller.get_all_eligible_rate_plans().await.unwrap();

        assert_eq!(
            client.requests()[0].path,
            "mint/organizations/acme/developers/dev%40example.com/eligibleratesplans"
        );
        assert_eq!(eligible.len(), 2);
        assert_eq!(eligible["a"].quota_target, Some(2));
        assert_eq!(eligible["b"].rate_plan.id, "p2");
    }

    #[tokio::test]
    async fn test_status_error_carries_server_message() {
        let client = RecordingClient::replying(
            StatusCode::BAD_REQUEST,
            &json!({"code": "mint.ratePlanOverlap", "message": "Overlapping rate plan"}),
        );
        let controller = developer_controller(&client);

        let err = controller
            .accept_rate_plan(&RatePlan::new("plan-1"), date(2024, 1, 1), AcceptOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        match err {
            ControllerError::Api(ApiRequestError::Status { code, message, .. }) => {
                assert_eq!(code.as_deref(), Some("mint.ratePlanOverlap"));
                assert_eq!(message, "Overlapping rate plan");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = RecordingClient::default();
        client
            .responses
            .lock()
            .unwrap()
            .push_back(Err(ApiRequestError::transport("GET", "connection refused")));
        let controller = developer_controller(&client);

        let err = controller.get_all_eligible_rate_plans().await.unwrap_err();
        assert!(matches!(err, ControllerError::Api(ApiRequestError::Transport { .. })));
        assert!(err.status().is_none());
    }

    #[tokio::test]
    async fn test_malformed_response_is_serialization_error() {
        let client = RecordingClient::default();
        client.responses.lock().unwrap().push_back(Ok(ApiResponse::new(
            StatusCode::CREATED,
            b"not json".to_vec(),
        )));
        let controller = developer_controller(&client);

        let err = controller
            .accept_rate_plan(&RatePlan::new("plan-1"), date(2024, 1, 1), AcceptOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ControllerError::Serialization { .. }));
    }

    #[tokio::test]
    async fn test_load_and_listing_requests() {
        let client = RecordingClient::replying(StatusCode::OK, &saved("sub-1"));
        client.push(
            StatusCode::OK,
            &json!({"developerRatePlan": [saved("sub-1"), saved("sub-2")], "totalRecords": 2}),
        );
        client.push(StatusCode::OK, &json!([saved("sub-3")]));
        let controller = developer_controller(&client);

        let loaded = controller.load("sub-1").await.unwrap();
        assert_eq!(loaded.id(), Some("sub-1"));

        let all = controller.get_all_accepted_rate_plans().await.unwrap();
        assert_eq!(all.len(), 2);

        let page = controller
            .get_paginated_accepted_rate_plans(Some(10), 3)
            .await
            .unwrap();
        assert_eq!(page.len(), 1);

        let requests = client.requests();
        assert!(requests[0].path.ends_with("/developer-rateplans/sub-1"));
        assert_eq!(requests[1].query, vec![("all".to_owned(), "true".to_owned())]);
        assert_eq!(
            requests[2].query,
            vec![
                ("page".to_owned(), "3".to_owned()),
                ("size".to_owned(), "10".to_owned())
            ]
        );
    }

    #[tokio::test]
    async fn test_entity_id_is_encoded_in_path() {
        let client = RecordingClient::replying(StatusCode::OK, &saved("sub/1#x"));
        let controller = developer_controller(&client);

        controller.load("sub/1#x").await.unwrap();

        assert_eq!(
            client.requests()[0].path,
            "mint/organizations/acme/developers/dev%40example.com/developer-rateplans/sub%2F1%23x"
        );
    }
}
