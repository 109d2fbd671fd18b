//! HTTP-specific constants for the monetization SDK.

use std::time::Duration;

/// Default Apigee Edge management API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.enterprise.apigee.com/v1/";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Media type of every request and response body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("edge-mint/", env!("CARGO_PKG_VERSION"));
