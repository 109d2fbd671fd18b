//! CLI configuration.
//!
//! Loads configuration from a TOML file with support for environment variable
//! expansion in string values. Variables use `$VAR` or `${VAR}` syntax.
//!
//! # Example Configuration
//!
//! ```toml
//! base_url = "https://api.enterprise.apigee.com/v1"
//! organization = "acme"
//! timeout_secs = 30
//!
//! [auth]
//! username = "ops@example.com"
//! password = "$EDGE_MINT_PASSWORD"
//! ```
//!
//! # Environment Variables
//!
//! - `EDGE_MINT_CONFIG` - Path to configuration file (default: `edge-mint.toml`)
//! - `EDGE_MINT_BASE_URL` - Override the management API base URL
//! - `EDGE_MINT_ORGANIZATION` - Override the organization
//! - Credentials referenced by `$VAR` in the config file

use std::path::Path;
use std::time::Duration;

use edge_mint_http::{HttpClientConfig, HttpClientError, StaticAuthProvider};
use serde::{Deserialize, Serialize};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "EDGE_MINT_CONFIG";

/// Configuration file used when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "edge-mint.toml";

/// Errors raised while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`CliConfig`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Management API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Organization whose monetization data is managed.
    #[serde(default)]
    pub organization: Option<String>,

    /// Request timeout in seconds (default: `30`).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Management API credentials.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Credentials for the management API.
///
/// A bearer `token` takes precedence over `username` / `password`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Basic auth user name (usually an email).
    #[serde(default)]
    pub username: Option<String>,

    /// Basic auth password.
    #[serde(default)]
    pub password: Option<String>,

    /// OAuth2 access token.
    #[serde(default)]
    pub token: Option<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("has_password", &self.password.is_some())
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

fn default_base_url() -> String {
    edge_mint_http::constants::DEFAULT_BASE_URL.to_owned()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            organization: None,
            timeout_secs: default_timeout_secs(),
            auth: AuthConfig::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from the path given by `EDGE_MINT_CONFIG`,
    /// falling back to `edge-mint.toml` in the current directory.
    ///
    /// `$VAR` / `${VAR}` references are expanded from the process
    /// environment, then `EDGE_MINT_BASE_URL` and `EDGE_MINT_ORGANIZATION`
    /// override the file values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
        Self::load_from(&path, |name| std::env::var(name).ok())
    }

    /// Loads configuration from `path`, resolving variables with `lookup`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(
        path: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let content = if Path::new(path).exists() {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_owned(),
                source,
            })?
        } else {
            String::new()
        };
        Self::parse(&content, lookup)
    }

    /// Parses TOML `content`, expanding variables and applying overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the expanded content is invalid.
    pub fn parse(content: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let expanded = expand_vars(content, &lookup);
        let mut config: Self = toml::from_str(&expanded)?;

        if let Some(base_url) = lookup("EDGE_MINT_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(organization) = lookup("EDGE_MINT_ORGANIZATION") {
            config.organization = Some(organization);
        }

        Ok(config)
    }

    /// Builds the HTTP client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidHeader`] if a credential cannot be
    /// sent as a header value.
    pub fn http_config(&self) -> Result<HttpClientConfig, HttpClientError> {
        let mut config = HttpClientConfig::new(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(provider) = self.auth.provider()? {
            config = config.with_auth(provider);
        }
        Ok(config)
    }
}

impl AuthConfig {
    /// Returns the provider matching the configured credentials, if any.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidHeader`] for credentials that are not
    /// valid header values.
    pub fn provider(&self) -> Result<Option<StaticAuthProvider>, HttpClientError> {
        if let Some(token) = &self.token {
            return StaticAuthProvider::bearer(token).map(Some);
        }
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => {
                StaticAuthProvider::basic(username, password).map(Some)
            }
            (Some(_), None) => {
                tracing::warn!("auth.username is set without auth.password; sending no credentials");
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

/// Expands `$VAR` and `${VAR}` patterns in `input` using `lookup`.
///
/// Unresolved variables are left as-is.
fn expand_vars(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        let braced = chars.next_if_eq(&'{').is_some();
        let mut name = String::new();
        let mut closed = false;
        while let Some(&c) = chars.peek() {
            if braced && c == '}' {
                chars.next();
                closed = true;
                break;
            }
            if !braced && !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            name.push(c);
            chars.next();
        }

        match lookup(&name).filter(|_| !name.is_empty()) {
            Some(value) => result.push_str(&value),
            None => {
                result.push('$');
                if braced {
                    result.push('{');
                }
                result.push_str(&name);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}
