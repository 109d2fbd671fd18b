//! Error types for the command-line client.

use edge_mint::ControllerError;
use edge_mint_http::HttpClientError;

use crate::config::ConfigError;

/// Errors that abort a CLI invocation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Neither `--organization` nor the configuration names an organization.
    #[error("no organization given; pass --organization or set EDGE_MINT_ORGANIZATION")]
    MissingOrganization,

    /// Neither `--developer` nor `--company` was given.
    #[error("no party given; pass --developer or --company")]
    MissingParty,

    /// The HTTP client could not be built.
    #[error("client error: {0}")]
    Client(#[from] HttpClientError),

    /// The management API call failed.
    #[error(transparent)]
    Controller(#[from] ControllerError),

    /// The result could not be rendered as JSON.
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
