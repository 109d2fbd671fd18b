//! Command-line client for Apigee Edge monetization accepted rate plans.
//!
//! # Usage
//!
//! ```bash
//! # List the rate plans a developer may accept
//! edge-mint -o acme --developer dev@example.com eligible
//!
//! # Accept a rate plan for a company
//! edge-mint -o acme --company globex accept plan-1 --start-date 2024-01-01 --quota-target 100
//!
//! # End an existing subscription
//! edge-mint -o acme --developer dev@example.com update sub-42 --end-date 2024-12-31
//!
//! # Configure logging level
//! RUST_LOG=debug edge-mint -o acme --developer dev@example.com list
//! ```
//!
//! # Environment Variables
//!
//! - `EDGE_MINT_CONFIG` - Path to TOML configuration file (default: `edge-mint.toml`)
//! - `EDGE_MINT_BASE_URL` - Override the management API base URL
//! - `EDGE_MINT_ORGANIZATION` - Override the organization
//! - `RUST_LOG` - Log level filter (default: `info`)
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use edge_mint::AcceptedRatePlanController;
use edge_mint_cli::commands::execute;
use edge_mint_cli::{Cli, CliConfig, CliError};
use edge_mint_http::HttpApiClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("edge-mint failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::load()?;
    let organization = cli
        .organization
        .or_else(|| config.organization.clone())
        .ok_or(CliError::MissingOrganization)?;
    let scope = cli.party.scope().ok_or(CliError::MissingParty)?;
    tracing::debug!(
        base_url = %config.base_url,
        organization = %organization,
        "Loaded configuration"
    );

    let client = HttpApiClient::new(config.http_config()?)?;
    let controller = AcceptedRatePlanController::new(organization, scope, client);

    let output = execute(cli.command, &controller).await?;
    print_json(&output)
}

#[allow(clippy::print_stdout)]
fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
