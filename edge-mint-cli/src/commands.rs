//! Command-line arguments and their execution.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use edge_mint::proto::{RatePlan, SubscriptionFlags};
use edge_mint::{
    AcceptOptions, AcceptedRatePlanController, AcceptedRatePlanScope, ApiClient, CompanyScope,
    DeveloperScope,
};
use serde_json::Value;

use crate::error::CliError;

/// Manage accepted rate plans of Apigee Edge monetization.
#[derive(Debug, Parser)]
#[command(name = "edge-mint", version, about, long_about = None)]
pub struct Cli {
    /// Organization to operate on (overrides the configuration file).
    #[arg(long, short = 'o')]
    pub organization: Option<String>,

    /// Developer or company owning the accepted rate plans.
    #[command(flatten)]
    pub party: PartyArgs,

    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Selects the developer or the company variant of the controller.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct PartyArgs {
    /// Developer email or id.
    #[arg(long)]
    pub developer: Option<String>,

    /// Company name.
    #[arg(long)]
    pub company: Option<String>,
}

impl PartyArgs {
    /// Returns the scope addressed by these arguments, if any.
    #[must_use]
    pub fn scope(&self) -> Option<Box<dyn AcceptedRatePlanScope>> {
        if let Some(company) = &self.company {
            return Some(Box::new(CompanyScope::new(company.clone())));
        }
        let developer = self.developer.as_ref()?;
        Some(Box::new(DeveloperScope::new(developer.clone())))
    }
}

/// Available operations.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the rate plans the party may accept, keyed by id.
    Eligible,

    /// Accept a rate plan.
    Accept {
        /// Id of the rate plan to accept.
        rate_plan: String,

        /// First day of the subscription (YYYY-MM-DD).
        #[arg(long)]
        start_date: NaiveDate,

        /// Last day of the subscription (YYYY-MM-DD).
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// Quota target of the subscription.
        #[arg(long)]
        quota_target: Option<u64>,

        /// Ask the server to suppress overlap warnings.
        #[arg(long)]
        suppress_warning: Option<bool>,

        /// Whether a termination charge applies.
        #[arg(long)]
        wave_termination_charge: Option<bool>,
    },

    /// Change an existing subscription.
    Update {
        /// Id of the accepted rate plan.
        id: String,

        /// New last day of the subscription (YYYY-MM-DD).
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// New quota target.
        #[arg(long)]
        quota_target: Option<u64>,

        /// Ask the server to suppress overlap warnings.
        #[arg(long)]
        suppress_warning: Option<bool>,

        /// Whether a termination charge applies.
        #[arg(long)]
        wave_termination_charge: Option<bool>,
    },

    /// Show a single accepted rate plan.
    Load {
        /// Id of the accepted rate plan.
        id: String,
    },

    /// List accepted rate plans, all of them or one page.
    List {
        /// Page to fetch, starting at 1.
        #[arg(long)]
        page: Option<u32>,

        /// Page size.
        #[arg(long)]
        size: Option<u32>,
    },
}

const fn flags(
    suppress_warning: Option<bool>,
    wave_termination_charge: Option<bool>,
) -> SubscriptionFlags {
    SubscriptionFlags {
        suppress_warning,
        wave_termination_charge,
    }
}

/// Executes `command` and returns its result as JSON.
///
/// # Errors
///
/// Returns [`CliError::Controller`] if the API call fails and
/// [`CliError::Output`] if the result cannot be rendered.
pub async fn execute<S, C>(
    command: Command,
    controller: &AcceptedRatePlanController<S, C>,
) -> Result<Value, CliError>
where
    S: AcceptedRatePlanScope,
    C: ApiClient,
{
    let value = match command {
        Command::Eligible => serde_json::to_value(controller.get_all_eligible_rate_plans().await?)?,
        Command::Accept {
            rate_plan,
            start_date,
            end_date,
            quota_target,
            suppress_warning,
            wave_termination_charge,
        } => {
            let options = AcceptOptions {
                end_date,
                quota_target,
                flags: flags(suppress_warning, wave_termination_charge),
            };
            let accepted = controller
                .accept_rate_plan(&RatePlan::new(rate_plan), start_date, options)
                .await?;
            serde_json::to_value(accepted)?
        }
        Command::Update {
            id,
            end_date,
            quota_target,
            suppress_warning,
            wave_termination_charge,
        } => {
            let mut plan = controller.load(&id).await?;
            if end_date.is_some() {
                plan.end_date = end_date;
            }
            if quota_target.is_some() {
                plan.quota_target = quota_target;
            }
            controller
                .update_subscription(&mut plan, flags(suppress_warning, wave_termination_charge))
                .await?;
            serde_json::to_value(plan)?
        }
        Command::Load { id } => serde_json::to_value(controller.load(&id).await?)?,
        Command::List { page: None, size: None } => {
            serde_json::to_value(controller.get_all_accepted_rate_plans().await?)?
        }
        Command::List { page, size } => serde_json::to_value(
            controller
                .get_paginated_accepted_rate_plans(size, page.unwrap_or(1))
                .await?,
        )?,
    };
    Ok(value)
}
