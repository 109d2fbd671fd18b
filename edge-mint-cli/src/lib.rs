//! Command-line client for Apigee Edge monetization accepted rate plans.
//!
//! # Modules
//!
//! - [`commands`] - Argument parsing and command execution
//! - [`config`] - Configuration file with environment variable expansion
//! - [`error`] - CLI error types

pub mod commands;
pub mod config;
pub mod error;

pub use commands::{Cli, Command};
pub use config::CliConfig;
pub use error::CliError;
