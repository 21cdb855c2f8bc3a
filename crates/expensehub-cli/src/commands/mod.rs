//! CLI command definitions and dispatch.

pub mod check;
pub mod config;
pub mod permissions;
pub mod serve;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use expensehub_core::config::AppConfig;

use crate::output::OutputFormat;

/// ExpenseHub: expense tracking with role-based access control
#[derive(Debug, Parser)]
#[command(name = "expensehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the ExpenseHub server
    Serve(serve::ServeArgs),
    /// Print the effective feature → role permission matrix
    Permissions,
    /// Evaluate a single authorization decision
    Check(check::CheckArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> anyhow::Result<ExitCode> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Permissions => permissions::execute(&self.config, self.format),
            Commands::Check(args) => check::execute(args, &self.config),
            Commands::Config(args) => config::execute(args, &self.config, self.format),
        }
    }
}

/// Helper: load configuration from file plus environment overrides
pub fn load_config(config_path: &str) -> anyhow::Result<AppConfig> {
    AppConfig::load_file(config_path)
        .with_context(|| format!("Failed to load config '{config_path}'"))
}
