//! Configuration management CLI commands.

use std::process::ExitCode;

use clap::{Args, Subcommand};

use expensehub_api::middleware::rbac::validate_routes;
use expensehub_auth::RbacPolicies;

use crate::output::{self, OutputFormat};

const MASK: &str = "********";

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (secrets masked)
    Show,
    /// Validate configuration and permission overrides
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let mut config = super::load_config(config_path)?;

    match &args.command {
        ConfigCommand::Show => {
            config.auth.jwt_secret = MASK.to_string();
            if let Some(admin) = config.seed.admin.as_mut() {
                admin.password = MASK.to_string();
            }
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => {
            config.validate()?;
            let policies = RbacPolicies::from_config(&config.rbac)?;
            policies.validate()?;
            validate_routes(&policies)?;

            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv("Server", &config.server.bind_address());
            output::print_kv("Log format", &config.logging.format);
            output::print_kv(
                "Permission overrides",
                &config.rbac.overrides.len().to_string(),
            );
            output::print_kv(
                "Seed admin",
                config
                    .seed
                    .admin
                    .as_ref()
                    .map_or("none", |admin| admin.email.as_str()),
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
