//! Single authorization decision for scripting and audits.

use std::process::ExitCode;

use clap::Args;

use expensehub_auth::{Feature, RbacEnforcer, RbacPolicies};
use expensehub_entity::user::UserRole;

use crate::output;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Role to evaluate (admin, manager, accountant, user)
    #[arg(short, long)]
    pub role: String,

    /// Feature key, e.g. `delete_all_expenses`
    #[arg(long)]
    pub feature: String,
}

/// Execute the check command. Exits with status 2 when denied.
pub fn execute(args: &CheckArgs, config_path: &str) -> anyhow::Result<ExitCode> {
    let config = super::load_config(config_path)?;
    let enforcer = RbacEnforcer::with_policies(RbacPolicies::from_config(&config.rbac)?);
    let role: UserRole = args.role.parse()?;

    if Feature::from_key(&args.feature).is_none() {
        output::print_error(&format!(
            "Unknown feature '{}': denied by default",
            args.feature
        ));
        return Ok(ExitCode::from(2));
    }

    if enforcer.has_permission(&role, &args.feature) {
        output::print_success(&format!("ALLOW: {role} may use '{}'", args.feature));
        Ok(ExitCode::SUCCESS)
    } else {
        let minimum = enforcer
            .policies()
            .requirement(&args.feature)
            .map_or_else(|| "none".to_string(), |r| r.to_string());
        output::print_error(&format!(
            "DENY: {role} may not use '{}' (requires {minimum})",
            args.feature
        ));
        Ok(ExitCode::from(2))
    }
}
