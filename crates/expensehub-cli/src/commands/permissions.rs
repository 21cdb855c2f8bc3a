//! Permission matrix dump for compliance review.

use std::process::ExitCode;

use serde::Serialize;
use tabled::Tabled;

use expensehub_auth::RbacPolicies;
use expensehub_auth::rbac::PermissionRow;

use crate::output::{self, OutputFormat};

/// Table row for one feature.
#[derive(Debug, Serialize, Tabled)]
struct MatrixRow {
    #[tabled(rename = "Feature")]
    feature: String,
    #[tabled(rename = "Minimum role")]
    minimum_role: String,
    #[tabled(rename = "admin")]
    admin: &'static str,
    #[tabled(rename = "manager")]
    manager: &'static str,
    #[tabled(rename = "accountant")]
    accountant: &'static str,
    #[tabled(rename = "user")]
    user: &'static str,
}

impl From<&PermissionRow> for MatrixRow {
    fn from(row: &PermissionRow) -> Self {
        Self {
            feature: row.feature.clone(),
            minimum_role: row.minimum_role.to_string(),
            admin: output::mark(row.admin),
            manager: output::mark(row.manager),
            accountant: output::mark(row.accountant),
            user: output::mark(row.user),
        }
    }
}

/// Execute the permissions command
pub fn execute(config_path: &str, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let config = super::load_config(config_path)?;
    let policies = RbacPolicies::from_config(&config.rbac)?;
    let matrix = policies.matrix();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matrix)?);
        }
        OutputFormat::Table => {
            let rows: Vec<MatrixRow> = matrix.iter().map(MatrixRow::from).collect();
            output::print_list(&rows, format);
            if !config.rbac.overrides.is_empty() {
                println!(
                    "{} override(s) applied from configuration.",
                    config.rbac.overrides.len()
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
