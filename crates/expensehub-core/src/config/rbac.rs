//! Permission table configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Adjustments applied once to the built-in permission table at startup.
///
/// ```toml
/// [rbac.overrides]
/// delete_all_expenses = "accountant"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Feature key → minimum role name.
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}
