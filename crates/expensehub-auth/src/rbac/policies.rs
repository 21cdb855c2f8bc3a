//! The permission table: feature → minimum role.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::info;

use expensehub_core::config::RbacConfig;
use expensehub_entity::user::UserRole;

use super::feature::Feature;
use crate::error::AuthzError;

/// Built-in requirements. Each feature appears exactly once.
const DEFAULT_REQUIREMENTS: [(Feature, UserRole); 13] = [
    (Feature::ViewDashboard, UserRole::User),
    (Feature::ViewReports, UserRole::User),
    (Feature::ViewCategories, UserRole::User),
    (Feature::ViewExpenses, UserRole::User),
    (Feature::CreateExpense, UserRole::User),
    (Feature::CreateCategory, UserRole::User),
    (Feature::ViewAllExpenses, UserRole::Accountant),
    (Feature::EditAllExpenses, UserRole::Accountant),
    (Feature::ExportReports, UserRole::Accountant),
    (Feature::DeleteAllExpenses, UserRole::Manager),
    (Feature::EditCategories, UserRole::Manager),
    (Feature::DeleteCategories, UserRole::Manager),
    (Feature::ManageUsers, UserRole::Admin),
];

/// Maps every feature to the lowest role allowed to invoke it.
///
/// A role is granted a feature iff its rank is at least the rank of the
/// feature's minimum role. Keys missing from the table are denied.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    requirements: HashMap<Feature, UserRole>,
}

/// One line of the audit matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRow {
    /// Feature key.
    pub feature: String,
    /// Lowest role granted the feature.
    pub minimum_role: UserRole,
    /// Whether admins are granted.
    pub admin: bool,
    /// Whether managers are granted.
    pub manager: bool,
    /// Whether accountants are granted.
    pub accountant: bool,
    /// Whether users are granted.
    pub user: bool,
}

impl RbacPolicies {
    /// Creates the default table.
    pub fn new() -> Self {
        Self {
            requirements: DEFAULT_REQUIREMENTS.into_iter().collect(),
        }
    }

    /// Creates the default table with configured overrides applied.
    pub fn from_config(config: &RbacConfig) -> Result<Self, AuthzError> {
        Self::with_overrides(&config.overrides)
    }

    /// Applies `feature key → role name` overrides on top of the defaults.
    ///
    /// Fails if any key is not a known feature or any value is not a role.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, AuthzError> {
        let mut policies = Self::new();

        for (key, role_name) in overrides {
            let feature = Feature::from_key(key)
                .ok_or_else(|| AuthzError::MisconfiguredFeature(key.clone()))?;
            let role: UserRole = role_name.parse().map_err(|_| AuthzError::UnknownRole {
                feature: key.clone(),
                role: role_name.clone(),
            })?;

            info!(feature = %feature, minimum_role = %role, "Permission override applied");
            policies.requirements.insert(feature, role);
        }

        Ok(policies)
    }

    /// Returns the minimum role for a feature key, or `None` if the key is
    /// not in the table.
    pub fn requirement(&self, feature: &str) -> Option<UserRole> {
        Feature::from_key(feature).and_then(|f| self.requirement_for(f))
    }

    /// Returns the minimum role for a typed feature.
    pub fn requirement_for(&self, feature: Feature) -> Option<UserRole> {
        self.requirements.get(&feature).copied()
    }

    /// Checks whether the role is granted the feature key.
    pub fn has_permission(&self, role: &UserRole, feature: &str) -> bool {
        self.requirement(feature)
            .is_some_and(|minimum| role.has_at_least(&minimum))
    }

    /// Ensures every catalogued feature has a requirement.
    pub fn validate(&self) -> Result<(), AuthzError> {
        self.validate_features(Feature::ALL.iter().map(Feature::as_str))
    }

    /// Ensures each of the given feature keys has a requirement.
    ///
    /// Call at startup with every key a route depends on.
    pub fn validate_features<'a>(
        &self,
        keys: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), AuthzError> {
        for key in keys {
            if self.requirement(key).is_none() {
                return Err(AuthzError::MisconfiguredFeature(key.to_string()));
            }
        }
        Ok(())
    }

    /// Expands the thresholds into a feature × role grant matrix, in
    /// catalogue order.
    pub fn matrix(&self) -> Vec<PermissionRow> {
        Feature::ALL
            .iter()
            .filter_map(|feature| {
                let minimum_role = self.requirement_for(*feature)?;
                let grants = |role: UserRole| role.has_at_least(&minimum_role);
                Some(PermissionRow {
                    feature: feature.as_str().to_string(),
                    minimum_role,
                    admin: grants(UserRole::Admin),
                    manager: grants(UserRole::Manager),
                    accountant: grants(UserRole::Accountant),
                    user: grants(UserRole::User),
                })
            })
            .collect()
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
