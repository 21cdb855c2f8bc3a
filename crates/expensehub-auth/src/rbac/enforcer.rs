//! The authorization decision function.

use std::collections::BTreeMap;

use expensehub_entity::user::UserRole;

use super::feature::Feature;
use super::policies::RbacPolicies;
use crate::gate::Denial;

/// Answers "may this role invoke this feature?" against one immutable table.
///
/// Every consumer (request gate, ownership guard, client permission map,
/// CLI audit) evaluates through this type so the table is encoded once.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates an enforcer over the default table.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Creates an enforcer over a custom table.
    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// Pure, total decision over any feature key. Unknown keys deny.
    pub fn has_permission(&self, role: &UserRole, feature: &str) -> bool {
        self.policies.has_permission(role, feature)
    }

    /// Typed form of [`has_permission`](Self::has_permission).
    pub fn allows(&self, role: &UserRole, feature: Feature) -> bool {
        self.has_permission(role, feature.as_str())
    }

    /// Returns `Ok(())` if allowed, or a `Forbidden` denial with a reason.
    pub fn require_permission(&self, role: &UserRole, feature: Feature) -> Result<(), Denial> {
        if self.allows(role, feature) {
            Ok(())
        } else {
            Err(Denial::Forbidden(format!(
                "Role '{role}' does not have permission '{feature}'"
            )))
        }
    }

    /// Feature key → granted, for every catalogued feature. Used for
    /// client-side visibility; the server gate stays authoritative.
    pub fn permissions_for_role(&self, role: &UserRole) -> BTreeMap<&'static str, bool> {
        Feature::ALL
            .iter()
            .map(|f| (f.as_str(), self.allows(role, *f)))
            .collect()
    }

    /// Returns a reference to the underlying table.
    pub fn policies(&self) -> &RbacPolicies {
        &self.policies
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}
