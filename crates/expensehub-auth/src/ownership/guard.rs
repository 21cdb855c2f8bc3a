//! The ownership guard.

use std::sync::Arc;

use expensehub_entity::Id;
use expensehub_entity::user::UserRole;

use super::kind::{Access, ResourceKind};
use crate::rbac::RbacEnforcer;

/// Grants access to owners unconditionally, and to non-owners whose role
/// holds the feature governing that kind of access.
#[derive(Debug, Clone)]
pub struct OwnershipGuard {
    enforcer: Arc<RbacEnforcer>,
}

impl OwnershipGuard {
    /// Creates a guard that delegates role checks to `enforcer`.
    pub fn new(enforcer: Arc<RbacEnforcer>) -> Self {
        Self { enforcer }
    }

    /// Decides whether `actor_id` acting as `actor_role` may perform
    /// `access` on a `kind` resource owned by `resource_owner_id`.
    ///
    /// Self-ownership is checked first and short-circuits: an owner is
    /// allowed even if their role holds no cross-owner feature.
    pub fn can_access_resource(
        &self,
        actor_id: Id,
        actor_role: &UserRole,
        resource_owner_id: Id,
        kind: ResourceKind,
        access: Access,
    ) -> bool {
        if actor_id == resource_owner_id {
            return true;
        }
        self.enforcer
            .allows(actor_role, kind.governing_feature(access))
    }
}
