//! The request gate: authorization decisions as request-pipeline outcomes.
//!
//! Per request the gate moves through
//! `Unauthenticated → Authenticated → PermissionChecked → OwnershipChecked`,
//! stopping at the first denial. It never mutates state.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use expensehub_core::error::AppError;
use expensehub_entity::Id;

use crate::ownership::{Access, OwnershipGuard, ResourceKind};
use crate::principal::Principal;
use crate::rbac::{Feature, RbacEnforcer};

/// Why a request may not proceed. Mapped by the HTTP layer to 401/403/404.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Denial {
    /// No verified, active principal.
    #[error("Authentication required")]
    Unauthenticated,
    /// The principal lacks the privilege.
    #[error("{0}")]
    Forbidden(String),
    /// The target resource does not exist.
    #[error("{0} not found")]
    NotFound(String),
}

impl From<Denial> for AppError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::Unauthenticated => AppError::unauthenticated(denial.to_string()),
            Denial::Forbidden(reason) => AppError::forbidden(reason),
            Denial::NotFound(_) => AppError::not_found(denial.to_string()),
        }
    }
}

/// Adapts the decision function and ownership guard to request handling.
#[derive(Debug, Clone)]
pub struct Gate {
    enforcer: Arc<RbacEnforcer>,
    ownership: OwnershipGuard,
}

impl Gate {
    /// Creates a gate over the given enforcer.
    pub fn new(enforcer: Arc<RbacEnforcer>) -> Self {
        let ownership = OwnershipGuard::new(Arc::clone(&enforcer));
        Self {
            enforcer,
            ownership,
        }
    }

    /// Authentication-only check for routes that any signed-in account
    /// may use.
    pub fn authenticate<'a>(
        &self,
        principal: Option<&'a Principal>,
    ) -> Result<&'a Principal, Denial> {
        match principal {
            Some(p) if p.is_active() => Ok(p),
            Some(p) => {
                debug!(principal_id = p.id, status = %p.status, "Inactive principal rejected");
                Err(Denial::Unauthenticated)
            }
            None => {
                debug!("Anonymous request rejected");
                Err(Denial::Unauthenticated)
            }
        }
    }

    /// Feature-gated route check.
    ///
    /// Returns the principal when it is present, active, and granted
    /// `feature`.
    pub fn check<'a>(
        &self,
        principal: Option<&'a Principal>,
        feature: Feature,
    ) -> Result<&'a Principal, Denial> {
        let principal = self.authenticate(principal)?;

        if let Err(denial) = self.enforcer.require_permission(&principal.role, feature) {
            debug!(principal_id = principal.id, role = %principal.role, %feature, "Permission denied");
            return Err(denial);
        }

        Ok(principal)
    }

    /// Ownership-gated route check.
    ///
    /// Runs [`check`](Self::check), then reports `NotFound` if `owner` is
    /// `None` (existence is revealed before authorization), then applies
    /// the ownership guard.
    pub fn check_resource<'a>(
        &self,
        principal: Option<&'a Principal>,
        feature: Feature,
        owner: Option<Id>,
        kind: ResourceKind,
        access: Access,
    ) -> Result<&'a Principal, Denial> {
        let principal = self.check(principal, feature)?;

        let owner_id = owner.ok_or_else(|| Denial::NotFound(kind.label().to_string()))?;

        if self.ownership.can_access_resource(
            principal.id,
            &principal.role,
            owner_id,
            kind,
            access,
        ) {
            return Ok(principal);
        }

        let required = kind.governing_feature(access);
        debug!(
            principal_id = principal.id,
            role = %principal.role,
            owner_id,
            %kind,
            %access,
            %required,
            "Ownership check denied"
        );
        Err(Denial::Forbidden(format!(
            "Role '{}' may not {access} another user's {} (requires '{required}')",
            principal.role,
            kind.label().to_lowercase()
        )))
    }

    /// Whether the principal holds the feature, without producing a denial.
    pub fn allows(&self, principal: &Principal, feature: Feature) -> bool {
        principal.is_active() && self.enforcer.allows(&principal.role, feature)
    }

    /// The enforcer behind this gate.
    pub fn enforcer(&self) -> &RbacEnforcer {
        &self.enforcer
    }
}
