//! The authenticated actor evaluated by the gate.

use serde::{Deserialize, Serialize};

use expensehub_entity::Id;
use expensehub_entity::user::{User, UserRole, UserStatus};

/// Exactly what the authorization core needs to know about a caller.
///
/// Built by the authentication layer from the stored account, decoupled
/// from token claims and from the full `User` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// User id.
    pub id: Id,
    /// Current role.
    pub role: UserRole,
    /// Current account status.
    pub status: UserStatus,
}

impl Principal {
    /// Creates a principal.
    pub fn new(id: Id, role: UserRole, status: UserStatus) -> Self {
        Self { id, role, status }
    }

    /// Whether the account may act at all.
    pub fn is_active(&self) -> bool {
        self.status.can_login()
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.role, user.status)
    }
}
