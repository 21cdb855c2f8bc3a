//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::UserRole;
use super::status::UserStatus;
use crate::{Id, Owned};

/// A registered ExpenseHub account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Id,
    /// Login email, unique case-insensitively.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// User role (RBAC).
    pub role: UserRole,
    /// Account status.
    pub status: UserStatus,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the user can log in right now.
    pub fn can_login(&self) -> bool {
        self.status.can_login()
    }
}

/// A user "owns" their own account record.
impl Owned for User {
    fn owner_id(&self) -> Id {
        self.id
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Initial status.
    pub status: UserStatus,
}
