//! Administrator account management: approval, roles, removal.

use std::sync::Arc;

use tracing::info;

use expensehub_auth::{Feature, Gate, Principal};
use expensehub_core::error::AppError;
use expensehub_core::result::AppResult;
use expensehub_entity::Id;
use expensehub_entity::user::{User, UserRole, UserStatus};
use expensehub_store::{CategoryRepository, ExpenseRepository, UserRepository};

/// Account administration, all gated on `manage_users`.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    users: Arc<UserRepository>,
    categories: Arc<CategoryRepository>,
    expenses: Arc<ExpenseRepository>,
    gate: Arc<Gate>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        users: Arc<UserRepository>,
        categories: Arc<CategoryRepository>,
        expenses: Arc<ExpenseRepository>,
        gate: Arc<Gate>,
    ) -> Self {
        Self {
            users,
            categories,
            expenses,
            gate,
        }
    }

    /// Lists all accounts, optionally only those with the given status.
    pub fn list_users(
        &self,
        principal: Option<&Principal>,
        status: Option<UserStatus>,
    ) -> AppResult<Vec<User>> {
        self.gate.check(principal, Feature::ManageUsers)?;
        Ok(self
            .users
            .find_all()
            .into_iter()
            .filter(|u| status.is_none_or(|s| u.status == s))
            .collect())
    }

    /// Approves or rejects an account.
    pub fn set_status(
        &self,
        principal: Option<&Principal>,
        id: Id,
        status: UserStatus,
    ) -> AppResult<User> {
        let admin = self.gate.check(principal, Feature::ManageUsers)?;
        if admin.id == id {
            return Err(AppError::validation(
                "Administrators cannot change their own status",
            ));
        }

        let user = self.users.update_status(id, status)?;
        info!(admin_id = admin.id, user_id = id, %status, "User status changed");
        Ok(user)
    }

    /// Assigns a new role.
    pub fn set_role(
        &self,
        principal: Option<&Principal>,
        id: Id,
        role: UserRole,
    ) -> AppResult<User> {
        let admin = self.gate.check(principal, Feature::ManageUsers)?;
        if admin.id == id {
            return Err(AppError::validation(
                "Administrators cannot change their own role",
            ));
        }

        let user = self.users.update_role(id, role)?;
        info!(admin_id = admin.id, user_id = id, %role, "User role changed");
        Ok(user)
    }

    /// Removes an account that owns no expenses or categories.
    pub fn delete_user(&self, principal: Option<&Principal>, id: Id) -> AppResult<()> {
        let admin = self.gate.check(principal, Feature::ManageUsers)?;
        if admin.id == id {
            return Err(AppError::validation(
                "Administrators cannot delete their own account",
            ));
        }

        self.users.delete_unreferenced(id, || {
            self.expenses.exists_for_owner(id) || self.categories.exists_for_owner(id)
        })?;

        info!(admin_id = admin.id, user_id = id, "User deleted");
        Ok(())
    }
}
