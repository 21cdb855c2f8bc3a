//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the RBAC system.
///
/// Roles are totally ordered by rank: Admin > Manager > Accountant > User.
/// Feature requirements are expressed as a minimum role and compared by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full system administrator, manages accounts.
    Admin,
    /// Oversees all expenses and the category list.
    Manager,
    /// Reviews and corrects everyone's expenses, exports reports.
    Accountant,
    /// Records and manages their own expenses.
    User,
}

impl UserRole {
    /// Every role, from most to least privileged.
    pub const ALL: [UserRole; 4] = [Self::Admin, Self::Manager, Self::Accountant, Self::User];

    /// Return the rank used for threshold comparisons (higher = more privileged).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Admin => 100,
            Self::Manager => 80,
            Self::Accountant => 60,
            Self::User => 10,
        }
    }

    /// Check if this role ranks at least as high as `other`.
    pub fn has_at_least(&self, other: &UserRole) -> bool {
        self.rank() >= other.rank()
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Accountant => "accountant",
            Self::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = expensehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "accountant" => Ok(Self::Accountant),
            "user" => Ok(Self::User),
            _ => Err(expensehub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, manager, accountant, user"
            ))),
        }
    }
}
