//! Resource kinds and the feature that governs cross-owner access to each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rbac::Feature;

/// The type of row being accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// An expense row.
    Expense,
    /// A category row.
    Category,
    /// A user account.
    User,
    /// Anything else; only admins may touch someone else's.
    Unknown,
}

/// What the caller wants to do with the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    /// Read.
    View,
    /// Modify.
    Edit,
    /// Remove.
    Delete,
}

impl ResourceKind {
    /// The feature a non-owner needs for this kind of access.
    pub fn governing_feature(&self, access: Access) -> Feature {
        match (self, access) {
            (Self::Expense, Access::View) => Feature::ViewAllExpenses,
            (Self::Expense, Access::Edit) => Feature::EditAllExpenses,
            (Self::Expense, Access::Delete) => Feature::DeleteAllExpenses,
            (Self::Category, Access::View) => Feature::ViewCategories,
            (Self::Category, Access::Edit) => Feature::EditCategories,
            (Self::Category, Access::Delete) => Feature::DeleteCategories,
            (Self::User, _) | (Self::Unknown, _) => Feature::ManageUsers,
        }
    }

    /// Capitalized name for messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Category => "Category",
            Self::User => "User",
            Self::Unknown => "Resource",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parsing never fails: unrecognized names become [`ResourceKind::Unknown`].
impl FromStr for ResourceKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "expense" | "expenses" => Self::Expense,
            "category" | "categories" => Self::Category,
            "user" | "users" => Self::User,
            _ => Self::Unknown,
        })
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Delete => "delete",
        };
        f.write_str(s)
    }
}
