//! Feature keys: the named actions a caller may ask to perform.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A gated action. The `as_str` spelling is the external contract used in
/// configuration, audit dumps, and the client permission map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// See the personal dashboard.
    ViewDashboard,
    /// See report summaries.
    ViewReports,
    /// Browse categories.
    ViewCategories,
    /// Read expense listings and one's own expenses.
    ViewExpenses,
    /// Record a new expense.
    CreateExpense,
    /// Create a category.
    CreateCategory,
    /// Read expenses recorded by anyone.
    ViewAllExpenses,
    /// Modify expenses recorded by anyone.
    EditAllExpenses,
    /// Delete expenses recorded by anyone.
    DeleteAllExpenses,
    /// Modify categories created by anyone.
    EditCategories,
    /// Delete categories created by anyone.
    DeleteCategories,
    /// Export report documents.
    ExportReports,
    /// Approve, reject, re-role, and delete accounts.
    ManageUsers,
}

impl Feature {
    /// Every feature, in catalogue order.
    pub const ALL: [Feature; 13] = [
        Self::ViewDashboard,
        Self::ViewReports,
        Self::ViewCategories,
        Self::ViewExpenses,
        Self::CreateExpense,
        Self::CreateCategory,
        Self::ViewAllExpenses,
        Self::EditAllExpenses,
        Self::DeleteAllExpenses,
        Self::EditCategories,
        Self::DeleteCategories,
        Self::ExportReports,
        Self::ManageUsers,
    ];

    /// The feature key string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewDashboard => "view_dashboard",
            Self::ViewReports => "view_reports",
            Self::ViewCategories => "view_categories",
            Self::ViewExpenses => "view_expenses",
            Self::CreateExpense => "create_expense",
            Self::CreateCategory => "create_category",
            Self::ViewAllExpenses => "view_all_expenses",
            Self::EditAllExpenses => "edit_all_expenses",
            Self::DeleteAllExpenses => "delete_all_expenses",
            Self::EditCategories => "edit_categories",
            Self::DeleteCategories => "delete_categories",
            Self::ExportReports => "export_reports",
            Self::ManageUsers => "manage_users",
        }
    }

    /// Looks up a feature by key. Matching is exact; unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
