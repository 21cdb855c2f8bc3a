//! Landing-page overview for the signed-in user.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;

use expensehub_auth::{Feature, Gate, Principal};
use expensehub_core::result::AppResult;
use expensehub_entity::Id;
use expensehub_entity::expense::{Expense, ExpenseFilter};
use expensehub_entity::user::{UserRole, UserStatus};
use expensehub_store::{CategoryRepository, ExpenseRepository, UserRepository};

use super::summary::{CategoryTotal, summarize};
use crate::scope::ExpenseScope;

const RECENT_LIMIT: usize = 5;
const TOP_CATEGORIES: usize = 3;

/// Builds dashboards.
#[derive(Debug, Clone)]
pub struct DashboardService {
    users: Arc<UserRepository>,
    categories: Arc<CategoryRepository>,
    expenses: Arc<ExpenseRepository>,
    gate: Arc<Gate>,
}

/// Dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Caller's id.
    pub user_id: Id,
    /// Caller's role.
    pub role: UserRole,
    /// Which expenses the figures cover.
    pub scope: ExpenseScope,
    /// Number of expenses in scope.
    pub expense_count: usize,
    /// Grand total per currency.
    pub totals: BTreeMap<String, i64>,
    /// Largest categories by amount.
    pub top_categories: Vec<CategoryTotal>,
    /// Most recent expenses.
    pub recent_expenses: Vec<Expense>,
    /// Number of categories available.
    pub category_count: usize,
    /// Accounts awaiting approval; only present for user managers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_users: Option<usize>,
}

impl DashboardService {
    /// Creates a new dashboard service.
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

    /// Builds the caller's dashboard.
    pub fn build(&self, principal: Option<&Principal>) -> AppResult<Dashboard> {
        let principal = self.gate.check(principal, Feature::ViewDashboard)?;
        let scope = ExpenseScope::for_principal(&self.gate, principal);

        let rows = self
            .expenses
            .find_filtered(&scope.apply(ExpenseFilter::default()));
        let categories = self.categories.find_all();
        let names: HashMap<Id, String> = categories
            .iter()
            .map(|c| (c.id, c.name.clone()))
            .collect();

        let mut summary = summarize(scope, &rows, &names)?;
        summary.by_category.truncate(TOP_CATEGORIES);

        let pending_users = self
            .gate
            .allows(principal, Feature::ManageUsers)
            .then(|| {
                self.users
                    .find_all()
                    .iter()
                    .filter(|u| u.status == UserStatus::Pending)
                    .count()
            });

        Ok(Dashboard {
            user_id: principal.id,
            role: principal.role,
            scope,
            expense_count: rows.len(),
            totals: summary.totals,
            top_categories: summary.by_category,
            recent_expenses: rows.into_iter().take(RECENT_LIMIT).collect(),
            category_count: categories.len(),
            pending_users,
        })
    }
}
