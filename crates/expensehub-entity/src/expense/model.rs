//! Expense entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Id, Owned};

/// A single recorded expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique expense identifier.
    pub id: Id,
    /// The user who recorded the expense.
    pub owner_id: Id,
    /// Category the expense is filed under.
    pub category_id: Id,
    /// Amount in minor currency units (cents); always positive.
    pub amount_cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Free-text description.
    pub description: String,
    /// The day the money was spent.
    pub spent_on: NaiveDate,
    /// When the expense was recorded.
    pub created_at: DateTime<Utc>,
    /// When the expense was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Owned for Expense {
    fn owner_id(&self) -> Id {
        self.owner_id
    }
}

/// Data required to record an expense.
#[derive(Debug, Clone)]
pub struct CreateExpense {
    /// Owning user.
    pub owner_id: Id,
    /// Category id.
    pub category_id: Id,
    /// Amount in cents.
    pub amount_cents: i64,
    /// Currency code.
    pub currency: String,
    /// Description.
    pub description: String,
    /// Spend date.
    pub spent_on: NaiveDate,
}

/// Partial update of an expense; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    /// New category id.
    pub category_id: Option<Id>,
    /// New amount in cents.
    pub amount_cents: Option<i64>,
    /// New currency code.
    pub currency: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New spend date.
    pub spent_on: Option<NaiveDate>,
}

/// Query filter for listing expenses.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Restrict to a single owner; `None` means every owner.
    pub owner_id: Option<Id>,
    /// Restrict to a single category.
    pub category_id: Option<Id>,
    /// Inclusive lower bound on `spent_on`.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on `spent_on`.
    pub to: Option<NaiveDate>,
}

impl ExpenseFilter {
    /// Returns whether the expense passes every set criterion.
    pub fn matches(&self, expense: &Expense) -> bool {
        self.owner_id.is_none_or(|id| expense.owner_id == id)
            && self.category_id.is_none_or(|id| expense.category_id == id)
            && self.from.is_none_or(|from| expense.spent_on >= from)
            && self.to.is_none_or(|to| expense.spent_on <= to)
    }
}
