//! Expense repository.

use chrono::Utc;
use dashmap::DashMap;

use expensehub_core::error::AppError;
use expensehub_core::result::AppResult;
use expensehub_entity::Id;
use expensehub_entity::expense::{CreateExpense, Expense, ExpenseChanges, ExpenseFilter};

use crate::sequence::IdSequence;

/// Repository for recorded expenses.
#[derive(Debug, Default)]
pub struct ExpenseRepository {
    rows: DashMap<Id, Expense>,
    ids: IdSequence,
}

impl ExpenseRepository {
    /// Create an empty expense repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new expense.
    pub fn create(&self, data: CreateExpense) -> Expense {
        let now = Utc::now();
        let expense = Expense {
            id: self.ids.next_id(),
            owner_id: data.owner_id,
            category_id: data.category_id,
            amount_cents: data.amount_cents,
            currency: data.currency,
            description: data.description,
            spent_on: data.spent_on,
            created_at: now,
            updated_at: now,
        };
        self.rows.insert(expense.id, expense.clone());
        expense
    }

    /// Find an expense by primary key.
    pub fn find_by_id(&self, id: Id) -> Option<Expense> {
        self.rows.get(&id).map(|row| row.clone())
    }

    /// List expenses matching the filter, newest spend date first.
    pub fn find_filtered(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        let mut expenses: Vec<Expense> = self
            .rows
            .iter()
            .filter(|row| filter.matches(row.value()))
            .map(|row| row.clone())
            .collect();
        expenses.sort_by(|a, b| b.spent_on.cmp(&a.spent_on).then(b.id.cmp(&a.id)));
        expenses
    }

    /// Number of expenses filed under a category.
    pub fn count_in_category(&self, category_id: Id) -> usize {
        self.rows
            .iter()
            .filter(|row| row.category_id == category_id)
            .count()
    }

    /// Whether any expense belongs to the given user.
    pub fn exists_for_owner(&self, owner_id: Id) -> bool {
        self.rows.iter().any(|row| row.owner_id == owner_id)
    }

    /// Apply a partial update.
    pub fn update(&self, id: Id, changes: ExpenseChanges) -> AppResult<Expense> {
        let mut row = self
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Expense {id} not found")))?;
        if let Some(category_id) = changes.category_id {
            row.category_id = category_id;
        }
        if let Some(amount_cents) = changes.amount_cents {
            row.amount_cents = amount_cents;
        }
        if let Some(currency) = changes.currency {
            row.currency = currency;
        }
        if let Some(description) = changes.description {
            row.description = description;
        }
        if let Some(spent_on) = changes.spent_on {
            row.spent_on = spent_on;
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    /// Remove an expense. Returns `false` if no such expense existed.
    pub fn delete(&self, id: Id) -> bool {
        self.rows.remove(&id).is_some()
    }
}
