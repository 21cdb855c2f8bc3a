//! Expense CRUD with ownership enforcement.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use expensehub_auth::{Access, Feature, Gate, Principal, ResourceKind};
use expensehub_core::error::AppError;
use expensehub_core::result::AppResult;
use expensehub_entity::expense::{CreateExpense, Expense, ExpenseChanges, ExpenseFilter};
use expensehub_entity::{Id, Owned};
use expensehub_store::{CategoryRepository, ExpenseRepository, UserRepository};

use crate::scope::ExpenseScope;

/// Largest accepted amount in minor units (ten billion in major units).
pub const MAX_AMOUNT_CENTS: i64 = 1_000_000_000_000;

/// Manages expense records.
#[derive(Debug, Clone)]
pub struct ExpenseService {
    /// User repository, for owner reference checks.
    users: Arc<UserRepository>,
    /// Expense repository.
    expenses: Arc<ExpenseRepository>,
    /// Category repository, for reference checks.
    categories: Arc<CategoryRepository>,
    /// Authorization gate.
    gate: Arc<Gate>,
}

/// Input for recording an expense. The owner is always the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    /// Category to file the expense under.
    pub category_id: Id,
    /// Amount in minor units.
    pub amount_cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Free-text description.
    pub description: String,
    /// Spend date.
    pub spent_on: NaiveDate,
}

impl ExpenseService {
    /// Creates a new expense service.
    pub fn new(
        users: Arc<UserRepository>,
        expenses: Arc<ExpenseRepository>,
        categories: Arc<CategoryRepository>,
        gate: Arc<Gate>,
    ) -> Self {
        Self {
            users,
            expenses,
            categories,
            gate,
        }
    }

    /// Lists expenses visible to the caller, newest first.
    pub fn list(
        &self,
        principal: Option<&Principal>,
        filter: ExpenseFilter,
    ) -> AppResult<(ExpenseScope, Vec<Expense>)> {
        let principal = self.gate.check(principal, Feature::ViewExpenses)?;
        let scope = ExpenseScope::for_principal(&self.gate, principal);
        let rows = self.expenses.find_filtered(&scope.apply(filter));
        Ok((scope, rows))
    }

    /// Gets a single expense.
    pub fn get(&self, principal: Option<&Principal>, id: Id) -> AppResult<Expense> {
        self.load_authorized(principal, id, Access::View)
    }

    /// Records a new expense owned by the caller.
    pub fn create(&self, principal: Option<&Principal>, input: NewExpense) -> AppResult<Expense> {
        let principal = self.gate.check(principal, Feature::CreateExpense)?;

        validate_amount(input.amount_cents)?;
        let currency = normalize_currency(&input.currency)?;
        let description = normalize_description(&input.description)?;

        let expense = self.with_references(principal.id, input.category_id, || {
            self.expenses.create(CreateExpense {
                owner_id: principal.id,
                category_id: input.category_id,
                amount_cents: input.amount_cents,
                currency,
                description,
                spent_on: input.spent_on,
            })
        })?;

        info!(
            expense_id = expense.id,
            owner_id = expense.owner_id,
            amount_cents = expense.amount_cents,
            "Expense recorded"
        );
        Ok(expense)
    }

    /// Applies a partial update to an expense.
    pub fn update(
        &self,
        principal: Option<&Principal>,
        id: Id,
        mut changes: ExpenseChanges,
    ) -> AppResult<Expense> {
        let current = self.load_authorized(principal, id, Access::Edit)?;

        if let Some(amount) = changes.amount_cents {
            validate_amount(amount)?;
        }
        if let Some(currency) = changes.currency.take() {
            changes.currency = Some(normalize_currency(&currency)?);
        }
        if let Some(description) = changes.description.take() {
            changes.description = Some(normalize_description(&description)?);
        }

        let moved_to = changes
            .category_id
            .filter(|&category_id| category_id != current.category_id);
        let updated = match moved_to {
            Some(category_id) => self
                .categories
                .with_existing(category_id, |_| self.expenses.update(id, changes))
                .ok_or_else(|| AppError::not_found(format!("Category {category_id} not found")))??,
            None => self.expenses.update(id, changes)?,
        };
        info!(expense_id = id, owner_id = updated.owner_id, "Expense updated");
        Ok(updated)
    }

    /// Deletes an expense.
    pub fn delete(&self, principal: Option<&Principal>, id: Id) -> AppResult<()> {
        let expense = self.load_authorized(principal, id, Access::Delete)?;

        if !self.expenses.delete(id) {
            return Err(AppError::not_found(format!("Expense {id} not found")));
        }

        info!(expense_id = id, owner_id = expense.owner_id, "Expense deleted");
        Ok(())
    }

    fn load_authorized(
        &self,
        principal: Option<&Principal>,
        id: Id,
        access: Access,
    ) -> AppResult<Expense> {
        let expense = self.expenses.find_by_id(id);
        self.gate.check_resource(
            principal,
            Feature::ViewExpenses,
            expense.as_ref().map(Owned::owner_id),
            ResourceKind::Expense,
            access,
        )?;
        expense.ok_or_else(|| AppError::not_found(format!("Expense {id} not found")))
    }

    /// Runs `write` while the owner and category rows are read-locked, so
    /// neither can be deleted while the expense row is written.
    fn with_references<R>(
        &self,
        owner_id: Id,
        category_id: Id,
        write: impl FnOnce() -> R,
    ) -> AppResult<R> {
        self.users
            .with_existing(owner_id, |_| {
                self.categories.with_existing(category_id, |_| write())
            })
            .ok_or_else(|| AppError::unauthenticated("Account no longer exists"))?
            .ok_or_else(|| AppError::not_found(format!("Category {category_id} not found")))
    }
}

fn validate_amount(amount_cents: i64) -> AppResult<()> {
    if amount_cents <= 0 {
        return Err(AppError::validation("Amount must be greater than zero"));
    }
    if amount_cents > MAX_AMOUNT_CENTS {
        return Err(AppError::validation(format!(
            "Amount must be at most {MAX_AMOUNT_CENTS} minor units"
        )));
    }
    Ok(())
}

fn normalize_currency(currency: &str) -> AppResult<String> {
    let code = currency.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::validation(format!(
            "Invalid currency code '{currency}'"
        )));
    }
    Ok(code)
}

fn normalize_description(description: &str) -> AppResult<String> {
    let trimmed = description.trim();
    if trimmed.chars().count() > 500 {
        return Err(AppError::validation(
            "Description must be at most 500 characters",
        ));
    }
    Ok(trimmed.to_string())
}
