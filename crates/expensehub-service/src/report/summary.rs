//! Aggregated expense reports.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use expensehub_auth::{Feature, Gate, Principal};
use expensehub_core::error::AppError;
use expensehub_core::result::AppResult;
use expensehub_entity::Id;
use expensehub_entity::expense::{Expense, ExpenseFilter};
use expensehub_store::{CategoryRepository, ExpenseRepository};

use super::export::{ExportDocument, ExportFormat, ExportRow, render};
use crate::scope::ExpenseScope;

/// Builds summaries and exports over the caller's visible expenses.
#[derive(Debug, Clone)]
pub struct ReportService {
    expenses: Arc<ExpenseRepository>,
    categories: Arc<CategoryRepository>,
    gate: Arc<Gate>,
}

/// Totals grouped by category and month.
///
/// Amounts in different currencies are never summed together, so every
/// total is keyed by currency as well.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseSummary {
    /// Which expenses were aggregated.
    pub scope: ExpenseScope,
    /// Number of expenses included.
    pub count: usize,
    /// Grand total per currency.
    pub totals: BTreeMap<String, i64>,
    /// Totals per category and currency, largest first.
    pub by_category: Vec<CategoryTotal>,
    /// Totals per calendar month and currency, chronological.
    pub by_month: Vec<MonthTotal>,
}

/// One category line of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    /// Category id.
    pub category_id: Id,
    /// Category name at report time.
    pub category_name: String,
    /// Currency code.
    pub currency: String,
    /// Sum in minor units.
    pub total_cents: i64,
    /// Number of expenses.
    pub count: usize,
}

/// One month line of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthTotal {
    /// `YYYY-MM`.
    pub month: String,
    /// Currency code.
    pub currency: String,
    /// Sum in minor units.
    pub total_cents: i64,
    /// Number of expenses.
    pub count: usize,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        expenses: Arc<ExpenseRepository>,
        categories: Arc<CategoryRepository>,
        gate: Arc<Gate>,
    ) -> Self {
        Self {
            expenses,
            categories,
            gate,
        }
    }

    /// Summarizes the caller's visible expenses.
    pub fn summary(
        &self,
        principal: Option<&Principal>,
        filter: ExpenseFilter,
    ) -> AppResult<ExpenseSummary> {
        let principal = self.gate.check(principal, Feature::ViewReports)?;
        let scope = ExpenseScope::for_principal(&self.gate, principal);
        let rows = self.expenses.find_filtered(&scope.apply(filter));
        summarize(scope, &rows, &self.category_names())
    }

    /// Exports the caller's visible expenses as a downloadable document.
    pub fn export(
        &self,
        principal: Option<&Principal>,
        filter: ExpenseFilter,
        format: ExportFormat,
    ) -> AppResult<ExportDocument> {
        let principal = self.gate.check(principal, Feature::ExportReports)?;
        let scope = ExpenseScope::for_principal(&self.gate, principal);
        let names = self.category_names();

        let rows: Vec<ExportRow> = self
            .expenses
            .find_filtered(&scope.apply(filter))
            .iter()
            .map(|e| ExportRow::new(e, names.get(&e.category_id).map(String::as_str)))
            .collect();

        let document = render(&rows, format)?;
        info!(
            principal_id = principal.id,
            scope = scope.label(),
            rows = rows.len(),
            %format,
            "Expense report exported"
        );
        Ok(document)
    }

    fn category_names(&self) -> HashMap<Id, String> {
        self.categories
            .find_all()
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect()
    }
}

pub(crate) fn summarize(
    scope: ExpenseScope,
    rows: &[Expense],
    names: &HashMap<Id, String>,
) -> AppResult<ExpenseSummary> {
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    let mut by_category: BTreeMap<(Id, String), (i64, usize)> = BTreeMap::new();
    let mut by_month: BTreeMap<(String, String), (i64, usize)> = BTreeMap::new();

    for expense in rows {
        let total = totals.entry(expense.currency.clone()).or_default();
        *total = add_cents(*total, expense.amount_cents)?;

        let slot = by_category
            .entry((expense.category_id, expense.currency.clone()))
            .or_default();
        slot.0 = add_cents(slot.0, expense.amount_cents)?;
        slot.1 += 1;

        let month = expense.spent_on.format("%Y-%m").to_string();
        let slot = by_month
            .entry((month, expense.currency.clone()))
            .or_default();
        slot.0 = add_cents(slot.0, expense.amount_cents)?;
        slot.1 += 1;
    }

    let mut by_category: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|((category_id, currency), (total_cents, count))| CategoryTotal {
            category_id,
            category_name: names
                .get(&category_id)
                .cloned()
                .unwrap_or_else(|| format!("#{category_id}")),
            currency,
            total_cents,
            count,
        })
        .collect();
    by_category.sort_by(|a, b| {
        b.total_cents
            .cmp(&a.total_cents)
            .then(a.category_id.cmp(&b.category_id))
    });

    let by_month = by_month
        .into_iter()
        .map(|((month, currency), (total_cents, count))| MonthTotal {
            month,
            currency,
            total_cents,
            count,
        })
        .collect();

    Ok(ExpenseSummary {
        scope,
        count: rows.len(),
        totals,
        by_category,
        by_month,
    })
}

fn add_cents(total: i64, amount: i64) -> AppResult<i64> {
    total.checked_add(amount).ok_or_else(|| {
        AppError::validation("Expense totals exceed the supported range; narrow the filter")
    })
}
