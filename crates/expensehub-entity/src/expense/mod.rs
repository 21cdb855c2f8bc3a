//! Expense entities.

pub mod model;

pub use model::{CreateExpense, Expense, ExpenseChanges, ExpenseFilter};
