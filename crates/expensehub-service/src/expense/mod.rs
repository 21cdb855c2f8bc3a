//! Expense recording and retrieval.

pub mod service;

pub use service::{ExpenseService, MAX_AMOUNT_CENTS, NewExpense};
