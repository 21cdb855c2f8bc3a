//! Expense category entities.

pub mod model;

pub use model::{Category, CategoryChanges, CreateCategory};
