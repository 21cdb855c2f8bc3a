//! Expense categories.

pub mod service;

pub use service::{CategoryService, NewCategory};
