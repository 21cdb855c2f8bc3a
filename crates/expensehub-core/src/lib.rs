//! # expensehub-core
//!
//! Core crate for ExpenseHub. Contains configuration schemas, the unified
//! error system, and the result alias shared by every other crate.
//!
//! This crate has **no** internal dependencies on other ExpenseHub crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
