//! # expensehub-store
//!
//! In-memory repositories backing ExpenseHub. Rows live in sharded
//! [`dashmap::DashMap`]s and vanish with the process; nothing is persisted.
//!
//! Repositories never make authorization decisions. Callers fetch rows here
//! and pass the owner id on to the authorization layer.

pub mod category;
pub mod expense;
pub mod sequence;
pub mod user;

pub use category::CategoryRepository;
pub use expense::ExpenseRepository;
pub use user::UserRepository;
