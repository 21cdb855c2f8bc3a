//! # expensehub-entity
//!
//! Domain entity models for ExpenseHub. Every struct in this crate is a row
//! in the in-memory store or a value object around one. Rows that belong to
//! a user expose that relation through [`Owned`].

pub mod category;
pub mod expense;
pub mod user;

/// Numeric identifier shared by users, categories, and expenses.
pub type Id = i64;

/// A row that carries the id of the user who created it.
pub trait Owned {
    /// The owning user's id.
    fn owner_id(&self) -> Id;
}
