//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod category;
pub mod dashboard;
pub mod expense;
pub mod health;
pub mod report;
pub mod user;
