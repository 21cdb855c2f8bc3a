//! # expensehub-api
//!
//! HTTP API layer for ExpenseHub built on Axum.
//!
//! Provides the REST endpoints, the principal-resolution and logging
//! middleware, extractors, DTOs, and the mapping from `AppError` to
//! HTTP status codes.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
