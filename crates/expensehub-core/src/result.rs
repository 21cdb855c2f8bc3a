//! Result alias used across the workspace.

use crate::error::AppError;

/// Shorthand for `Result<T, AppError>`, returned by repositories, services,
/// and handlers alike.
pub type AppResult<T> = Result<T, AppError>;
