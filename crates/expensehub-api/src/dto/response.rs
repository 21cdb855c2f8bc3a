//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use expensehub_auth::rbac::PermissionRow;
use expensehub_entity::user::User;
use expensehub_service::{ExpenseScope, LoginResult};

use crate::middleware::rbac::GatedRoute;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` when the server answers.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Login response.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Bearer token.
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: &'static str,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated account.
    pub user: User,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            access_token: result.token.access_token,
            token_type: "Bearer",
            expires_at: result.token.expires_at,
            user: result.user,
        }
    }
}

/// A list together with the visibility it was computed under.
#[derive(Debug, Clone, Serialize)]
pub struct ScopedList<T: Serialize> {
    /// Which owners' rows are included.
    pub scope: ExpenseScope,
    /// Number of items.
    pub count: usize,
    /// The rows.
    pub items: Vec<T>,
}

impl<T: Serialize> ScopedList<T> {
    /// Wraps rows with their scope.
    pub fn new(scope: ExpenseScope, items: Vec<T>) -> Self {
        Self {
            scope,
            count: items.len(),
            items,
        }
    }
}

/// Effective permission table for audit.
#[derive(Debug, Clone, Serialize)]
pub struct PermissionMatrixResponse {
    /// Feature × role grants.
    pub features: Vec<PermissionRow>,
    /// Which feature guards each endpoint.
    pub routes: &'static [GatedRoute],
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
