//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use expensehub_auth::{Gate, JwtDecoder, RbacEnforcer};
use expensehub_core::config::AppConfig;
use expensehub_service::{
    AdminUserService, CategoryService, DashboardService, ExpenseService, ReportService,
    UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Permission table and decision function
    pub rbac_enforcer: Arc<RbacEnforcer>,
    /// Request gate over the enforcer
    pub gate: Arc<Gate>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login, profiles
    pub user_service: Arc<UserService>,
    /// Account administration
    pub admin_user_service: Arc<AdminUserService>,
    /// Expense CRUD
    pub expense_service: Arc<ExpenseService>,
    /// Category CRUD
    pub category_service: Arc<CategoryService>,
    /// Summaries and exports
    pub report_service: Arc<ReportService>,
    /// Dashboard
    pub dashboard_service: Arc<DashboardService>,
}
