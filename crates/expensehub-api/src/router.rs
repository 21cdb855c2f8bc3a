//! Route definitions for the ExpenseHub HTTP API.
//!
//! All routes are mounted under `/api`. Everything except health,
//! registration, and login sits behind `require_principal`. Every gated
//! route is also listed in
//! [`GATED_ROUTES`](crate::middleware::rbac::GATED_ROUTES) and checked
//! against the permission table before the router is built.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use expensehub_core::result::AppResult;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Fails with a configuration error if a route references a feature
/// missing from the permission table.
pub fn build_router(state: AppState) -> AppResult<Router> {
    middleware::rbac::validate_routes(state.rbac_enforcer.policies())?;

    let authenticated = Router::new()
        .merge(account_routes())
        .merge(dashboard_routes())
        .merge(expense_routes())
        .merge(category_routes())
        .merge(report_routes())
        .merge(user_routes())
        .merge(admin_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_principal,
        ));

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(authenticated);

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(state.config.server.body_limit_bytes))
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::resolve_principal,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Registration and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// The caller's own account
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/permissions", get(handlers::auth::permissions))
}

fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::dashboard::dashboard))
}

/// Expense CRUD
fn expense_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/expenses",
            get(handlers::expense::list_expenses).post(handlers::expense::create_expense),
        )
        .route(
            "/expenses/{id}",
            get(handlers::expense::get_expense)
                .put(handlers::expense::update_expense)
                .delete(handlers::expense::delete_expense),
        )
}

/// Category CRUD
fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(handlers::category::list_categories).post(handlers::category::create_category),
        )
        .route(
            "/categories/{id}",
            get(handlers::category::get_category)
                .put(handlers::category::update_category)
                .delete(handlers::category::delete_category),
        )
}

/// Summaries and exports
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports/summary", get(handlers::report::summary))
        .route("/reports/export", get(handlers::report::export))
}

fn user_routes() -> Router<AppState> {
    Router::new().route("/users/{id}", get(handlers::user::get_user))
}

/// Account administration and permission audit
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route(
            "/admin/users/{id}",
            delete(handlers::admin::users::delete_user),
        )
        .route(
            "/admin/users/{id}/status",
            put(handlers::admin::users::change_status),
        )
        .route(
            "/admin/users/{id}/role",
            put(handlers::admin::users::change_role),
        )
        .route(
            "/admin/permissions",
            get(handlers::admin::permissions::permission_matrix),
        )
}
