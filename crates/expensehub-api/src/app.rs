//! Application builder: wires stores, auth, services, and the router.

use std::sync::Arc;

use axum::Router;
use tracing::{error, info};

use expensehub_auth::{
    Gate, JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator, RbacEnforcer, RbacPolicies,
};
use expensehub_core::config::AppConfig;
use expensehub_core::error::AppError;
use expensehub_core::result::AppResult;
use expensehub_service::{
    AdminUserService, CategoryService, DashboardService, ExpenseService, ReportService,
    UserService,
};
use expensehub_store::{CategoryRepository, ExpenseRepository, UserRepository};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared state over fresh in-memory stores.
///
/// Applies permission overrides from configuration and seeds the
/// bootstrap administrator when one is configured.
pub fn build_state(config: AppConfig) -> AppResult<AppState> {
    // ── Permission table ─────────────────────────────────────────
    let policies = RbacPolicies::from_config(&config.rbac)?;
    policies.validate()?;
    let rbac_enforcer = Arc::new(RbacEnforcer::with_policies(policies));
    let gate = Arc::new(Gate::new(Arc::clone(&rbac_enforcer)));

    // ── Stores ───────────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new());
    let category_repo = Arc::new(CategoryRepository::new());
    let expense_repo = Arc::new(ExpenseRepository::new());

    // ── Credentials ──────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&gate),
        password_hasher,
        password_validator,
        jwt_encoder,
    ));
    let admin_user_service = Arc::new(AdminUserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&category_repo),
        Arc::clone(&expense_repo),
        Arc::clone(&gate),
    ));
    let expense_service = Arc::new(ExpenseService::new(
        Arc::clone(&user_repo),
        Arc::clone(&expense_repo),
        Arc::clone(&category_repo),
        Arc::clone(&gate),
    ));
    let category_service = Arc::new(CategoryService::new(
        Arc::clone(&user_repo),
        Arc::clone(&category_repo),
        Arc::clone(&expense_repo),
        Arc::clone(&gate),
    ));
    let report_service = Arc::new(ReportService::new(
        Arc::clone(&expense_repo),
        Arc::clone(&category_repo),
        Arc::clone(&gate),
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        user_repo,
        category_repo,
        expense_repo,
        Arc::clone(&gate),
    ));

    user_service.seed_admin(&config.seed)?;

    Ok(AppState {
        config: Arc::new(config),
        rbac_enforcer,
        gate,
        jwt_decoder,
        user_service,
        admin_user_service,
        expense_service,
        category_service,
        report_service,
        dashboard_service,
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> AppResult<Router> {
    build_router(state)
}

/// Runs the ExpenseHub server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting ExpenseHub server...");

    config.validate()?;
    let addr = config.server.bind_address();

    let state = build_state(config)?;
    let app = build_app(state)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("ExpenseHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("ExpenseHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
