//! ExpenseHub server: expense tracking with role-based access control.
//!
//! Main entry point: loads configuration, installs logging, and hands off
//! to the API crate.

use tracing_subscriber::{EnvFilter, fmt};

use expensehub_core::config::AppConfig;
use expensehub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!("Starting ExpenseHub v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = expensehub_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
///
/// `EXPENSEHUB_CONFIG` names an explicit file; otherwise the layered
/// `config/default.toml` + `config/{EXPENSEHUB_ENV}.toml` pair is used.
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("EXPENSEHUB_CONFIG") {
        Ok(path) => AppConfig::load_file(&path),
        Err(_) => {
            let env =
                std::env::var("EXPENSEHUB_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
