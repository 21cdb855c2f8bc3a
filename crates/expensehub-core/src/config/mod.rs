//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so a missing file
//! still yields a runnable configuration.

pub mod app;
pub mod auth;
pub mod logging;
pub mod rbac;
pub mod seed;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;
pub use self::rbac::RbacConfig;
pub use self::seed::SeedConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides, e.g. `EXPENSEHUB__SERVER__PORT`.
const ENV_PREFIX: &str = "EXPENSEHUB";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Permission table overrides.
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Startup data seeding.
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml`, and environment
    /// variables prefixed with `EXPENSEHUB__`. Missing files are skipped.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_layers("config/default", Some(&format!("config/{env}")))
    }

    /// Load configuration from an explicit file path plus environment
    /// variable overrides.
    pub fn load_file(path: &str) -> Result<Self, AppError> {
        Self::load_layers(path, None)
    }

    fn load_layers(base: &str, overlay: Option<&str>) -> Result<Self, AppError> {
        let mut builder =
            config::Config::builder().add_source(config::File::with_name(base).required(false));

        if let Some(overlay) = overlay {
            builder = builder.add_source(config::File::with_name(overlay).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Checks cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.len() < 16 {
            return Err(AppError::configuration(
                "auth.jwt_secret must be at least 16 characters",
            ));
        }
        if self.auth.jwt_access_ttl_minutes == 0 {
            return Err(AppError::configuration(
                "auth.jwt_access_ttl_minutes must be greater than zero",
            ));
        }
        if let Some(admin) = &self.seed.admin {
            if admin.email.trim().is_empty() || admin.password.is_empty() {
                return Err(AppError::configuration(
                    "seed.admin requires both email and password",
                ));
            }
        }
        Ok(())
    }
}
