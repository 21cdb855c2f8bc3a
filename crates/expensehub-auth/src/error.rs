//! Programming and configuration errors of the authorization layer.

use thiserror::Error;

use expensehub_core::error::AppError;

/// Errors raised while building or validating the permission table.
///
/// These indicate a bug or a bad deployment, never a user-facing denial,
/// and are expected to surface at startup or in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    /// A route or override references a feature key the table does not know.
    #[error("feature '{0}' is not defined in the permission table")]
    MisconfiguredFeature(String),
    /// An override names a role that does not exist.
    #[error("unknown role '{role}' in override for feature '{feature}'")]
    UnknownRole {
        /// The feature being overridden.
        feature: String,
        /// The unparseable role name.
        role: String,
    },
}

impl From<AuthzError> for AppError {
    fn from(err: AuthzError) -> Self {
        AppError::configuration(err.to_string())
    }
}
