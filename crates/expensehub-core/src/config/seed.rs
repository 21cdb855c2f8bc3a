//! Startup seeding configuration.

use serde::{Deserialize, Serialize};

/// Data created in the in-memory store when the server starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Bootstrap administrator account, created active.
    #[serde(default)]
    pub admin: Option<SeedAdmin>,
}

/// Credentials for the bootstrap administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAdmin {
    /// Login email.
    pub email: String,
    /// Display name.
    #[serde(default = "default_admin_name")]
    pub name: String,
    /// Plaintext password, hashed before storage.
    #[serde(skip_serializing)]
    pub password: String,
}

fn default_admin_name() -> String {
    "Administrator".to_string()
}
