//! Account registration, login, profiles, and administration.

pub mod admin;
pub mod service;

pub use admin::AdminUserService;
pub use service::{LoginResult, Registration, UserService};
