//! Admin-only handlers.

pub mod permissions;
pub mod users;
