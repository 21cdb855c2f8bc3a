//! Owner-or-privileged access checks on single resources.

pub mod guard;
pub mod kind;

pub use guard::OwnershipGuard;
pub use kind::{Access, ResourceKind};
