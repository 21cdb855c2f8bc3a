//! Role-based access control: feature catalogue, permission table, and
//! the decision function.

pub mod enforcer;
pub mod feature;
pub mod policies;

pub use enforcer::RbacEnforcer;
pub use feature::Feature;
pub use policies::{PermissionRow, RbacPolicies};
