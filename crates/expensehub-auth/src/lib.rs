//! # expensehub-auth
//!
//! Authorization core for ExpenseHub, plus the credential helpers the HTTP
//! layer uses to authenticate callers.
//!
//! ## Modules
//!
//! - `rbac`: feature catalogue, permission table, and the pure decision function
//! - `ownership`: owner-or-privileged checks on single resources
//! - `gate`: turns decisions into allow / deny values for request handling
//! - `principal`: the authenticated actor the gate evaluates
//! - `jwt`: access token creation and validation
//! - `password`: Argon2id hashing and password policy
//!
//! Nothing in `rbac`, `ownership`, or `gate` performs I/O or holds mutable
//! state; the permission table is built once and shared behind an `Arc`.

pub mod error;
pub mod gate;
pub mod jwt;
pub mod ownership;
pub mod password;
pub mod principal;
pub mod rbac;

pub use error::AuthzError;
pub use gate::{Denial, Gate};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use ownership::{Access, OwnershipGuard, ResourceKind};
pub use password::{PasswordHasher, PasswordValidator};
pub use principal::Principal;
pub use rbac::{Feature, RbacEnforcer, RbacPolicies};
