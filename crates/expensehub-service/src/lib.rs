//! # expensehub-service
//!
//! Business logic for ExpenseHub. Every operation receives the caller as
//! an `Option<&Principal>` and passes it through the [`Gate`] before
//! touching the store, so authorization happens in exactly one layer no
//! matter which surface (HTTP, CLI, tests) invokes it.
//!
//! [`Gate`]: expensehub_auth::Gate

pub mod category;
pub mod expense;
pub mod report;
pub mod scope;
pub mod user;

pub use category::{CategoryService, NewCategory};
pub use expense::{ExpenseService, MAX_AMOUNT_CENTS, NewExpense};
pub use report::{
    Dashboard, DashboardService, ExpenseSummary, ExportDocument, ExportFormat, ReportService,
};
pub use scope::ExpenseScope;
pub use user::{AdminUserService, LoginResult, Registration, UserService};
