//! Expense summaries, exports, and the dashboard.

pub mod dashboard;
pub mod export;
pub mod summary;

pub use dashboard::{Dashboard, DashboardService};
pub use export::{ExportDocument, ExportFormat};
pub use summary::{CategoryTotal, ExpenseSummary, MonthTotal, ReportService};
