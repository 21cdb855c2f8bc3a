//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use expensehub_core::error::AppError;
use expensehub_core::result::AppResult;
use expensehub_entity::Id;
use expensehub_entity::category::CategoryChanges;
use expensehub_entity::expense::{ExpenseChanges, ExpenseFilter};
use expensehub_entity::user::{UserRole, UserStatus};
use expensehub_service::{ExportFormat, NewCategory, NewExpense, Registration};

/// Self-registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Password; policy is enforced by the service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email,
            name: req.name,
            password: req.password,
        }
    }
}

/// Login body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// New expense body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    /// Category id.
    pub category_id: Id,
    /// Amount in minor units.
    #[validate(range(
        min = 1,
        max = 1_000_000_000_000i64,
        message = "Amount must be between 1 and 1000000000000 cents"
    ))]
    pub amount_cents: i64,
    /// Currency code, defaults to USD.
    #[serde(default = "default_currency")]
    #[validate(length(equal = 3, message = "Currency must be a 3-letter code"))]
    pub currency: String,
    /// Description.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
    /// Spend date (`YYYY-MM-DD`).
    pub spent_on: NaiveDate,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl From<CreateExpenseRequest> for NewExpense {
    fn from(req: CreateExpenseRequest) -> Self {
        Self {
            category_id: req.category_id,
            amount_cents: req.amount_cents,
            currency: req.currency,
            description: req.description,
            spent_on: req.spent_on,
        }
    }
}

/// Partial expense update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateExpenseRequest {
    /// New category id.
    pub category_id: Option<Id>,
    /// New amount.
    #[validate(range(
        min = 1,
        max = 1_000_000_000_000i64,
        message = "Amount must be between 1 and 1000000000000 cents"
    ))]
    pub amount_cents: Option<i64>,
    /// New currency code.
    #[validate(length(equal = 3, message = "Currency must be a 3-letter code"))]
    pub currency: Option<String>,
    /// New description.
    #[validate(length(max = 500))]
    pub description: Option<String>,
    /// New spend date.
    pub spent_on: Option<NaiveDate>,
}

impl From<UpdateExpenseRequest> for ExpenseChanges {
    fn from(req: UpdateExpenseRequest) -> Self {
        Self {
            category_id: req.category_id,
            amount_cents: req.amount_cents,
            currency: req.currency,
            description: req.description,
            spent_on: req.spent_on,
        }
    }
}

/// New category body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Description.
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Partial category update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    /// New name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    /// New description.
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

impl From<UpdateCategoryRequest> for CategoryChanges {
    fn from(req: UpdateCategoryRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Query parameters for expense listing, summaries, and exports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseQuery {
    /// Only this owner's expenses; ignored for callers limited to their own.
    pub owner_id: Option<Id>,
    /// Only this category.
    pub category_id: Option<Id>,
    /// Inclusive start date.
    pub from: Option<NaiveDate>,
    /// Inclusive end date.
    pub to: Option<NaiveDate>,
    /// Export format (`csv` or `json`); export only.
    pub format: Option<String>,
}

impl ExpenseQuery {
    /// Converts to a store filter, rejecting inverted ranges.
    pub fn filter(&self) -> AppResult<ExpenseFilter> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(AppError::validation("'from' must not be after 'to'"));
            }
        }
        Ok(ExpenseFilter {
            owner_id: self.owner_id,
            category_id: self.category_id,
            from: self.from,
            to: self.to,
        })
    }

    /// Parses the requested export format, defaulting to CSV.
    pub fn export_format(&self) -> AppResult<ExportFormat> {
        self.format
            .as_deref()
            .map_or(Ok(ExportFormat::default()), str::parse)
    }
}

/// Admin user listing query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserListQuery {
    /// Only users in this status.
    pub status: Option<String>,
}

impl UserListQuery {
    /// Parses the status filter.
    pub fn status(&self) -> AppResult<Option<UserStatus>> {
        self.status.as_deref().map(str::parse).transpose()
    }
}

/// Approve / reject body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangeStatusRequest {
    /// `active`, `rejected`, or `pending`.
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

impl ChangeStatusRequest {
    /// Parses the requested status.
    pub fn status(&self) -> AppResult<UserStatus> {
        self.status.parse()
    }
}

/// Role assignment body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangeRoleRequest {
    /// `admin`, `manager`, `accountant`, or `user`.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

impl ChangeRoleRequest {
    /// Parses the requested role.
    pub fn role(&self) -> AppResult<UserRole> {
        self.role.parse()
    }
}
