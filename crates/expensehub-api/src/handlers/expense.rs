//! Expense handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use expensehub_entity::Id;
use expensehub_entity::expense::Expense;

use crate::dto::request::{CreateExpenseRequest, ExpenseQuery, UpdateExpenseRequest};
use crate::dto::response::{ApiResponse, MessageResponse, ScopedList};
use crate::error::ApiError;
use crate::extractors::{ApiPath, ApiQuery, CurrentPrincipal, ValidatedJson};
use crate::state::AppState;

/// GET /api/expenses
pub async fn list_expenses(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiQuery(query): ApiQuery<ExpenseQuery>,
) -> Result<Json<ApiResponse<ScopedList<Expense>>>, ApiError> {
    let (scope, rows) = state
        .expense_service
        .list(principal.as_ref(), query.filter()?)?;
    Ok(Json(ApiResponse::ok(ScopedList::new(scope, rows))))
}

/// POST /api/expenses
pub async fn create_expense(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ValidatedJson(req): ValidatedJson<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Expense>>), ApiError> {
    let expense = state
        .expense_service
        .create(principal.as_ref(), req.into())?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(expense))))
}

/// GET /api/expenses/{id}
pub async fn get_expense(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(id): ApiPath<Id>,
) -> Result<Json<ApiResponse<Expense>>, ApiError> {
    let expense = state.expense_service.get(principal.as_ref(), id)?;
    Ok(Json(ApiResponse::ok(expense)))
}

/// PUT /api/expenses/{id}
pub async fn update_expense(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(id): ApiPath<Id>,
    ValidatedJson(req): ValidatedJson<UpdateExpenseRequest>,
) -> Result<Json<ApiResponse<Expense>>, ApiError> {
    let expense = state
        .expense_service
        .update(principal.as_ref(), id, req.into())?;
    Ok(Json(ApiResponse::ok(expense)))
}

/// DELETE /api/expenses/{id}
pub async fn delete_expense(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(id): ApiPath<Id>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.expense_service.delete(principal.as_ref(), id)?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "Expense {id} deleted"
    )))))
}
