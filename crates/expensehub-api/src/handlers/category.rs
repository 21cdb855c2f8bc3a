//! Category handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use expensehub_entity::Id;
use expensehub_entity::category::Category;

use crate::dto::request::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{ApiPath, CurrentPrincipal, ValidatedJson};
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state.category_service.list(principal.as_ref())?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), ApiError> {
    let category = state
        .category_service
        .create(principal.as_ref(), req.into())?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(id): ApiPath<Id>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state.category_service.get(principal.as_ref(), id)?;
    Ok(Json(ApiResponse::ok(category)))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(id): ApiPath<Id>,
    ValidatedJson(req): ValidatedJson<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state
        .category_service
        .update(principal.as_ref(), id, req.into())?;
    Ok(Json(ApiResponse::ok(category)))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(id): ApiPath<Id>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.category_service.delete(principal.as_ref(), id)?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "Category {id} deleted"
    )))))
}
