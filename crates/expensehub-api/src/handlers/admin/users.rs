//! Admin user management handlers.

use axum::Json;
use axum::extract::State;

use expensehub_entity::Id;
use expensehub_entity::user::User;

use crate::dto::request::{ChangeRoleRequest, ChangeStatusRequest, UserListQuery};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{ApiPath, ApiQuery, CurrentPrincipal, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiQuery(query): ApiQuery<UserListQuery>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = state
        .admin_user_service
        .list_users(principal.as_ref(), query.status()?)?;
    Ok(Json(ApiResponse::ok(users)))
}

/// PUT /api/admin/users/{id}/status
pub async fn change_status(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(id): ApiPath<Id>,
    ValidatedJson(req): ValidatedJson<ChangeStatusRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state
        .admin_user_service
        .set_status(principal.as_ref(), id, req.status()?)?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/admin/users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(id): ApiPath<Id>,
    ValidatedJson(req): ValidatedJson<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state
        .admin_user_service
        .set_role(principal.as_ref(), id, req.role()?)?;
    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(id): ApiPath<Id>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.admin_user_service.delete_user(principal.as_ref(), id)?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "User {id} deleted"
    )))))
}
