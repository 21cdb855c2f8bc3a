//! User profile handler.

use axum::Json;
use axum::extract::State;

use expensehub_entity::Id;
use expensehub_entity::user::User;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ApiPath, CurrentPrincipal};
use crate::state::AppState;

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiPath(id): ApiPath<Id>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.get_user(principal.as_ref(), id)?;
    Ok(Json(ApiResponse::ok(user)))
}
