//! Auth handlers: register, login, me, permissions.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use expensehub_entity::user::User;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentPrincipal, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let user = state.user_service.register(req.into())?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let result = state.user_service.login(&req.email, &req.password)?;
    Ok(Json(ApiResponse::ok(result.into())))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.me(principal.as_ref())?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/auth/permissions
pub async fn permissions(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
) -> Result<Json<ApiResponse<BTreeMap<&'static str, bool>>>, ApiError> {
    let map = state.user_service.permissions(principal.as_ref())?;
    Ok(Json(ApiResponse::ok(map)))
}
