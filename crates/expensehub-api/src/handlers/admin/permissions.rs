//! Effective permission table for audit.

use axum::Json;
use axum::extract::State;

use expensehub_auth::Feature;

use crate::dto::response::{ApiResponse, PermissionMatrixResponse};
use crate::error::ApiError;
use crate::extractors::CurrentPrincipal;
use crate::middleware::rbac::GATED_ROUTES;
use crate::state::AppState;

/// GET /api/admin/permissions
pub async fn permission_matrix(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
) -> Result<Json<ApiResponse<PermissionMatrixResponse>>, ApiError> {
    state.gate.check(principal.as_ref(), Feature::ManageUsers)?;

    Ok(Json(ApiResponse::ok(PermissionMatrixResponse {
        features: state.rbac_enforcer.policies().matrix(),
        routes: GATED_ROUTES,
    })))
}
