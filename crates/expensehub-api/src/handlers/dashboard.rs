//! Dashboard handler.

use axum::Json;
use axum::extract::State;

use expensehub_service::Dashboard;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CurrentPrincipal;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
) -> Result<Json<ApiResponse<Dashboard>>, ApiError> {
    let dashboard = state.dashboard_service.build(principal.as_ref())?;
    Ok(Json(ApiResponse::ok(dashboard)))
}
