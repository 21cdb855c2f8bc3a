//! Report handlers: summary and export.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use expensehub_service::ExpenseSummary;

use crate::dto::request::ExpenseQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ApiQuery, CurrentPrincipal};
use crate::state::AppState;

/// GET /api/reports/summary
pub async fn summary(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiQuery(query): ApiQuery<ExpenseQuery>,
) -> Result<Json<ApiResponse<ExpenseSummary>>, ApiError> {
    let summary = state
        .report_service
        .summary(principal.as_ref(), query.filter()?)?;
    Ok(Json(ApiResponse::ok(summary)))
}

/// GET /api/reports/export?format=csv|json
///
/// Responds with the raw document as an attachment rather than the JSON
/// envelope.
pub async fn export(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    ApiQuery(query): ApiQuery<ExpenseQuery>,
) -> Result<Response, ApiError> {
    let filter = query.filter()?;
    let format = query.export_format()?;
    let document = state
        .report_service
        .export(principal.as_ref(), filter, format)?;

    let disposition = format!("attachment; filename=\"{}\"", document.filename);
    Ok((
        [
            (header::CONTENT_TYPE, document.format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.body,
    )
        .into_response())
}
