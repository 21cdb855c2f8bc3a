//! Principal resolution middleware.
//!
//! Reads a Bearer token, validates it, and re-reads the account from the
//! store so role and status changes apply immediately. The resolved
//! `Principal` is stored as a request extension. Requests without valid
//! credentials continue anonymously through `resolve_principal`;
//! `require_principal` turns them away on authenticated routes before any
//! path, query, or body extraction runs.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use expensehub_auth::Principal;

use crate::error::ApiError;
use crate::state::AppState;

/// Attaches the caller's `Principal` to the request when credentials check out.
pub async fn resolve_principal(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(principal) = authenticate(&state, request.headers()) {
        request.extensions_mut().insert(principal);
    }
    next.run(request).await
}

/// Rejects anonymous and inactive callers with 401.
pub async fn require_principal(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(denial) = state
        .gate
        .authenticate(request.extensions().get::<Principal>())
    {
        return ApiError::from(denial).into_response();
    }
    next.run(request).await
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Option<Principal> {
    let token = bearer_token(headers)?;

    let claims = match state.jwt_decoder.decode(token) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(reason = %e.message, "Bearer token rejected");
            return None;
        }
    };

    let principal = state.user_service.resolve_principal(claims.user_id());
    if principal.is_none() {
        debug!(user_id = claims.user_id(), "Token subject no longer exists");
    }
    principal
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
