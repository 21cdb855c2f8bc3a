//! `CurrentPrincipal` extractor: the caller resolved by the auth middleware.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use expensehub_auth::Principal;

/// The principal attached to the request, if any.
///
/// Never rejects. Handlers pass `as_ref()` to the service layer, where the
/// gate turns a missing principal into `Unauthenticated`.
#[derive(Debug, Clone, Copy)]
pub struct CurrentPrincipal(pub Option<Principal>);

impl CurrentPrincipal {
    /// Borrowed view for service calls.
    pub fn as_ref(&self) -> Option<&Principal> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Principal>().copied()))
    }
}
