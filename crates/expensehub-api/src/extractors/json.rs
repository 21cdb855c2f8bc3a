//! JSON body extractor that runs `validator` rules.

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::extract::rejection::JsonRejection;
use serde::de::DeserializeOwned;
use validator::Validate;

use expensehub_core::error::AppError;

use crate::error::ApiError;

/// Like `Json<T>`, but rejects bodies that fail `T::validate()` with a
/// 400 carrying the first violated rule's message.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::validation(first_message(&errors)))?;

        Ok(Self(value))
    }
}

fn first_message(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for '{field}'"),
            })
        })
        .unwrap_or_else(|| "Invalid request body".to_string())
}
