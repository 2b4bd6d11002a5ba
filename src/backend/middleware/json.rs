/**
 * JSON Body Extractor
 *
 * `ApiJson<T>` is axum's `Json<T>` with the rejection replaced by
 * `BackendError`. Malformed JSON, a wrong field type or a missing
 * `Content-Type` answers 400 with the usual error body instead of axum's
 * plain-text 415/422.
 */

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// Request body extractor whose rejection is a `validation` error
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(BackendError::validation("body", rejection.body_text())),
        }
    }
}
