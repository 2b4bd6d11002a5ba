/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "code": "version_conflict",
 *   "status": 409,
 *   "current_version": 4
 * }
 * ```
 *
 * `current_version` is only present on version conflicts, and `field` only
 * on validation errors. Server errors (5xx) carry `retryable`, true when
 * repeating the request unchanged may succeed.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.code(), "Request failed: {}", self);
        } else {
            tracing::warn!(code = self.code(), "Request rejected: {}", self);
        }

        let mut body = serde_json::json!({
            "error": self.message(),
            "code": self.code(),
            "status": status.as_u16(),
        });
        match &self {
            BackendError::VersionConflict { current, .. } => {
                body["current_version"] = serde_json::json!(current);
            }
            BackendError::SharedError(err) => {
                body["field"] = serde_json::json!(err.field());
            }
            _ => {}
        }
        if status.is_server_error() {
            body["retryable"] = serde_json::json!(self.is_retryable());
        }

        (status, Json(body)).into_response()
    }
}

/// Fallback for unknown routes
pub async fn not_found_fallback() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Route not found")
}
