/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Client-correctable
 *
 * - Validation failures (malformed IDs, missing fields, invalid roles),
 *   raised before any transaction opens
 * - Authentication and authorization failures
 * - Stale versions on item edits (`VersionConflict`)
 * - Attempts to remove or demote the last owner (`LastOwner`)
 *
 * ## Infrastructure
 *
 * - Database and transaction failures (retryable)
 * - Identity provider failures during login
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::access::ownership::is_last_owner_violation;
use crate::shared::{ItemId, SharedError};

/// Backend-specific error types
///
/// Every variant maps to a distinct status code and machine-readable `code`
/// so that clients can tell a stale version from a missing item and a
/// policy violation from a server failure.
///
/// # Usage
///
/// ```rust
/// use sharelist::backend::error::BackendError;
///
/// let err = BackendError::not_found("Item not found");
/// let err = BackendError::forbidden("can_edit required");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Missing or invalid bearer token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller's role lacks the required permission
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Missing row, or an item the caller holds no role on
    #[error("Not found: {0}")]
    NotFound(String),

    /// Optimistic-lock failure: the item moved on since the client read it
    #[error("Item {item_id} has been modified: expected version {expected}, current version {current}")]
    VersionConflict {
        item_id: ItemId,
        expected: i32,
        current: i32,
    },

    /// The ownership guard refused to leave an item without an owner
    #[error("Last owner: {message}")]
    LastOwner {
        /// Message raised by the database guard
        message: String,
    },

    /// State management error (e.g., catalog drift at startup)
    #[error("State error: {message}")]
    StateError {
        /// Human-readable error message
        message: String,
    },

    /// Identity provider failure during the OAuth exchange
    #[error("Identity provider error: {0}")]
    UpstreamError(String),

    /// Shared error (validation, malformed IDs)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database or transaction failure
    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    /// Session token could not be created or verified
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Shorthand for a field validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `SharedError` - 400 Bad Request
    /// - `Unauthorized`, `TokenError` - 401
    /// - `Forbidden` - 403
    /// - `NotFound` - 404
    /// - `VersionConflict`, `LastOwner` - 409
    /// - `UpstreamError` - 502
    /// - `DatabaseError` - 503 on pool exhaustion, 500 otherwise
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized(_) | Self::TokenError(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::VersionConflict { .. } | Self::LastOwner { .. } => StatusCode::CONFLICT,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamError(_) => StatusCode::BAD_GATEWAY,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(sqlx::Error::PoolTimedOut) => StatusCode::SERVICE_UNAVAILABLE,
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code included in response bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::HandlerError { .. } => "handler_error",
            Self::Unauthorized(_) | Self::TokenError(_) => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::VersionConflict { .. } => "version_conflict",
            Self::LastOwner { .. } => "last_owner",
            Self::StateError { .. } => "internal",
            Self::UpstreamError(_) => "identity_provider",
            Self::SharedError(_) => "validation",
            Self::DatabaseError(_) => "database",
            Self::SerializationError(_) => "internal",
        }
    }

    /// Whether a client may retry the same request unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::UpstreamError(_))
    }

    /// Get the error message
    ///
    /// Infrastructure failures are reported generically; the detail goes to
    /// the log instead of the client.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message) => message.clone(),
            Self::VersionConflict { .. } => self.to_string(),
            Self::LastOwner { .. } => "An item must retain at least one owner".to_string(),
            Self::TokenError(_) => "Invalid token".to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::UpstreamError(_) => "Identity provider request failed".to_string(),
            Self::DatabaseError(_) | Self::StateError { .. } | Self::SerializationError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        if is_last_owner_violation(&err) {
            let message = match &err {
                sqlx::Error::Database(db_err) => db_err.message().to_string(),
                other => other.to_string(),
            };
            return Self::LastOwner { message };
        }
        Self::DatabaseError(err)
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        Self::UpstreamError(err.to_string())
    }
}
