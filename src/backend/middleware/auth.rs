/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies session tokens from the
 * Authorization header and provides the user ID to handlers.
 *
 * The middleware does not touch the database. A token for a user that has
 * since been deleted passes here and fails later with 404, which keeps
 * authentication a pure function of the token and the signing secret.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use crate::backend::auth::sessions::user_id_from_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::UserId;

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Pull the token out of a `Bearer <token>` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the Authorization header
/// 2. Verifies the token against `JWT_SECRET`
/// 3. Attaches the user ID to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the token is missing or invalid
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Authorization header required")
        })?;

    let token = bearer_token(auth_header).ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::unauthorized("Authorization header must be 'Bearer <token>'")
    })?;

    let user_id = user_id_from_token(token, &app_state.config.jwt_secret)?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// This can be used as a parameter in handlers to automatically extract
/// the authenticated user from request extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("Authentication required")
            })?;

        Ok(AuthUser(user))
    }
}
