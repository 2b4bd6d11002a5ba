/**
 * Login Handlers
 *
 * This module implements the OAuth endpoints:
 *
 * - `GET /api/auth/login` - redirect to the identity provider
 * - `GET /api/auth/callback` - finish the code exchange and issue a session token
 * - `GET /api/auth/logout` - redirect home
 *
 * # Authentication Process
 *
 * 1. Verify the signed `state` parameter
 * 2. Exchange the authorization code for an access token
 * 3. Fetch the user's profile and upsert the user
 * 4. Generate a session token
 * 5. Return token and user info
 *
 * # Security
 *
 * - The `state` round trip is a short-lived signed token, so a forged
 *   callback is rejected without server-side session storage
 * - Provider failures are logged in full but reported to the client as 502
 */

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Json, Redirect},
};
#[cfg(feature = "ssr")]
use crate::backend::auth::oauth::{authorization_url, exchange_code, fetch_profile, PROVIDER};
#[cfg(feature = "ssr")]
use crate::backend::auth::sessions::{create_state_token, create_token, verify_state_token};
#[cfg(feature = "ssr")]
use crate::backend::auth::users::upsert_oauth_user;
use crate::backend::auth::handlers::types::{AuthResponse, CallbackParams};
use crate::backend::error::BackendError;
#[cfg(feature = "ssr")]
use crate::backend::server::state::AppState;

/// Login handler
///
/// Redirects to the identity provider's consent page.
///
/// # Errors
///
/// * `503 Service Unavailable` - If no OAuth client is configured
#[cfg(feature = "ssr")]
pub async fn login(State(state): State<AppState>) -> Result<Redirect, BackendError> {
    let oauth = &state.config.oauth;
    if oauth.client_id.is_empty() {
        tracing::error!("OAuth login requested but GOOGLE_CLIENT_ID is not set");
        return Err(BackendError::handler(
            StatusCode::SERVICE_UNAVAILABLE,
            "OAuth login is not configured",
        ));
    }

    let nonce = create_state_token(&state.config.jwt_secret)?;
    let url = authorization_url(oauth, &nonce)?;

    Ok(Redirect::temporary(url.as_str()))
}

/// OAuth callback handler
///
/// # Errors
///
/// * `400 Bad Request` - If `code` is missing or `state` fails verification
/// * `401 Unauthorized` - If the provider reports an error (e.g. the user declined)
/// * `502 Bad Gateway` - If the code exchange or userinfo request fails
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {
///     "user_id": 7,
///     "username": "Ada Lovelace",
///     "email": "ada@example.com",
///     "created_at": "2024-06-01T12:00:00Z"
///   }
/// }
/// ```
#[cfg(feature = "ssr")]
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Json<AuthResponse>, BackendError> {
    if let Some(error) = params.error {
        tracing::warn!(%error, "Identity provider returned an error");
        return Err(BackendError::unauthorized(format!("Login failed: {}", error)));
    }

    let code = params
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| BackendError::validation("code", "Code not found"))?;

    let nonce = params.state.unwrap_or_default();
    verify_state_token(&nonce, &state.config.jwt_secret).map_err(|e| {
        tracing::warn!("Rejected OAuth state: {}", e);
        BackendError::validation("state", "Invalid or expired state")
    })?;

    let access_token = exchange_code(&state.http_client, &state.config.oauth, &code).await?;
    let profile = fetch_profile(&state.http_client, &state.config.oauth, &access_token).await?;

    let user = upsert_oauth_user(
        &state.db_pool,
        PROVIDER,
        &profile.id,
        &profile.email,
        profile.username(),
    )
    .await?;

    let token = create_token(user.user_id, &state.config)?;

    tracing::info!(user_id = %user.user_id, "User logged in");

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// Logout handler
///
/// Session tokens are stateless; the client discards its token. This only
/// sends the browser home.
#[cfg(feature = "ssr")]
pub async fn logout() -> Redirect {
    Redirect::to("/")
}
