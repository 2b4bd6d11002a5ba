/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT generation and validation for user sessions and
 * for the OAuth `state` parameter.
 *
 * # Tokens
 *
 * - **Session tokens** carry the user ID in `sub` and expire after
 *   `JWT_TTL_HOURS`.
 * - **State tokens** carry a random nonce and live for ten minutes. The
 *   login redirect sends one as `state`; the callback only proceeds if it
 *   comes back intact, without any server-side storage.
 *
 * Both are HS256-signed with `JWT_SECRET`. Their claim sets are disjoint,
 * so one kind never decodes as the other.
 */

#[cfg(feature = "ssr")]
use chrono::{Duration, Utc};
#[cfg(feature = "ssr")]
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ssr")]
use crate::backend::error::BackendError;
#[cfg(feature = "ssr")]
use crate::shared::{AppConfig, UserId};

/// Lifetime of an OAuth state token
#[cfg(feature = "ssr")]
const STATE_TTL_MINUTES: i64 = 10;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Claims of an OAuth `state` token
#[derive(Debug, Serialize, Deserialize)]
pub struct StateClaims {
    pub nonce: String,
    pub exp: i64,
    pub iat: i64,
}

/// Create a session token for a user
///
/// # Arguments
/// * `user_id` - The authenticated user
/// * `config` - Supplies the signing secret and lifetime
///
/// # Returns
/// JWT token string
#[cfg(feature = "ssr")]
pub fn create_token(user_id: UserId, config: &AppConfig) -> Result<String, jsonwebtoken::errors::Error> {
    create_token_with_ttl(user_id, &config.jwt_secret, Duration::hours(config.jwt_ttl_hours))
}

/// Create a session token with an explicit lifetime
#[cfg(feature = "ssr")]
pub fn create_token_with_ttl(
    user_id: UserId,
    secret: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (now + ttl).timestamp(),
        iat: now.timestamp(),
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
}

/// Verify and decode a session token
///
/// # Returns
/// Decoded claims or error
#[cfg(feature = "ssr")]
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}

/// Verify a session token and extract the user ID
///
/// # Errors
/// `Unauthorized` if the token is invalid, expired, or names no valid user ID
#[cfg(feature = "ssr")]
pub fn user_id_from_token(token: &str, secret: &str) -> Result<UserId, BackendError> {
    let claims = verify_token(token, secret).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::unauthorized("Invalid or expired token")
    })?;

    claims.sub.parse::<UserId>().map_err(|_| {
        tracing::warn!(sub = %claims.sub, "Token subject is not a user ID");
        BackendError::unauthorized("Invalid or expired token")
    })
}

/// Create the `state` parameter for an authorization redirect
#[cfg(feature = "ssr")]
pub fn create_state_token(secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = StateClaims {
        nonce: uuid::Uuid::new_v4().to_string(),
        exp: (now + Duration::minutes(STATE_TTL_MINUTES)).timestamp(),
        iat: now.timestamp(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
}

/// Check a `state` parameter returned to the callback
#[cfg(feature = "ssr")]
pub fn verify_state_token(state: &str, secret: &str) -> Result<StateClaims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<StateClaims>(state, &key, &Validation::default())?;
    Ok(token_data.claims)
}
