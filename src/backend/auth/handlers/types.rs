/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the OAuth
 * callback and the user endpoints.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::backend::auth::users::User;
use crate::shared::UserId;

/// Query parameters the identity provider appends to the callback URL
#[derive(Deserialize, Debug, Default)]
pub struct CallbackParams {
    /// Authorization code to exchange
    pub code: Option<String>,
    /// The signed state issued by the login redirect
    pub state: Option<String>,
    /// Set by the provider when the user declined or the request failed
    pub error: Option<String>,
}

/// Auth response
///
/// Returned by the OAuth callback. Contains the session token and user
/// information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Session token (lifetime from `JWT_TTL_HOURS`)
    pub token: String,
    /// User information
    pub user: UserResponse,
}

/// User response
///
/// Contains user information that is safe to return to clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// `GET /api/users/lookup` query
#[derive(Deserialize, Debug)]
pub struct LookupParams {
    #[serde(default)]
    pub email: String,
}

/// `GET /api/users/lookup` response
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct LookupResponse {
    pub user_id: UserId,
}
