/**
 * User Model and Database Operations
 *
 * Users are created on their first successful OAuth login and keyed by the
 * identity provider's subject ID. Email and username are refreshed from the
 * provider on every later login; the provider ID never changes.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ssr")]
use sqlx::{PgExecutor, PgPool};
use crate::shared::UserId;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_id: UserId,
    /// Display name from the provider (not unique)
    pub username: String,
    pub email: String,
    /// Subject identifier at the identity provider
    #[serde(skip_serializing)]
    pub provider_user_id: String,
    pub provider: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "ssr")]
const USER_COLUMNS: &str =
    "user_id, username, email, provider_user_id, provider, created_at, updated_at";

/// Create the user for a provider identity, or refresh it if it exists
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `provider` - Identity provider name (e.g. `google`)
/// * `provider_user_id` - The provider's stable subject ID
/// * `email` - Email reported by the provider
/// * `username` - Display name reported by the provider
///
/// # Returns
/// The stored user
#[cfg(feature = "ssr")]
pub async fn upsert_oauth_user(
    pool: &PgPool,
    provider: &str,
    provider_user_id: &str,
    email: &str,
    username: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (email, username, provider_user_id, provider)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (provider_user_id)
        DO UPDATE SET email = EXCLUDED.email,
                      username = EXCLUDED.username,
                      updated_at = NOW()
        RETURNING {}
        "#,
        USER_COLUMNS
    ))
    .bind(email)
    .bind(username)
    .bind(provider_user_id)
    .bind(provider)
    .fetch_one(pool)
    .await
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
#[cfg(feature = "ssr")]
pub async fn get_user_by_id<'e, E>(executor: E, user_id: UserId) -> Result<Option<User>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE user_id = $1", USER_COLUMNS))
        .bind(user_id)
        .fetch_optional(executor)
        .await
}

/// Get user by email
///
/// Emails are compared exactly as stored.
#[cfg(feature = "ssr")]
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS))
        .bind(email)
        .fetch_optional(pool)
        .await
}

#[cfg(feature = "ssr")]
pub async fn user_exists<'e, E>(executor: E, user_id: UserId) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE user_id = $1)")
        .bind(user_id)
        .fetch_one(executor)
        .await
}
