/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The PostgreSQL connection pool
 * - The validated configuration (secrets, token lifetime, OAuth client)
 * - A shared HTTP client for identity provider calls
 *
 * No item data is cached here. Every request reads its authorization
 * decision from the database, inside the transaction that acts on it.
 */

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use sqlx::PgPool;
#[cfg(feature = "ssr")]
use std::sync::Arc;
#[cfg(feature = "ssr")]
use crate::shared::AppConfig;

/// Application state shared across all request handlers
///
/// # Thread Safety
///
/// `PgPool` and `reqwest::Client` are internally reference counted and the
/// configuration sits behind an `Arc`, so cloning the state per request is
/// cheap.
#[cfg(feature = "ssr")]
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Validated application configuration
    pub config: Arc<AppConfig>,
    /// HTTP client used for the OAuth code exchange
    pub http_client: reqwest::Client,
}

#[cfg(feature = "ssr")]
impl AppState {
    pub fn new(db_pool: PgPool, config: AppConfig) -> Self {
        Self {
            db_pool,
            config: Arc::new(config),
            http_client: reqwest::Client::new(),
        }
    }
}

/// Implement FromRef for the database pool
///
/// Allows handlers to extract `State<PgPool>` directly.
#[cfg(feature = "ssr")]
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

/// Implement FromRef for the configuration
#[cfg(feature = "ssr")]
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for reqwest::Client {
    fn from_ref(state: &AppState) -> Self {
        state.http_client.clone()
    }
}
