/**
 * Server Configuration
 *
 * This module turns the validated `AppConfig` into live resources: the
 * PostgreSQL connection pool with its schema migrated.
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required. Connection or
 * migration failures are returned to the caller and stop startup.
 */

#[cfg(feature = "ssr")]
use sqlx::postgres::{PgPool, PgPoolOptions};
#[cfg(feature = "ssr")]
use std::time::Duration;
#[cfg(feature = "ssr")]
use crate::backend::error::BackendError;
#[cfg(feature = "ssr")]
use crate::shared::AppConfig;

/// Time a request waits for a pooled connection before failing with 503
#[cfg(feature = "ssr")]
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create the connection pool and run migrations
///
/// This function:
/// 1. Creates a PostgreSQL connection pool sized from `DATABASE_MAX_CONNECTIONS`
/// 2. Runs the embedded migrations (schema, catalog seed, ownership guard)
///
/// # Errors
///
/// Returns `BackendError::DatabaseError` if the connection cannot be opened
/// and `BackendError::StateError` if a migration fails.
///
/// # Example
///
/// ```rust,no_run
/// use sharelist::backend::server::config::load_database;
/// use sharelist::shared::AppConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::from_env()?;
/// let pool = load_database(&config).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "ssr")]
pub async fn load_database(config: &AppConfig) -> Result<PgPool, BackendError> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            BackendError::DatabaseError(e)
        })?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool created successfully"
    );

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Apply the embedded migrations to `pool`
#[cfg(feature = "ssr")]
pub async fn run_migrations(pool: &PgPool) -> Result<(), BackendError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        BackendError::state(format!("Migration failed: {}", e))
    })?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
