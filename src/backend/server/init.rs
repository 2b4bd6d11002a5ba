/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, catalog verification, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Verify the seeded role/permission catalog against the compiled one
 * 3. Create the application state
 * 4. Create and configure the router
 */

#[cfg(feature = "ssr")]
use axum::Router;
#[cfg(feature = "ssr")]
use crate::backend::access::catalog::verify_catalog;
#[cfg(feature = "ssr")]
use crate::backend::error::BackendError;
#[cfg(feature = "ssr")]
use crate::backend::routes::router::create_router;
#[cfg(feature = "ssr")]
use crate::backend::server::config::load_database;
#[cfg(feature = "ssr")]
use crate::backend::server::state::AppState;
#[cfg(feature = "ssr")]
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Startup fails if the database is unreachable, a migration fails, or the
/// seeded catalog disagrees with [`crate::shared::Role::permissions`].
/// Serving requests against a drifted catalog would grant or deny
/// permissions inconsistently, so the server refuses to start instead.
#[cfg(feature = "ssr")]
pub async fn create_app(config: AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing sharelist backend server");

    let db_pool = load_database(&config).await?;
    verify_catalog(&db_pool).await?;

    let app_state = AppState::new(db_pool, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
