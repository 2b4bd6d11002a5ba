/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - Protected routes (items, users) sit behind `auth_middleware`, applied
 *   with `route_layer` so unknown paths still fall through to the 404
 *   fallback instead of answering 401
 * - `CorsLayer` built from `ALLOWED_ORIGINS`
 * - `TraceLayer` for request spans
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, ETAG, IF_MATCH, IF_NONE_MATCH},
        HeaderValue, Method,
    },
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
#[cfg(feature = "ssr")]
use crate::backend::error::conversion::not_found_fallback;
#[cfg(feature = "ssr")]
use crate::backend::middleware::auth::auth_middleware;
#[cfg(feature = "ssr")]
use crate::backend::routes::api_routes::{auth_routes, user_routes};
#[cfg(feature = "ssr")]
use crate::backend::routes::item_routes::item_routes;
#[cfg(feature = "ssr")]
use crate::backend::server::state::AppState;

/// Liveness probe
pub async fn healthcheck() -> &'static str {
    "OK"
}

/// Build the CORS layer
///
/// With no configured origins any origin is allowed, without credentials.
/// With a list, only those origins are allowed and credentials are permitted.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, IF_MATCH, IF_NONE_MATCH])
        .expose_headers([ETAG])
        .max_age(Duration::from_secs(300));

    if allowed_origins.is_empty() {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// ## Public
///
/// - `GET /healthcheck`
/// - `GET /api/auth/login`, `/api/auth/callback`, `/api/auth/logout`
///
/// ## Protected
///
/// - `/api/items/...` - items, sharing, todos and notes
/// - `/api/users/me`, `/api/users/lookup`
///
/// ## Fallback
///
/// Unknown routes answer 404 with the standard JSON error body.
#[cfg(feature = "ssr")]
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = item_routes()
        .merge(user_routes())
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    Router::new()
        .route("/healthcheck", get(healthcheck))
        .merge(auth_routes())
        .merge(protected)
        .fallback(not_found_fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&app_state.config.allowed_origins)),
        )
        .with_state(app_state)
}
