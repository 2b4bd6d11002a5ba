/**
 * API Route Handlers
 *
 * This module defines the routes for authentication and user endpoints.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `GET /api/auth/login` - Redirect to the identity provider
 * - `GET /api/auth/callback` - Complete OAuth and return a session token
 * - `GET /api/auth/logout` - Redirect home
 *
 * ## Users (requires authentication)
 * - `GET /api/users/me` - Current user
 * - `GET /api/users/lookup?email=` - Resolve an email to a user ID
 */

use axum::{routing::get, Router};
#[cfg(feature = "ssr")]
use crate::backend::auth::{callback, get_me, login, logout, lookup_user};
#[cfg(feature = "ssr")]
use crate::backend::server::state::AppState;

/// Public OAuth routes
#[cfg(feature = "ssr")]
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
}

/// User routes
///
/// The caller wraps these in the auth middleware.
#[cfg(feature = "ssr")]
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/me", get(get_me))
        .route("/api/users/lookup", get(lookup_user))
}
