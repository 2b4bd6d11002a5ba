//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer-token authentication for protected routes, and the
//!   `AuthUser` extractor handlers use to read the result
//! - **`json`** - `ApiJson`, a JSON body extractor that rejects with
//!   `BackendError`
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use sharelist::backend::middleware::auth_middleware;
//!
//! let protected = routes.route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;
pub mod json;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use json::ApiJson;
