//! Authentication Module
//!
//! This module handles OAuth login, user records and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - Session and OAuth state tokens
//! - **`oauth`** - Code exchange and userinfo requests to the identity provider
//! - **`handlers`** - HTTP handlers for authentication and user endpoints
//!
//! # Authentication Flow
//!
//! 1. **Login**: Browser is redirected to the provider with a signed `state`
//! 2. **Callback**: Code exchanged → profile fetched → user upserted → session token returned
//! 3. **Requests**: The bearer token is verified by the auth middleware on every protected route
//!
//! # Security
//!
//! - Tokens are HS256 JWTs signed with `JWT_SECRET`
//! - Tokens expire after `JWT_TTL_HOURS` (default 24)
//! - Users are keyed by the provider's subject ID, never by email

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Identity provider client
pub mod oauth;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, UserResponse};
#[cfg(feature = "ssr")]
pub use handlers::{callback, get_me, login, logout, lookup_user};
