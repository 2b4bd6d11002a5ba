//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication and user
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - OAuth login, callback and logout
//! └── me.rs       - Current user and email lookup
//! ```
//!
//! # Handlers
//!
//! - **`login`** - GET /api/auth/login - Redirect to the identity provider
//! - **`callback`** - GET /api/auth/callback - Issue a session token
//! - **`logout`** - GET /api/auth/logout
//! - **`get_me`** - GET /api/users/me
//! - **`lookup_user`** - GET /api/users/lookup?email=

/// Request and response types
pub mod types;

/// OAuth handlers
pub mod login;

/// User handlers
pub mod me;

pub use types::{AuthResponse, UserResponse};

#[cfg(feature = "ssr")]
pub use login::{callback, login, logout};
#[cfg(feature = "ssr")]
pub use me::{get_me, lookup_user};
