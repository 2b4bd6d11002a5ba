//! Backend Module
//!
//! This module contains all server-side code for sharelist.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database pool
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`access`** - Role/permission evaluation, role assignments, ownership guard
//! - **`items`** - Items and the optimistic-locking edit path
//! - **`sharing`** - Granting, listing and revoking roles
//! - **`todos`**, **`notes`** - Children of an item
//! - **`auth`** - OAuth login, users, session tokens
//! - **`middleware`** - Bearer-token authentication
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── access/         - Access control
//! ├── items/          - Items
//! ├── sharing/        - Sharing workflow
//! ├── todos/          - Todos
//! ├── notes/          - Notes
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Lifecycle
//!
//! 1. `auth_middleware` verifies the bearer token and stores the user ID
//! 2. The handler parses path IDs (400 on malformed input) and validates the body
//! 3. The operation opens a connection or transaction and authorizes the
//!    caller on it through `access::authorize`
//! 4. The write runs on the same transaction and commits, or the
//!    transaction is dropped and rolls back
//! 5. Errors convert to JSON responses through `BackendError`

/// Server initialization and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Per-item access control
pub mod access;

/// Items
pub mod items;

/// Sharing workflow
pub mod sharing;

/// Todos attached to items
pub mod todos;

/// Notes attached to items
pub mod notes;

/// Authentication and user management
pub mod auth;

/// Request middleware
pub mod middleware;

/// Backend-specific error types
pub mod error;

// Re-export commonly used items
pub use server::{create_app, AppState};
pub use error::BackendError;
