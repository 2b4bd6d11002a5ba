//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, CORS and tracing layers
//! ├── api_routes.rs   - Auth and user endpoints
//! └── item_routes.rs  - Items, sharing, todos and notes
//! ```

/// Main router creation
pub mod router;

/// Auth and user routes
pub mod api_routes;

/// Item-scoped routes
pub mod item_routes;

#[cfg(feature = "ssr")]
pub use router::create_router;
