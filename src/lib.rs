//! Sharelist - Main Library
//!
//! Sharelist is the backend for a shared to-do and notes application. Users
//! sign in through an OAuth identity provider, create items (lists or note
//! pages), share them with other users as editors or viewers, and attach
//! todos and notes to them.
//!
//! # Module Structure
//!
//! - **`shared`** - API payloads, typed IDs, the role/permission catalog and
//!   configuration. Compiles without the `ssr` feature.
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and route configuration
//!   - Per-item access control backed by PostgreSQL join tables
//!   - Optimistic locking on item edits through a version counter
//!   - OAuth login and JWT sessions
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend and its server dependencies
//!
//! # Usage
//!
//! ```rust,no_run
//! use sharelist::backend::server::init::create_app;
//! use sharelist::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:4000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Invariants
//!
//! - Every item has at least one owner from the moment it is created
//! - An item's version grows by exactly one per successful edit
//! - A user without a role on an item cannot learn that it exists

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
