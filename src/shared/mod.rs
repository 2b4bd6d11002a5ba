//! Shared Module
//!
//! This module contains the types exchanged over the HTTP API and the
//! static reference data they depend on. Nothing here touches the network
//! or the database connection; it is usable without the `ssr` feature.
//!
//! # Overview
//!
//! - **`ids`** - Typed identifiers and their path-parameter parsing
//! - **`roles`** - The role/permission catalog
//! - **`items`**, **`todos`**, **`sharing`** - API payloads
//! - **`error`** - Input validation errors
//! - **`config`** - Application configuration

/// Typed identifiers
pub mod ids;

/// Role/permission catalog
pub mod roles;

/// Item payloads and version tags
pub mod items;

/// Todo and note payloads
pub mod todos;

/// Sharing payloads
pub mod sharing;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, OAuthConfig};
pub use error::SharedError;
pub use ids::{ItemId, NoteId, TodoId, UserId};
pub use items::{Item, ItemDetail, ItemWithAccess};
pub use roles::{Permission, Role};
pub use sharing::{RoleAssignment, ShareRequest};
pub use todos::{Note, Todo};
