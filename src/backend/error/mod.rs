//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` implementation and the 404 fallback
//!
//! # Error Taxonomy
//!
//! | Category | Variant | Status |
//! |---|---|---|
//! | Validation | `SharedError` | 400 |
//! | Authentication | `Unauthorized`, `TokenError` | 401 |
//! | Authorization | `Forbidden` / `NotFound` | 403 / 404 |
//! | Concurrency | `VersionConflict` | 409 |
//! | Integrity | `LastOwner` | 409 |
//! | Infrastructure | `DatabaseError`, `UpstreamError` | 5xx |

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
