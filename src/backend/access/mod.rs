//! Access Control Module
//!
//! Per-item, role-based access control.
//!
//! - **`catalog`** - Startup check of the seeded role/permission rows
//! - **`evaluator`** - `authorize(user, item, permission)`
//! - **`assignments`** - The `user_roles` relation
//! - **`ownership`** - The last-owner invariant

pub mod catalog;
pub mod evaluator;
pub mod assignments;
pub mod ownership;

pub use evaluator::{authorize, permissions_for};
