//! Shared test fixtures
//!
//! - `database` - `require_db!`, the migrated pool and row counters
//! - `auth_helpers` - Users, tokens and a router configuration
//! - `assertions` - `assert_ok!`, `assert_contains!`

#[macro_use]
pub mod assertions;

pub use auth_helpers::*;
pub use database::*;
