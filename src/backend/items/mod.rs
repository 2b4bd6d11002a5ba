//! Items Module
//!
//! Items are the shared containers and the unit of access control.
//!
//! - **`db`** - Transactions for create, list, read, versioned edit and delete
//! - **`handlers`** - HTTP handlers, including `ETag` / `If-Match` handling

pub mod db;
pub mod handlers;
