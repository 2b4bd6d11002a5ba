//! Todos Module
//!
//! Todos attached to an item, gated by the item's permissions.

pub mod db;
pub mod handlers;
