//! Notes Module
//!
//! Free-text notes attached to an item, gated by the item's permissions.

pub mod db;
pub mod handlers;
