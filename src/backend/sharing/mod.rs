//! Sharing Module
//!
//! - **`workflow`** - Share, list and revoke, each in one transaction
//! - **`handlers`** - HTTP handlers

pub mod workflow;
pub mod handlers;
