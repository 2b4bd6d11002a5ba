//! Integration tests
//!
//! - `router_test` - HTTP behaviour that never reaches the database
//! - `http_test` - HTTP round trips against a real database
//! - `access_test` - Role resolution and permission gating
//! - `items_test` - Item lifecycle and optimistic locking
//! - `sharing_test` - Share, list and revoke
//! - `ownership_test` - The last-owner guard
//! - `children_test` - Todos and notes

pub mod router_test;
pub mod access_test;
pub mod sharing_test;
pub mod ownership_test;

use sharelist::backend::items::db::create_item;
use sharelist::shared::{Item, UserId};
use sqlx::PgPool;

/// Create an item named `name` owned by `owner`
pub async fn seed_item(pool: &PgPool, owner: UserId, name: &str) -> Item {
    create_item(pool, owner, name, &serde_json::json!([]))
        .await
        .expect("Failed to create item")
}
