//! Item Data Structures
//!
//! An item is the shared container (a list or a note page) and the unit of
//! access control. Its `content` is an opaque JSON document; `version` is
//! the optimistic-locking counter that starts at 1 and grows by exactly one
//! on every successful edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::ids::ItemId;
use crate::shared::roles::{Permission, Role};

/// Longest accepted item name, matching the column width
pub const MAX_NAME_LEN: usize = 255;

/// An item as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Item {
    pub item_id: ItemId,
    pub name: String,
    pub content: serde_json::Value,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An item together with the caller's access to it
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ItemWithAccess {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub item: Item,
    /// The caller's role on this item
    #[sqlx(try_from = "String")]
    pub role: Role,
    /// Email of whoever shared the item with the caller (absent for owners)
    pub shared_by: Option<String>,
}

/// Single-item read response: the item, the caller's role and the
/// permissions that role resolves to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetail {
    #[serde(flatten)]
    pub access: ItemWithAccess,
    pub permissions: Vec<Permission>,
}

/// Create item request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
}

/// Edit item request
///
/// `version` is the version the client read. It may instead travel in the
/// `If-Match` header as `"<version>"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
    #[serde(default)]
    pub version: Option<i32>,
}

/// Validate an item name
pub fn validate_name(name: &str) -> Result<&str, SharedError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation("name", "Item name cannot be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(SharedError::validation(
            "name",
            format!("Item name cannot exceed {} characters", MAX_NAME_LEN),
        ));
    }
    Ok(trimmed)
}

/// Content stored when a create request carries none
pub fn default_content() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

/// Render a version as a strong entity tag
pub fn version_etag(version: i32) -> String {
    format!("\"{}\"", version)
}

/// Read a version back out of an `If-Match` / `If-None-Match` value.
///
/// Accepts `"3"`, `W/"3"` and a bare `3`.
pub fn parse_version_etag(value: &str) -> Result<i32, SharedError> {
    let tag = value.trim();
    let tag = tag.strip_prefix("W/").unwrap_or(tag);
    let tag = tag.trim_matches('"');
    match tag.parse::<i32>() {
        Ok(version) if version >= 1 => Ok(version),
        _ => Err(SharedError::validation(
            "If-Match",
            format!("Malformed version tag '{}'", value),
        )),
    }
}
