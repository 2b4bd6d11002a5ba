//! Sharing Data Structures
//!
//! Request and response types for granting, listing and revoking access to
//! an item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::ids::{ItemId, UserId};
use crate::shared::roles::Role;

/// Share request body
///
/// `role` stays a string here so an unknown role is reported as a
/// validation error rather than a JSON rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRequest {
    /// ID of the user to share with
    #[serde(default)]
    pub user_id: i64,
    /// `editor` or `viewer`
    #[serde(default)]
    pub role: String,
}

impl ShareRequest {
    /// Check the body before any transaction opens
    pub fn validate(&self) -> Result<(UserId, Role), SharedError> {
        let target = UserId::new(self.user_id)
            .map_err(|_| SharedError::validation("user_id", "user_id is required"))?;
        if self.role.trim().is_empty() {
            return Err(SharedError::validation("role", "role is required"));
        }
        let role = Role::parse_shareable(self.role.trim())?;
        Ok((target, role))
    }
}

/// One row of the `user_roles` relation, joined with the member's account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct RoleAssignment {
    pub item_id: ItemId,
    pub user_id: UserId,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub email: String,
    pub username: String,
    /// Who granted the role (the creator for owners)
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}
