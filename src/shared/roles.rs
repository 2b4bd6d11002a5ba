//! Role and Permission Catalog
//!
//! The static mapping from roles to permissions. The same mapping is seeded
//! into the `roles`, `permissions` and `role_permissions` tables by the
//! initial migration; the backend checks the seeded rows against
//! [`Role::permissions`] at startup.
//!
//! | Role   | can_view | can_edit | can_share | can_delete |
//! |--------|----------|----------|-----------|------------|
//! | owner  | yes      | yes      | yes       | yes        |
//! | editor | yes      | yes      |           |            |
//! | viewer | yes      |          |           |            |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SharedError;

/// Atomic capability on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    CanView,
    CanEdit,
    CanShare,
    CanDelete,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Permission::CanView,
        Permission::CanEdit,
        Permission::CanShare,
        Permission::CanDelete,
    ];

    /// Name stored in the `permissions` table
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::CanView => "can_view",
            Permission::CanEdit => "can_edit",
            Permission::CanShare => "can_share",
            Permission::CanDelete => "can_delete",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SharedError::validation("permission", format!("Unknown permission '{}'", s)))
    }
}

/// Named bundle of permissions held by a user on one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Editor,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Owner, Role::Editor, Role::Viewer];

    /// Name stored in the `roles` table
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }

    /// Permissions granted by this role
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Owner => &Permission::ALL,
            Role::Editor => &[Permission::CanView, Permission::CanEdit],
            Role::Viewer => &[Permission::CanView],
        }
    }

    pub fn allows(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    /// Roles that may be handed out through sharing. Ownership only comes
    /// from creating the item.
    pub fn is_shareable(&self) -> bool {
        !matches!(self, Role::Owner)
    }

    /// Parse a role named in a share request, rejecting `owner`
    pub fn parse_shareable(s: &str) -> Result<Self, SharedError> {
        match s.parse::<Role>() {
            Ok(role) if role.is_shareable() => Ok(role),
            _ => Err(SharedError::validation(
                "role",
                "Invalid role. Must be 'editor' or 'viewer'",
            )),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| SharedError::validation("role", format!("Unknown role '{}'", s)))
    }
}

impl TryFrom<String> for Role {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
