//! Typed identifiers
//!
//! Every row in the store is addressed by a positive integer. The newtypes
//! keep item, todo, note and user identifiers from being swapped at call
//! sites and carry the parsing rules for path parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SharedError;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Validate a raw integer as an identifier
            pub fn new(value: i64) -> Result<Self, SharedError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(SharedError::invalid_id($kind, value.to_string()))
                }
            }
        }

        impl FromStr for $name {
            type Err = SharedError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| SharedError::invalid_id($kind, s))?;
                Self::new(value).map_err(|_| SharedError::invalid_id($kind, s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of an item (list or note container)
    ItemId, "item"
);
define_id!(
    /// Identifier of a user account
    UserId, "user"
);
define_id!(
    /// Identifier of a todo within an item
    TodoId, "todo"
);
define_id!(
    /// Identifier of a note within an item
    NoteId, "note"
);
