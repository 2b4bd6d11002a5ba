//! Todo and Note Data Structures
//!
//! Todos and notes are children of an item. They carry no access control of
//! their own; every operation on them is checked against the parent item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::ids::{ItemId, NoteId, TodoId};

/// Longest accepted todo title, matching the column width
pub const MAX_TITLE_LEN: usize = 255;

/// A todo attached to an item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Todo {
    pub todo_id: TodoId,
    pub item_id: ItemId,
    pub title: String,
    pub body: Option<String>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create or replace a todo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub done: bool,
}

impl TodoRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(SharedError::validation("title", "Todo title cannot be empty"));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(SharedError::validation(
                "title",
                format!("Todo title cannot exceed {} characters", MAX_TITLE_LEN),
            ));
        }
        Ok(())
    }
}

/// A free-text note attached to an item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Note {
    pub note_id: NoteId,
    pub item_id: ItemId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create or replace a note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRequest {
    #[serde(default)]
    pub content: String,
}

impl NoteRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.content.trim().is_empty() {
            return Err(SharedError::validation("content", "Note content cannot be empty"));
        }
        Ok(())
    }
}
