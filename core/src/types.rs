//! Domain DTOs for the TodoStore API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! of the mock-server crate. Integration tests catch any schema drift between
//! the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Limit applied to `List` when the caller leaves it at zero.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// A single todo as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub memo: String,
    pub created: DateTime<Utc>,
    pub completed: bool,
}

/// The envelope returned by `GET /todos`. Items keep the server's order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    #[serde(default)]
    pub items: Vec<Todo>,
}

/// Options for listing todos. Encoded into the query string.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoListOptions {
    /// Maximum number of todos to return. Zero means `DEFAULT_LIST_LIMIT`.
    pub limit: u32,
}

impl TodoListOptions {
    pub fn with_limit(limit: u32) -> Self {
        Self { limit }
    }

    /// The options actually sent: a zero limit becomes `DEFAULT_LIST_LIMIT`.
    pub fn effective(self) -> Self {
        if self.limit == 0 {
            Self {
                limit: DEFAULT_LIST_LIMIT,
            }
        } else {
            self
        }
    }
}

/// Request payload for creating a todo. Both fields are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoCreateOptions {
    pub title: String,
    pub memo: String,
}

impl TodoCreateOptions {
    pub fn new(title: impl Into<String>, memo: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            memo: memo.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !valid_string(&self.title) {
            return Err(ApiError::Validation("todo title is required".to_string()));
        }
        if !valid_string(&self.memo) {
            return Err(ApiError::Validation("todo memo is required".to_string()));
        }
        Ok(())
    }
}

/// Request payload for updating a todo. Only the fields present in the JSON
/// are sent; how omitted fields are treated is up to the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoUpdateOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoUpdateOptions {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

pub(crate) fn valid_string(v: &str) -> bool {
    !v.is_empty()
}

/// A todo id must be non-empty, not just whitespace, and free of control
/// characters. `.` and `..` are dot-segments to URL resolution, encoded or
/// not, and would escape `todos/{id}`. Anything else is percent-encoded into
/// the path.
pub(crate) fn valid_string_id(v: &str) -> bool {
    !v.trim().is_empty() && !v.chars().any(char::is_control) && v != "." && v != ".."
}
