use crate::error::TodoError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the remote store. The client never makes one up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u32);

impl TaskId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for TaskId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task record as returned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Builds a task without timestamps.
    pub fn new(id: impl Into<TaskId>, description: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            is_completed,
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns a copy of this task with only the completion flag changed.
    pub fn with_completed(&self, is_completed: bool) -> Self {
        Self {
            is_completed,
            ..self.clone()
        }
    }
}

/// Body of a create request. New tasks always start incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    description: String,
    is_completed: bool,
}

impl NewTask {
    /// Rejects descriptions that are empty once surrounding whitespace is ignored.
    ///
    /// The description is sent as typed; only the emptiness check trims.
    pub fn new(description: impl Into<String>) -> Result<Self, TodoError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(TodoError::EmptyDescription);
        }
        Ok(Self {
            description,
            is_completed: false,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Body of an update request. Only the completion flag is ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub is_completed: bool,
}
