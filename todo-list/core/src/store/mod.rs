//! Access to the remote store that owns task records.
//!
//! The store is the source of truth for identifiers and persisted state. The
//! [`TaskStore`] trait keeps the optimistic mutation logic independent of the
//! transport; [`HttpTaskStore`] is the reqwest implementation used by the CLI
//! and the web UI.

use crate::task::{NewTask, Task, TaskId, TaskUpdate};
use thiserror::Error;

mod http;

pub use http::HttpTaskStore;

/// Errors that can occur while talking to the remote store.
///
/// Both variants are treated the same way by callers; they only differ in the
/// reason shown to the user.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The request could not complete (connection refused, DNS, bad body, ...)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The store answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },
}

/// Operations offered by the remote task store.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore {
    /// Fetches the full task list.
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;
    /// Fetches a single task by its identifier.
    async fn get_task(&self, id: TaskId) -> Result<Task, StoreError>;
    /// Creates a task and returns the stored record, including its new identifier.
    async fn create_task(&self, new_task: NewTask) -> Result<Task, StoreError>;
    /// Sends a partial update. The response body is not needed by the client.
    async fn update_task(&self, id: TaskId, update: TaskUpdate) -> Result<(), StoreError>;
    async fn delete_task(&self, id: TaskId) -> Result<(), StoreError>;
}
