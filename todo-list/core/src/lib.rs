//! Core domain models and state handling for the to-do list client.
//!
//! Tasks live in a remote store reached over HTTP. This crate keeps a local
//! mirror of that collection and applies toggles and deletes optimistically,
//! rolling back to a snapshot when the store rejects the change.
pub mod command;
#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod mutation;
pub mod state;
pub mod store;
pub mod task;

pub use command::{Command, TaskController, execute};
pub use error::TodoError;
pub use mutation::{Mutation, Pending, Rollback};
pub use state::{StateHolder, TodoState};
pub use store::{HttpTaskStore, StoreError, TaskStore};
pub use task::{NewTask, Task, TaskId, TaskUpdate};

/// Address of the remote store used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Connection settings for the remote task store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ClientConfig {
    /// Base URL that `/tasks` is appended to, e.g. `http://localhost:8000/api`.
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
