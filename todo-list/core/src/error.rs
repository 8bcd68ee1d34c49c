use crate::store::StoreError;
use crate::task::TaskId;
use thiserror::Error;

/// Failures surfaced to the user through the single error slot.
///
/// The `Display` text is what ends up in [`crate::TodoState::error`].
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Task description cannot be empty")]
    EmptyDescription,
    #[error("Failed to load tasks: {0}. Is the backend running?")]
    Load(#[source] StoreError),
    #[error("Failed to add task: {0}")]
    Add(#[source] StoreError),
    #[error("Failed to update task {id}: {source}. Reverting.")]
    Update {
        id: TaskId,
        #[source]
        source: StoreError,
    },
    #[error("Failed to delete task {id}: {source}. Reverting.")]
    Delete {
        id: TaskId,
        #[source]
        source: StoreError,
    },
}
