//! Optimistic mutations and their rollback.
//!
//! A toggle or delete is applied to the local collection before the store has
//! confirmed it. [`TodoState::begin`] takes a full snapshot, applies the change
//! and returns a [`Pending`]. Committing the pending mutation sends the request;
//! on failure it yields a [`Rollback`] carrying the snapshot, which the caller
//! hands back to [`TodoState::rollback`].
//!
//! Overlapping mutations on the same task are not serialized. Each one restores
//! its own snapshot on failure, so whichever response resolves last decides
//! what is displayed.

use crate::error::TodoError;
use crate::state::TodoState;
use crate::store::{StoreError, TaskStore};
use crate::task::{Task, TaskId, TaskUpdate};

/// A change to an existing task that is shown before the store confirms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    SetCompleted { id: TaskId, is_completed: bool },
    Delete { id: TaskId },
}

impl Mutation {
    pub fn id(&self) -> TaskId {
        match self {
            Mutation::SetCompleted { id, .. } | Mutation::Delete { id } => *id,
        }
    }

    /// Returns the collection as it looks once the mutation has been applied.
    ///
    /// Entries not matching the identifier keep their position and contents.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        match *self {
            Mutation::SetCompleted { id, is_completed } => tasks
                .iter()
                .map(|task| {
                    if task.id == id {
                        task.with_completed(is_completed)
                    } else {
                        task.clone()
                    }
                })
                .collect(),
            Mutation::Delete { id } => tasks.iter().filter(|task| task.id != id).cloned().collect(),
        }
    }

    async fn send<S: TaskStore>(&self, store: &S) -> Result<(), StoreError> {
        match *self {
            Mutation::SetCompleted { id, is_completed } => {
                store.update_task(id, TaskUpdate { is_completed }).await
            }
            Mutation::Delete { id } => store.delete_task(id).await,
        }
    }

    fn into_error(self, source: StoreError) -> TodoError {
        match self {
            Mutation::SetCompleted { id, .. } => TodoError::Update { id, source },
            Mutation::Delete { id } => TodoError::Delete { id, source },
        }
    }
}

/// A mutation that has been applied locally but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending mutation must be committed or its snapshot is lost"]
pub struct Pending {
    mutation: Mutation,
    snapshot: Vec<Task>,
}

impl Pending {
    pub fn snapshot(&self) -> &[Task] {
        &self.snapshot
    }

    /// Sends the mutation to the store. The optimistic state is already
    /// authoritative on success, so nothing is returned in that case.
    #[tracing::instrument(skip_all)]
    pub async fn commit<S: TaskStore>(self, store: &S) -> Result<(), Rollback> {
        match self.mutation.send(store).await {
            Ok(()) => {
                tracing::debug!("Store confirmed {:?}", self.mutation);
                Ok(())
            }
            Err(source) => Err(Rollback {
                error: self.mutation.into_error(source),
                snapshot: self.snapshot,
            }),
        }
    }
}

/// A failed mutation together with the collection as it was before it.
#[derive(Debug)]
pub struct Rollback {
    pub error: TodoError,
    pub snapshot: Vec<Task>,
}

impl TodoState {
    /// Clears the error slot, snapshots the collection and applies `mutation`.
    pub fn begin(&mut self, mutation: Mutation) -> Pending {
        self.clear_error();
        let snapshot = self.tasks.clone();
        self.tasks = mutation.apply(&snapshot);
        Pending { mutation, snapshot }
    }

    /// Restores the snapshot of a failed mutation and surfaces its error.
    pub fn rollback(&mut self, rollback: Rollback) -> TodoError {
        self.tasks = rollback.snapshot;
        self.fail(&rollback.error);
        rollback.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockTaskStore;
    use mockall::predicate::*;

    fn tasks() -> Vec<Task> {
        vec![
            Task::new(1, "A", false),
            Task::new(2, "B", false),
            Task::new(3, "C", true),
        ]
    }

    #[test]
    fn set_completed_replaces_only_matching_task() {
        let mutation = Mutation::SetCompleted {
            id: TaskId::new(2),
            is_completed: true,
        };

        let result = mutation.apply(&tasks());

        assert_eq!(
            result,
            vec![
                Task::new(1, "A", false),
                Task::new(2, "B", true),
                Task::new(3, "C", true),
            ]
        );
    }

    #[test]
    fn set_completed_on_unknown_id_changes_nothing() {
        let mutation = Mutation::SetCompleted {
            id: TaskId::new(99),
            is_completed: true,
        };

        assert_eq!(mutation.apply(&tasks()), tasks());
    }

    #[test]
    fn delete_removes_matching_task_and_keeps_order() {
        let mutation = Mutation::Delete { id: TaskId::new(2) };

        let result = mutation.apply(&tasks());

        assert_eq!(result, vec![Task::new(1, "A", false), Task::new(3, "C", true)]);
    }

    #[test]
    fn begin_snapshots_then_applies() {
        // Arrange
        let mut state = TodoState::with_tasks(tasks());
        state.error = Some("previous failure".to_string());

        // Act
        let pending = state.begin(Mutation::Delete { id: TaskId::new(1) });

        // Assert
        assert_eq!(pending.snapshot(), tasks().as_slice());
        assert_eq!(state.tasks.len(), 2);
        assert_eq!(state.error, None);
    }

    #[test]
    fn rollback_restores_snapshot_and_sets_error() {
        // Arrange
        let mut state = TodoState::with_tasks(tasks());
        let _pending = state.begin(Mutation::Delete { id: TaskId::new(1) });
        let rollback = Rollback {
            error: TodoError::Delete {
                id: TaskId::new(1),
                source: StoreError::Status { status: 500 },
            },
            snapshot: tasks(),
        };

        // Act
        let error = state.rollback(rollback);

        // Assert
        assert!(matches!(error, TodoError::Delete { .. }));
        assert_eq!(state.tasks, tasks());
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to delete task 1: HTTP error! status: 500. Reverting.")
        );
    }

    #[tokio::test]
    async fn commit_sends_only_completion_flag() {
        // Arrange
        let mut store = MockTaskStore::new();
        store
            .expect_update_task()
            .with(eq(TaskId::new(1)), eq(TaskUpdate { is_completed: true }))
            .times(1)
            .returning(|_, _| Ok(()));
        let mut state = TodoState::with_tasks(tasks());
        let pending = state.begin(Mutation::SetCompleted {
            id: TaskId::new(1),
            is_completed: true,
        });

        // Act
        let result = pending.commit(&store).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn failed_commit_returns_snapshot() {
        // Arrange
        let mut store = MockTaskStore::new();
        store
            .expect_delete_task()
            .with(eq(TaskId::new(3)))
            .times(1)
            .returning(|_| Err(StoreError::Status { status: 503 }));
        let mut state = TodoState::with_tasks(tasks());
        let pending = state.begin(Mutation::Delete { id: TaskId::new(3) });

        // Act
        let rollback = pending.commit(&store).await.unwrap_err();

        // Assert
        assert_eq!(rollback.snapshot, tasks());
        assert!(matches!(
            rollback.error,
            TodoError::Delete { id, source: StoreError::Status { status: 503 } } if id == TaskId::new(3)
        ));
    }

    #[tokio::test]
    async fn overlapping_toggles_let_the_last_response_win() {
        // Arrange: two toggles of task 1 are started before either resolves
        let mut state = TodoState::with_tasks(vec![Task::new(1, "A", false)]);
        let first = state.begin(Mutation::SetCompleted {
            id: TaskId::new(1),
            is_completed: true,
        });
        let second = state.begin(Mutation::SetCompleted {
            id: TaskId::new(1),
            is_completed: false,
        });
        let mut store = MockTaskStore::new();
        let mut calls = 0;
        store.expect_update_task().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Ok(())
            } else {
                Err(StoreError::Status { status: 500 })
            }
        });

        // Act: the second request fails after the first succeeded
        assert!(first.commit(&store).await.is_ok());
        let rollback = second.commit(&store).await.unwrap_err();
        state.rollback(rollback);

        // Assert: the second snapshot (taken after the first optimistic
        // toggle) is what remains on screen
        assert_eq!(state.tasks, vec![Task::new(1, "A", true)]);
        assert!(state.error.is_some());
    }
}
