//! User intents and the single update function that runs them.

use crate::error::TodoError;
use crate::mutation::Mutation;
use crate::state::{StateHolder, TodoState};
use crate::store::TaskStore;
use crate::task::{NewTask, Task, TaskId};

/// Something the user asked for: submit the form, tick a box, press delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load,
    Add { description: String },
    SetCompleted { id: TaskId, is_completed: bool },
    Delete { id: TaskId },
}

/// Runs `command` against `store`, keeping the state in `holder` in step.
///
/// Toggles and deletes are optimistic and rolled back on failure. Adds are a
/// plain round trip: nothing is appended until the store returns the record.
/// The state is only borrowed between awaits, never across one.
pub async fn execute<H, S>(holder: &mut H, store: &S, command: Command) -> Result<(), TodoError>
where
    H: StateHolder,
    S: TaskStore,
{
    match command {
        Command::Load => {
            holder.update(TodoState::begin_load);
            let result = store.list_tasks().await;
            holder.update(|state| state.finish_load(result))
        }
        Command::Add { description } => {
            let new_task = NewTask::new(description)?;
            holder.update(TodoState::clear_error);
            match store.create_task(new_task).await {
                Ok(task) => {
                    tracing::info!("Added task {}", task.id);
                    holder.update(|state| state.append(task));
                    Ok(())
                }
                Err(e) => {
                    let error = TodoError::Add(e);
                    holder.update(|state| state.fail(&error));
                    Err(error)
                }
            }
        }
        Command::SetCompleted { id, is_completed } => {
            run_optimistic(holder, store, Mutation::SetCompleted { id, is_completed }).await
        }
        Command::Delete { id } => run_optimistic(holder, store, Mutation::Delete { id }).await,
    }
}

async fn run_optimistic<H, S>(holder: &mut H, store: &S, mutation: Mutation) -> Result<(), TodoError>
where
    H: StateHolder,
    S: TaskStore,
{
    let pending = holder.update(|state| state.begin(mutation));
    match pending.commit(store).await {
        Ok(()) => Ok(()),
        Err(rollback) => Err(holder.update(|state| state.rollback(rollback))),
    }
}

/// Owns a store and the state mirrored from it.
pub struct TaskController<S: TaskStore> {
    store: S,
    state: TodoState,
}

impl<S: TaskStore> TaskController<S> {
    /// Starts in the mount state: loading, with no tasks.
    pub fn new(store: S) -> Self {
        Self::with_state(store, TodoState::default())
    }

    pub fn with_state(store: S, state: TodoState) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    #[tracing::instrument(skip(self))]
    pub async fn dispatch(&mut self, command: Command) -> Result<(), TodoError> {
        execute(&mut self.state, &self.store, command).await
    }

    pub async fn load(&mut self) -> Result<(), TodoError> {
        self.dispatch(Command::Load).await
    }

    pub async fn add_task(&mut self, description: impl Into<String>) -> Result<(), TodoError> {
        self.dispatch(Command::Add {
            description: description.into(),
        })
        .await
    }

    pub async fn set_completed(&mut self, id: TaskId, is_completed: bool) -> Result<(), TodoError> {
        self.dispatch(Command::SetCompleted { id, is_completed })
            .await
    }

    pub async fn delete_task(&mut self, id: TaskId) -> Result<(), TodoError> {
        self.dispatch(Command::Delete { id }).await
    }
}
